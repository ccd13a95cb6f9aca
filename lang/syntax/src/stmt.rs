use serde_derive::{Deserialize, Serialize};

use super::exp::Exp;
use super::ident::Ident;
use super::span::Position;

/// A sequence of statements enclosed in braces.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Block {
    pub span: Position,
    pub stmts: Vec<Stmt>,
}

impl Block {
    /// The return statement in the last slot of this block, if any.
    pub fn tail_return(&self) -> Option<&Return> {
        match self.stmts.last() {
            Some(Stmt::Return(ret)) => Some(ret),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "tag", rename_all = "snake_case")]
pub enum Stmt {
    Block(Block),
    Return(Return),
    Assign(Assign),
    AssignTuple(AssignTuple),
    If(If),
    While(While),
    Repeat(Repeat),
    Foreach(Foreach),
    Switch(Switch),
    ProcedureCall(ProcedureCall),
}

/// ```text
/// return (e1, ..., en)
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Return {
    pub span: Position,
    pub result: Vec<Exp>,
}

/// ```text
/// x := e
/// ^    ^----- value
/// \---------- name
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assign {
    pub span: Position,
    pub name: Ident,
    pub value: Exp,
}

/// ```text
/// let (x, y) := e
///      ^^^^     ^----- value
///        \------------ names
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignTuple {
    pub span: Position,
    pub names: Vec<Ident>,
    pub value: Exp,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct If {
    pub span: Position,
    pub cond: Exp,
    pub then_branch: Block,
    pub else_branch: Option<Block>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct While {
    pub span: Position,
    pub cond: Exp,
    pub body: Block,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Repeat {
    pub span: Position,
    pub times: Exp,
    pub body: Block,
}

/// ```text
/// foreach i in e { ... }
///         ^    ^    ^----- body
///         |    \---------- range
///         \--------------- index
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Foreach {
    pub span: Position,
    pub index: Ident,
    pub range: Exp,
    pub body: Block,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Switch {
    pub span: Position,
    pub subject: Exp,
    pub branches: Vec<SwitchBranch>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwitchBranch {
    pub pattern: Pattern,
    pub body: Block,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "tag", rename_all = "snake_case")]
pub enum Pattern {
    Wildcard { span: Position },
    Number { span: Position, value: i64 },
    Structure { span: Position, ctor: Ident },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcedureCall {
    pub span: Position,
    pub name: Ident,
    pub args: Vec<Exp>,
}
