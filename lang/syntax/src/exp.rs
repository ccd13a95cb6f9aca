use serde_derive::{Deserialize, Serialize};

use super::ident::Ident;
use super::span::Position;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "tag", rename_all = "snake_case")]
pub enum Exp {
    Variable(Ident),
    Number(NumLit),
    List(List),
    Tuple(Tuple),
    Call(Call),
    BinOp(BinOp),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NumLit {
    pub span: Position,
    pub value: i64,
}

/// ```text
/// [e1, ..., en]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct List {
    pub span: Position,
    pub elems: Vec<Exp>,
}

/// ```text
/// (e1, ..., en)
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tuple {
    pub span: Position,
    pub elems: Vec<Exp>,
}

/// Call of a function, a primitive or a constructor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Call {
    pub span: Position,
    pub name: Ident,
    pub args: Vec<Exp>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BinOp {
    pub span: Position,
    pub operator: Ident,
    pub lhs: Box<Exp>,
    pub rhs: Box<Exp>,
}
