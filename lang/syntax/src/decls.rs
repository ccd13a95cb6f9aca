use std::fmt;

use serde_derive::{Deserialize, Serialize};

use super::ident::*;
use super::span::Position;
use super::stmt::Block;

/// A complete translation unit.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Module {
    pub definitions: Vec<Decl>,
}

impl Module {
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "tag", rename_all = "snake_case")]
pub enum Decl {
    Program(Program),
    Procedure(Procedure),
    Function(Function),
    Type(TypeDecl),
}

/// Program definition
///
/// ```text
/// interactive program { ... }
/// ^^^^^^^^^^^           ^----- body
///      \------------------------ interactive
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Program {
    pub span: Position,
    #[serde(default)]
    pub interactive: bool,
    pub body: Block,
}

/// Procedure definition
///
/// ```text
/// procedure P(x, y) { ... }
///           ^ ^^^^     ^----- body
///           |   \------------ params
///           \---------------- name
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Procedure {
    pub span: Position,
    pub name: Ident,
    pub params: Vec<Ident>,
    pub body: Block,
}

/// Function definition
///
/// ```text
/// function f(x, y) { ... return (e) }
///          ^ ^^^^     ^----- body
///          |   \------------ params
///          \---------------- name
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Function {
    pub span: Position,
    pub name: Ident,
    pub params: Vec<Ident>,
    pub body: Block,
}

/// Type definition
///
/// ```text
/// type A is record { field x field y }
/// type B is variant { case B1 { ... } case B2 { ... } }
///      ^    ^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^
///      |                     \----- body
///      \--------------------------- name
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeDecl {
    pub span: Position,
    pub name: Ident,
    pub body: TypeBody,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    Record,
    Variant,
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeKind::Record => write!(f, "record"),
            TypeKind::Variant => write!(f, "variant"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "tag", rename_all = "snake_case")]
pub enum TypeBody {
    Record { fields: Vec<Ident> },
    Variant { cases: Vec<Ctor> },
}

impl TypeDecl {
    pub fn kind(&self) -> TypeKind {
        match self.body {
            TypeBody::Record { .. } => TypeKind::Record,
            TypeBody::Variant { .. } => TypeKind::Variant,
        }
    }

    /// The constructors of this type in declaration order.
    ///
    /// A record is a variant with a single constructor named after the type itself,
    /// declared at the position of the type.
    pub fn constructors(&self) -> Vec<Ctor> {
        match &self.body {
            TypeBody::Record { fields } => vec![Ctor {
                span: self.span,
                name: self.name.clone(),
                fields: fields.clone(),
            }],
            TypeBody::Variant { cases } => cases.clone(),
        }
    }
}

/// Declaration of a constructor within the context of a type definition.
///
/// ```text
/// case B1 { field x field y }
///      ^          ^^^^^^^^^
///      |              \----- fields
///      \-------------------- name
/// ```
/// The order of the fields is significant: it determines their positional index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ctor {
    pub span: Position,
    pub name: Ident,
    pub fields: Vec<Ident>,
}
