use std::fmt;

use gobstones_lang_syntax::Position;
use miette::Diagnostic;
use thiserror::Error;

pub type LintResult<T = ()> = Result<T, Box<LintError>>;

/// The kind of a name bound inside the body of a program or routine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocalKind {
    Parameter,
    Index,
    Variable,
}

impl LocalKind {
    /// The identifier under which the message catalog knows this kind.
    pub fn message_id(self) -> &'static str {
        match self {
            LocalKind::Parameter => "LocalParameter",
            LocalKind::Index => "LocalIndex",
            LocalKind::Variable => "LocalVariable",
        }
    }
}

impl fmt::Display for LocalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocalKind::Parameter => write!(f, "parameter"),
            LocalKind::Index => write!(f, "index"),
            LocalKind::Variable => write!(f, "variable"),
        }
    }
}

#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum LintError {
    #[error("The program is already defined at {first}, cannot define it again at {second}")]
    #[diagnostic(code("L-001"))]
    ProgramAlreadyDefined { first: Position, second: Position },
    #[error("Procedure {name} is already defined at {first}, cannot define it again at {second}")]
    #[diagnostic(code("L-002"))]
    ProcedureAlreadyDefined { name: String, first: Position, second: Position },
    #[error("Function {name} is already defined at {first}, cannot define it again at {second}")]
    #[diagnostic(code("L-003"))]
    FunctionAlreadyDefined { name: String, first: Position, second: Position },
    #[error("Type {name} is already defined at {first}, cannot define it again at {second}")]
    #[diagnostic(code("L-004"))]
    TypeAlreadyDefined { name: String, first: Position, second: Position },
    #[error("Constructor {name} is already defined at {first}, cannot define it again at {second}")]
    #[diagnostic(code("L-005"))]
    ConstructorAlreadyDefined { name: String, first: Position, second: Position },
    #[error("Constructor {ctor} declares the field {field} more than once")]
    #[diagnostic(code("L-006"))]
    RepeatedFieldName { ctor: String, field: String },
    #[error("{name} is a function at {function} and a field at {field}")]
    #[diagnostic(
        code("L-007"),
        help("Functions and fields share a namespace, rename one of them.")
    )]
    FunctionAndFieldCannotHaveTheSameName { name: String, function: Position, field: Position },
    #[error("The source defines procedures, functions or types but no program")]
    #[diagnostic(code("L-008"), help("Add a `program {{ ... }}` definition."))]
    SourceShouldHaveAProgramDefinition,
    #[error("Procedure {name} should not have a return statement")]
    #[diagnostic(code("L-009"), help("Only functions and programs may return values."))]
    ProcedureShouldNotHaveReturn { name: String },
    #[error("Function {name} should end with a return statement")]
    #[diagnostic(code("L-010"))]
    FunctionShouldHaveReturn { name: String },
    #[error("Return statements are only allowed at the end of a program or function body")]
    #[diagnostic(code("L-011"))]
    ReturnStatementNotAllowedHere { span: Position },
    #[error(
        "{name} is already a {existing_kind} at {existing}, it cannot be a {new_kind} at {new}"
    )]
    #[diagnostic(code("L-012"))]
    LocalNameConflict {
        name: String,
        existing_kind: LocalKind,
        existing: Position,
        new_kind: LocalKind,
        new: Position,
    },
    #[error("The variable {name} is assigned more than once in the same tuple assignment")]
    #[diagnostic(code("L-013"))]
    RepeatedVariableInTupleAssignment { name: String },
}

impl LintError {
    /// The identifier under which the message catalog knows this kind of error.
    pub fn message_id(&self) -> &'static str {
        match self {
            LintError::ProgramAlreadyDefined { .. } => "program-already-defined",
            LintError::ProcedureAlreadyDefined { .. } => "procedure-already-defined",
            LintError::FunctionAlreadyDefined { .. } => "function-already-defined",
            LintError::TypeAlreadyDefined { .. } => "type-already-defined",
            LintError::ConstructorAlreadyDefined { .. } => "constructor-already-defined",
            LintError::RepeatedFieldName { .. } => "repeated-field-name",
            LintError::FunctionAndFieldCannotHaveTheSameName { .. } => {
                "function-and-field-cannot-have-the-same-name"
            }
            LintError::SourceShouldHaveAProgramDefinition => {
                "source-should-have-a-program-definition"
            }
            LintError::ProcedureShouldNotHaveReturn { .. } => "procedure-should-not-have-return",
            LintError::FunctionShouldHaveReturn { .. } => "function-should-have-return",
            LintError::ReturnStatementNotAllowedHere { .. } => {
                "return-statement-not-allowed-here"
            }
            LintError::LocalNameConflict { .. } => "local-name-conflict",
            LintError::RepeatedVariableInTupleAssignment { .. } => {
                "repeated-variable-in-tuple-assignment"
            }
        }
    }

    /// The positions carried by this error, each with a short description, in payload order.
    pub fn positions(&self) -> Vec<(String, Position)> {
        match self {
            LintError::ProgramAlreadyDefined { first, second } => vec![
                ("first defined here".to_owned(), *first),
                ("defined again here".to_owned(), *second),
            ],
            LintError::ProcedureAlreadyDefined { first, second, .. }
            | LintError::FunctionAlreadyDefined { first, second, .. }
            | LintError::TypeAlreadyDefined { first, second, .. }
            | LintError::ConstructorAlreadyDefined { first, second, .. } => vec![
                ("first defined here".to_owned(), *first),
                ("defined again here".to_owned(), *second),
            ],
            LintError::FunctionAndFieldCannotHaveTheSameName { function, field, .. } => vec![
                ("function".to_owned(), *function),
                ("field".to_owned(), *field),
            ],
            LintError::ReturnStatementNotAllowedHere { span } => {
                vec![("return".to_owned(), *span)]
            }
            LintError::LocalNameConflict { existing_kind, existing, new_kind, new, .. } => vec![
                (format!("{existing_kind}"), *existing),
                (format!("{new_kind}"), *new),
            ],
            LintError::RepeatedFieldName { .. }
            | LintError::SourceShouldHaveAProgramDefinition
            | LintError::ProcedureShouldNotHaveReturn { .. }
            | LintError::FunctionShouldHaveReturn { .. }
            | LintError::RepeatedVariableInTupleAssignment { .. } => vec![],
        }
    }
}
