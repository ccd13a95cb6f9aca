use gobstones_lang_syntax::*;

pub mod build;
pub mod lookup;

/// The global definitions of a translation unit together with their cross-reference indices.
///
/// Entries are added exactly once by the linter and never change afterwards. Every namespace
/// (procedures, functions, types, constructors) is checked for uniqueness on its own: policies
/// spanning several namespaces, like the clash between fields and functions, belong to the linter.
#[derive(Debug, Default, Clone)]
pub struct SymbolTable {
    program: Option<Program>,
    procedures: HashMap<String, Procedure>,
    functions: HashMap<String, FunctionMeta>,
    types: HashMap<String, TypeMeta>,
    ctors: HashMap<String, CtorMeta>,
    /// Maps field names to every site at which they are declared, in the order the declaring
    /// constructors were added.
    fields: HashMap<String, Vec<FieldDescriptor>>,
}

#[derive(Clone, Debug)]
pub struct FunctionMeta {
    pub decl: Function,
    /// Whether the outermost block of the body ends with a return statement
    pub has_return: bool,
}

#[derive(Clone, Debug)]
pub struct TypeMeta {
    pub decl: TypeDecl,
    /// Constructor names in declaration order
    pub ctors: Vec<String>,
}

#[derive(Clone, Debug)]
pub struct CtorMeta {
    pub type_name: String,
    pub decl: Ctor,
}

/// One site at which a field is declared: the constructor `ctor_name` of type `type_name`
/// has the field at the zero-based position `index`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub type_name: String,
    pub ctor_name: String,
    pub index: usize,
}
