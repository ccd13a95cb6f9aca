use gobstones_lang_syntax::*;

use super::{CtorMeta, FieldDescriptor, SymbolTable};

impl SymbolTable {
    pub fn program(&self) -> Option<&Program> {
        self.program.as_ref()
    }

    pub fn procedure_definition(&self, name: &str) -> Option<&Procedure> {
        self.procedures.get(name)
    }

    pub fn function_definition(&self, name: &str) -> Option<&Function> {
        self.functions.get(name).map(|meta| &meta.decl)
    }

    /// Whether the function ends with a return statement, `None` for unknown functions.
    pub fn function_has_return(&self, name: &str) -> Option<bool> {
        self.functions.get(name).map(|meta| meta.has_return)
    }

    pub fn procedure_parameters(&self, name: &str) -> Vec<&str> {
        self.procedures.get(name).map(|proc| names(&proc.params)).unwrap_or_default()
    }

    pub fn function_parameters(&self, name: &str) -> Vec<&str> {
        self.functions.get(name).map(|meta| names(&meta.decl.params)).unwrap_or_default()
    }

    pub fn type_definition(&self, name: &str) -> Option<&TypeDecl> {
        self.types.get(name).map(|meta| &meta.decl)
    }

    /// The constructors of a type in declaration order.
    pub fn type_constructors(&self, type_name: &str) -> Vec<&str> {
        self.types
            .get(type_name)
            .map(|meta| meta.ctors.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    pub fn constructor_declaration(&self, name: &str) -> Option<&Ctor> {
        self.ctors.get(name).map(|meta| &meta.decl)
    }

    /// The name of the type a constructor belongs to.
    pub fn constructor_type(&self, ctor_name: &str) -> Option<&str> {
        self.ctors.get(ctor_name).map(|meta| meta.type_name.as_str())
    }

    /// The fields of a constructor in declaration order.
    pub fn constructor_fields(&self, ctor_name: &str) -> Vec<&str> {
        self.ctors
            .get(ctor_name)
            .map(|CtorMeta { decl, .. }| names(&decl.fields))
            .unwrap_or_default()
    }

    pub fn field_descriptor(&self, field_name: &str) -> &[FieldDescriptor] {
        self.fields.get(field_name).map(Vec::as_slice).unwrap_or_default()
    }

    /// All procedures, sorted by name.
    pub fn procedures(&self) -> Vec<&Procedure> {
        let mut procs: Vec<_> = self.procedures.values().collect();
        procs.sort_by(|a, b| a.name.id.cmp(&b.name.id));
        procs
    }

    /// All functions, sorted by name.
    pub fn functions(&self) -> Vec<&Function> {
        let mut funs: Vec<_> = self.functions.values().map(|meta| &meta.decl).collect();
        funs.sort_by(|a, b| a.name.id.cmp(&b.name.id));
        funs
    }

    /// All types, sorted by name.
    pub fn types(&self) -> Vec<&TypeDecl> {
        let mut types: Vec<_> = self.types.values().map(|meta| &meta.decl).collect();
        types.sort_by(|a, b| a.name.id.cmp(&b.name.id));
        types
    }

    /// All field names, sorted.
    pub fn field_names(&self) -> Vec<&str> {
        let mut fields: Vec<_> = self.fields.keys().map(String::as_str).collect();
        fields.sort_unstable();
        fields
    }
}

fn names(idents: &[Ident]) -> Vec<&str> {
    idents.iter().map(Ident::as_str).collect()
}
