use gobstones_lang_syntax::*;

use super::stmts::lint_body;
use super::*;

impl Define for Decl {
    fn define(&self, symbol_table: &mut SymbolTable) -> LintResult {
        match self {
            Decl::Program(prg) => prg.define(symbol_table),
            Decl::Procedure(proc) => proc.define(symbol_table),
            Decl::Function(fun) => fun.define(symbol_table),
            Decl::Type(typ) => typ.define(symbol_table),
        }
    }
}

impl Define for Program {
    fn define(&self, symbol_table: &mut SymbolTable) -> LintResult {
        log::trace!("Linting program at {}", self.span);
        symbol_table.set_program(self)?;
        lint_body(BodyKind::Program, &[], &self.body)
    }
}

impl Define for Procedure {
    fn define(&self, symbol_table: &mut SymbolTable) -> LintResult {
        log::trace!("Linting procedure: {}", self.name.id);
        let Procedure { name, params, body, .. } = self;
        symbol_table.define_procedure(self)?;
        lint_body(BodyKind::Procedure(name.id.clone()), params, body)
    }
}

impl Define for Function {
    fn define(&self, symbol_table: &mut SymbolTable) -> LintResult {
        log::trace!("Linting function: {}", self.name.id);
        let Function { span, name, params, body } = self;
        symbol_table.define_function(self)?;
        if let Some(field) = field_position(symbol_table, &name.id) {
            return Err(Box::new(LintError::FunctionAndFieldCannotHaveTheSameName {
                name: name.id.clone(),
                function: *span,
                field,
            }));
        }
        lint_body(BodyKind::Function(name.id.clone()), params, body)
    }
}

impl Define for TypeDecl {
    fn define(&self, symbol_table: &mut SymbolTable) -> LintResult {
        log::trace!("Linting type: {}", self.name.id);
        symbol_table.define_type(self)?;
        for ctor in self.constructors() {
            log::trace!("Linting constructor: {}", ctor.name.id);
            for field in &ctor.fields {
                if let Some(fun) = symbol_table.function_definition(&field.id) {
                    return Err(Box::new(LintError::FunctionAndFieldCannotHaveTheSameName {
                        name: field.id.clone(),
                        function: fun.span,
                        field: field.span,
                    }));
                }
            }
        }
        Ok(())
    }
}

/// The position of the first constructor declaring a field.
///
/// A record declares its fields through a single constructor positioned at the type declaration.
fn field_position(symbol_table: &SymbolTable, field_name: &str) -> Option<Position> {
    let descriptor = symbol_table.field_descriptor(field_name).first()?;
    symbol_table.constructor_declaration(&descriptor.ctor_name).map(|ctor| ctor.span)
}
