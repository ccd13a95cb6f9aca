mod ctx;
mod lint;
mod result;
mod symbol_table;

#[cfg(test)]
mod test_util;

use gobstones_lang_syntax::Module;

use crate::lint::Define;

pub use result::*;
pub use symbol_table::{FieldDescriptor, SymbolTable};

/// Semantic checks of a translation unit.
///
/// The linter walks the top-level definitions in source order, registers each of them in the
/// symbol table and immediately checks the statements of its body. The first violation aborts the
/// walk; the symbol table is only handed back if the whole module is accepted.
pub struct Linter {
    symbol_table: SymbolTable,
}

impl Linter {
    pub fn new(symbol_table: SymbolTable) -> Self {
        Linter { symbol_table }
    }

    pub fn lint(mut self, module: &Module) -> LintResult<SymbolTable> {
        log::debug!("Linting module with {} definitions", module.definitions.len());
        module.definitions.define(&mut self.symbol_table)?;

        if self.symbol_table.program().is_none() && !module.is_empty() {
            return Err(Box::new(LintError::SourceShouldHaveAProgramDefinition));
        }
        Ok(self.symbol_table)
    }
}

/// Lint a module starting from an empty symbol table.
pub fn lint(module: &Module) -> LintResult<SymbolTable> {
    Linter::new(SymbolTable::default()).lint(module)
}
