use super::ctx::*;
use super::result::*;
use super::symbol_table::SymbolTable;

mod decls;
mod stmts;

/// Registration of a top-level definition in the symbol table, followed by the statement pass
/// over its body.
pub trait Define {
    fn define(&self, symbol_table: &mut SymbolTable) -> LintResult;
}

impl<T: Define> Define for Vec<T> {
    fn define(&self, symbol_table: &mut SymbolTable) -> LintResult {
        self.iter().try_for_each(|x| x.define(symbol_table))
    }
}

/// Scope and placement checks for statements.
pub trait Lint {
    fn lint(&self, ctx: &mut Ctx) -> LintResult;
}

impl<T: Lint> Lint for Option<T> {
    fn lint(&self, ctx: &mut Ctx) -> LintResult {
        self.as_ref().map(|x| x.lint(ctx)).transpose().map(|_| ())
    }
}

impl<T: Lint> Lint for Vec<T> {
    fn lint(&self, ctx: &mut Ctx) -> LintResult {
        self.iter().try_for_each(|x| x.lint(ctx))
    }
}
