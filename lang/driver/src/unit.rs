use std::path::{Path, PathBuf};

use gobstones_lang_linter::{SymbolTable, lint};
use gobstones_lang_miette_util::SourceFile;
use gobstones_lang_syntax::Module;

use crate::load::{load_module, load_source};
use crate::report::LintReport;
use crate::result::{MainError, MainResult};

/// A syntax tree handed over by the parser, optionally together with the text it was parsed from.
pub struct Unit {
    path: PathBuf,
    module: Module,
    source: Option<SourceFile>,
}

impl Unit {
    /// Load the syntax tree at `tree` and, if given, the source text at `source`.
    pub fn load(tree: &Path, source: Option<&Path>) -> MainResult<Self> {
        let module = load_module(tree)?;
        let source = source.map(load_source).transpose()?;
        Ok(Unit { path: tree.to_path_buf(), module, source })
    }

    pub fn new(path: impl Into<PathBuf>, module: Module, source: Option<SourceFile>) -> Self {
        Unit { path: path.into(), module, source }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn module(&self) -> &Module {
        &self.module
    }

    pub fn lint(&self) -> MainResult<SymbolTable> {
        log::debug!("Linting {}", self.path.display());
        Ok(lint(&self.module)?)
    }

    /// Turn an error into a report, attaching the source text to lint errors if available.
    pub fn pretty_error(&self, err: MainError) -> miette::Report {
        match err {
            MainError::Lint(err) => {
                miette::Report::new(LintReport::new(*err, self.source.as_ref()))
            }
            err => miette::Report::new(err),
        }
    }
}
