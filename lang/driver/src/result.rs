use std::path::PathBuf;
use std::sync::Arc;

use miette::Diagnostic;
use thiserror::Error;

use gobstones_lang_linter::LintError;

pub type MainResult<T = ()> = Result<T, MainError>;

#[derive(Error, Diagnostic, Debug, Clone)]
#[error(transparent)]
#[diagnostic(transparent)]
pub enum MainError {
    Lint(#[from] Box<LintError>),
    Driver(#[from] DriverError),
}

#[derive(Error, Debug, Diagnostic, Clone)]
pub enum DriverError {
    #[error("Could not read {}: {source}", path.display())]
    Io { path: PathBuf, source: Arc<std::io::Error> },
    #[error("{} does not contain a valid syntax tree: {source}", path.display())]
    #[diagnostic(help("Syntax trees are JSON documents with a `definitions` list."))]
    Json { path: PathBuf, source: Arc<serde_json::Error> },
}
