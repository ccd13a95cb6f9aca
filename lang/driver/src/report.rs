use std::fmt;

use miette::{Diagnostic, LabeledSpan, NamedSource, SourceCode};
use thiserror::Error;

use gobstones_lang_linter::LintError;
use gobstones_lang_miette_util::{SourceFile, ToMiette};

/// A lint error together with the source text its positions refer to.
///
/// The linter only knows `(line, column)` positions. Once the source text is available they are
/// turned into labelled spans, so `miette` can point at the offending names.
#[derive(Error, Debug)]
#[error("{error}")]
pub struct LintReport {
    error: LintError,
    labels: Vec<LabeledSpan>,
    source_code: Option<NamedSource<String>>,
}

impl LintReport {
    pub fn new(error: LintError, file: Option<&SourceFile>) -> Self {
        let Some(file) = file else {
            return LintReport { error, labels: vec![], source_code: None };
        };
        let labels = error
            .positions()
            .into_iter()
            .filter_map(|(label, pos)| match pos.to_miette(file) {
                Some(span) => Some(LabeledSpan::new_with_span(Some(label), span)),
                None => {
                    log::warn!("Position {pos} is not contained in {}", file.name());
                    None
                }
            })
            .collect();
        LintReport { error, labels, source_code: Some(file.named_source()) }
    }

    pub fn error(&self) -> &LintError {
        &self.error
    }
}

impl Diagnostic for LintReport {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.error.code()
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.error.help()
    }

    fn source_code(&self) -> Option<&dyn SourceCode> {
        self.source_code.as_ref().map(|source| source as &dyn SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        if self.labels.is_empty() {
            return None;
        }
        Some(Box::new(self.labels.iter().cloned()))
    }
}
