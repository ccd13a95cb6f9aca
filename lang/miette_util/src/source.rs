use gobstones_lang_syntax::Position;
use miette::{NamedSource, SourceOffset, SourceSpan};
use thiserror::Error;

/// An error that happened while looking up a position in a source file.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LocationError {
    #[error("The file does not contain line {given} (it has {max} lines)")]
    LineTooLarge { given: u32, max: usize },
    #[error("Line {line} does not contain column {given}")]
    ColumnTooLarge { line: u32, given: u32 },
}

/// The text of a source file together with the starting byte index of every line.
#[derive(Debug, Clone)]
pub struct SourceFile {
    name: String,
    source: String,
    line_starts: Vec<usize>,
}

impl SourceFile {
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Self {
        // Git on Windows may check out Unix line endings (\n) as Windows line endings (\r\n).
        // Positions must not depend on the platform, so we normalize to \n.
        let source = source.into().replace("\r\n", "\n");
        let line_starts = std::iter::once(0)
            .chain(source.match_indices('\n').map(|(i, _)| i + 1))
            .collect();
        SourceFile { name: name.into(), source, line_starts }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    fn line(&self, line: u32) -> Result<&str, LocationError> {
        let max = self.line_starts.len();
        let err = LocationError::LineTooLarge { given: line, max };
        let idx = (line as usize).checked_sub(1).ok_or(err.clone())?;
        let start = *self.line_starts.get(idx).ok_or(err)?;
        let end = self
            .line_starts
            .get(idx + 1)
            .map(|next| next - 1)
            .unwrap_or(self.source.len());
        Ok(&self.source[start..end])
    }

    /// The byte offset of a 1-indexed `(line, column)` position.
    ///
    /// Columns count characters, not bytes. The position just past the last character of a
    /// line is valid.
    pub fn offset(&self, pos: Position) -> Result<usize, LocationError> {
        let line_src = self.line(pos.line)?;
        let line_start = self.line_starts[pos.line as usize - 1];
        let err = LocationError::ColumnTooLarge { line: pos.line, given: pos.column };
        let col = (pos.column as usize).checked_sub(1).ok_or(err.clone())?;
        match line_src.char_indices().nth(col) {
            Some((byte, _)) => Ok(line_start + byte),
            None if col == line_src.chars().count() => Ok(line_start + line_src.len()),
            None => Err(err),
        }
    }

    /// The span of the word starting at the given position.
    ///
    /// Identifiers and keywords are highlighted completely, any other character on its own.
    pub fn span(&self, pos: Position) -> Result<SourceSpan, LocationError> {
        let start = self.offset(pos)?;
        let rest = &self.source[start..];
        let word: usize = rest
            .chars()
            .take_while(|c| c.is_alphanumeric() || *c == '_' || *c == '\'')
            .map(char::len_utf8)
            .sum();
        let length = match word {
            0 => rest.chars().next().filter(|c| *c != '\n').map(char::len_utf8).unwrap_or(0),
            n => n,
        };
        Ok(SourceSpan::new(SourceOffset::from(start), length))
    }

    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.name, self.source.clone())
    }
}
