pub mod source;

pub use source::{LocationError, SourceFile};

use gobstones_lang_syntax::Position;

/// Conversion of positions handed over by the parser into `miette` spans.
///
/// Positions are `(line, column)` pairs, so the conversion needs the source text they refer to.
pub trait ToMiette {
    type Target;

    fn to_miette(self, file: &SourceFile) -> Self::Target;
}

impl ToMiette for Position {
    type Target = Option<miette::SourceSpan>;

    fn to_miette(self, file: &SourceFile) -> Self::Target {
        file.span(self).ok()
    }
}
