use std::fmt;

use derivative::Derivative;
use serde_derive::{Deserialize, Serialize};

use crate::Position;

#[derive(Debug, Clone, Derivative, Serialize, Deserialize)]
#[derivative(Eq, PartialEq, Hash)]
pub struct Ident {
    #[derivative(PartialEq = "ignore", Hash = "ignore")]
    pub span: Position,
    pub id: String,
}

impl Ident {
    pub fn new(span: impl Into<Position>, id: impl Into<String>) -> Self {
        Ident { span: span.into(), id: id.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for Ident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}
