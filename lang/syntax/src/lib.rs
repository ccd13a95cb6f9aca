//! # Syntax tree
//!
//! This representation is the output of the parser and the input of the linter that follows
//! in the compiler pipeline. The structure of the tree corresponds closely to the grammar of the
//! surface syntax: it is not resolved in any way, names are plain identifiers and every node
//! that can be the subject of a diagnostic carries the position at which the parser found it.

pub mod decls;
pub mod exp;
pub mod ident;
pub mod span;
pub mod stmt;

pub use decls::*;
pub use exp::*;
pub use ident::Ident;
pub use span::Position;
pub use stmt::*;

pub type HashMap<K, V> = std::collections::HashMap<K, V, fxhash::FxBuildHasher>;
pub type HashSet<V> = fxhash::FxHashSet<V>;
