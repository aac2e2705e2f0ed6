//! Core data model for the Crest statement-tree builder.
//!
//! This crate is standalone on purpose: rule authors and editor tooling can
//! inspect statement trees without linking the parser. It provides:
//!
//! - [`Token`] / [`TokenSequence`] — the lexemes handed over by the lexer,
//!   carried through the tree unchanged;
//! - [`Category`] and [`classify`] — the total mapping from a token's
//!   lexical name to its syntactic category;
//! - [`Statement`] — the tree node: leaf tokens and child statements with a
//!   slot-marker interleaving that preserves the exact source order.

mod category;
mod statement;
mod token;

pub use category::{classify, Category};
pub use statement::{Item, ItemKind, Items, Statement};
pub use token::{Token, TokenSequence};
