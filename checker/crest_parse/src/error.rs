//! Builder contract errors.
//!
//! Structural-expectation failures (a missing paren, a base specifier that
//! does not parse) stay plain `bool` results on the builder operations;
//! the variants here cover the two ways a *caller* can drive the engine
//! outside its contract. Neither ever reaches the tree's end consumer.

use crest_ir::Category;
use thiserror::Error;

#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum BuildError {
    /// The single-unit dispatcher was driven over an already-exhausted
    /// token range.
    #[error("token range is empty")]
    EmptyRange,

    /// A strategy was requested for a category the registry does not
    /// cover. Callers must check `is_handled` first.
    #[error("no construct strategy registered for category {0:?}")]
    Unhandled(Category),
}
