//! Crate-level behavior tests.
//!
//! `support` plays the role of the external lexer: it turns a
//! whitespace-separated source string into a token sequence with the
//! lexical names the classifier expects.

mod declarations;
mod support;
