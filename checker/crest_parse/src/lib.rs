//! Statement-tree parser for the Crest style checker.
//!
//! Turns a flat token sequence into a hierarchical [`Statement`] tree so
//! that rule checks can query structural context instead of re-scanning
//! flat tokens. The parser is deliberately permissive: it groups tokens
//! plausibly and recovers on mismatch, it never rejects input. A tree is
//! always returned; a malformed region yields a structurally incomplete
//! subtree, not an error.
//!
//! The engine is built from:
//!
//! - a bounds-checked token [`Cursor`] with the category array computed
//!   once per parse;
//! - the bracket [`matching_close`] scan;
//! - the construct registry ([`Construct`] strategies for control flow,
//!   labels, namespaces, structs, access specifiers and the ternary
//!   operator);
//! - the two cooperating recursive walkers (whole-subtree and
//!   single-construct);
//! - the structured declaration builder ([`StatementBuilder`]) for scopes,
//!   heritage lists, argument lists and declarator lists.

mod builder;
mod constructs;
mod cursor;
mod error;
mod matcher;
mod registry;
mod stack;
mod walk;

#[cfg(test)]
mod tests;

pub use builder::{copy_filler, starts_statement, FinishStack, StatementBuilder};
pub use cursor::Cursor;
pub use error::BuildError;
pub use matcher::matching_close;
pub use registry::{is_handled, lookup, strategy, Construct};

use crest_ir::{Statement, Token, TokenSequence};

/// Build the statement tree for the first statement of `tokens`.
///
/// Runs one whole-subtree walk from the start of the sequence; consumption
/// ends at the first top-level terminator, so repeated calls over the
/// remainder of a sequence yield successive statements. Use
/// [`build_translation_unit`] for a full-file parse.
pub fn build_statement_tree(tokens: &TokenSequence) -> Statement {
    let mut response = Statement::new();
    let mut cursor = Cursor::new(tokens);
    let end = cursor.len();
    walk::parse_all(&mut response, &mut cursor, end);
    response
}

/// Build a statement tree anchored at the first occurrence of `anchor`.
///
/// Scans for the first token equal to `anchor` and runs one
/// single-construct walk from there. An absent anchor yields an empty
/// statement.
pub fn build_from_first_match(anchor: &Token, tokens: &TokenSequence) -> Statement {
    let mut response = Statement::new();
    let Some(start) = tokens.iter().position(|token| token == anchor) else {
        return response;
    };
    let mut cursor = Cursor::new(tokens);
    cursor.set_position(start);
    let end = cursor.len();
    walk::parse_one(&mut response, &mut cursor, end);
    response
}

/// Build one tree covering the whole token sequence.
///
/// Successive top-level statements become children of a synthetic root via
/// the standard single-unit dispatch; every input token ends up in the
/// tree (flattening the result reproduces `tokens` exactly).
pub fn build_translation_unit(tokens: &TokenSequence) -> Statement {
    let mut root = Statement::new();
    let mut cursor = Cursor::new(tokens);
    let end = cursor.len();
    while cursor.position() < end {
        let before = cursor.position();
        if walk::dispatch(&mut root, &mut cursor, end).is_err() {
            break;
        }
        if cursor.position() == before {
            // The dispatched walk refused the token (e.g. a stray
            // end-of-input token mid-stream): keep it as a plain leaf.
            if let Some(token) = cursor.current() {
                root.push(token.clone());
            }
            cursor.advance();
        }
    }
    root
}
