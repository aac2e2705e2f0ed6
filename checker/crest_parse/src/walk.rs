//! The two cooperating tree-building walks.
//!
//! [`parse_all`] (whole-subtree) consumes tokens left to right until the
//! range ends or a category that structurally closes the current level is
//! reached. [`parse_one`] (single-construct) consumes at most one
//! interesting unit — a registered construct or a balanced bracket group —
//! and stops. Both evaluate the same ordered processing rules per cursor
//! position; they differ only in how many sibling units they take at the
//! current nesting level.
//!
//! All procedures check for exhaustion before dereferencing and terminate
//! their local walk gracefully on truncated input, leaving whatever was
//! built so far intact. On return the cursor sits just past everything the
//! walk consumed, including a terminator it pushed.

use crest_ir::{Category, Statement, Token, TokenSequence};
use tracing::trace;

use crate::cursor::Cursor;
use crate::error::BuildError;
use crate::matcher;
use crate::registry;
use crate::stack::ensure_sufficient_stack;

/// Whole-subtree walk: append every sibling construct and leaf at this
/// level to `response` until the range ends or the level is closed.
pub(crate) fn parse_all(response: &mut Statement, cursor: &mut Cursor<'_>, end: usize) {
    ensure_sufficient_stack(|| {
        let end = end.min(cursor.len());
        while cursor.position() < end {
            let Some(token) = cursor.current() else { break };
            let category = cursor.category();

            // End-of-input category terminates the walk immediately.
            if matches!(category, Category::Eof | Category::Eoi) {
                break;
            }

            // A validated construct (ternary included) recurses through its
            // strategy; the whole-subtree walk then continues with the next
            // sibling.
            if let Some(construct) = registry::lookup(category) {
                if construct.is_valid(cursor, end) {
                    trace!(?category, pos = cursor.position(), "construct");
                    let before = cursor.position();
                    construct.create(response, cursor, end);
                    if cursor.position() == before {
                        // The strategy refused without consuming: degrade
                        // to a plain leaf rather than stall.
                        response.push(token.clone());
                        cursor.advance();
                    }
                    continue;
                }
            }

            // `extern` opens a child holding the remainder as one nested
            // statement (linkage blocks, externed declarations).
            if category == Category::Extern {
                let child = response.add_child();
                child.push(token.clone());
                cursor.advance();
                parse_one(child, cursor, end);
                continue;
            }

            // Bracket groups parse their interior recursively.
            if category.is_opening_bracket() {
                parse_bracket_group(response, cursor, end);
                continue;
            }

            // A closer, a bare semicolon, or a colon not claimed by a
            // ternary stays a leaf of the current level and hands control
            // back to the caller.
            if category.terminates_level() {
                response.push(token.clone());
                cursor.advance();
                break;
            }

            // A #define body is carved out and parsed as its own stream.
            if category == Category::PpDefine {
                parse_define_directive(response, cursor, end);
                continue;
            }

            // Plain leaf.
            response.push(token.clone());
            cursor.advance();
        }
    });
}

/// Single-construct walk: consume leaves up to and including one
/// interesting unit, then stop.
pub(crate) fn parse_one(response: &mut Statement, cursor: &mut Cursor<'_>, end: usize) {
    ensure_sufficient_stack(|| {
        let end = end.min(cursor.len());
        while cursor.position() < end {
            let Some(token) = cursor.current() else { break };
            let category = cursor.category();

            if matches!(category, Category::Eof | Category::Eoi) {
                break;
            }

            if let Some(construct) = registry::lookup(category) {
                if construct.is_valid(cursor, end) {
                    trace!(?category, pos = cursor.position(), "construct");
                    let before = cursor.position();
                    construct.create(response, cursor, end);
                    if cursor.position() == before {
                        response.push(token.clone());
                        cursor.advance();
                        continue;
                    }
                    // A ternary is mid-statement: keep walking until the
                    // level terminates. Any other construct is the unit.
                    if matches!(category, Category::Question | Category::Colon) {
                        continue;
                    }
                    break;
                }
            }

            if category == Category::Extern {
                let child = response.add_child();
                child.push(token.clone());
                cursor.advance();
                parse_one(child, cursor, end);
                break;
            }

            if category.is_opening_bracket() {
                parse_bracket_group(response, cursor, end);
                break;
            }

            if category.terminates_level() {
                response.push(token.clone());
                cursor.advance();
                break;
            }

            if category == Category::PpDefine {
                parse_define_directive(response, cursor, end);
                break;
            }

            response.push(token.clone());
            cursor.advance();
        }
    });
}

/// Parse one balanced bracket group into a new child of `parent`.
///
/// The child starts with the opener; the interior (up to the matched
/// closer) is consumed by repeated whole-subtree walks, so interior
/// terminators never leak past the group; the closer ends the child.
/// Returns false when the closer is missing before `end` — the child then
/// intentionally lacks its closing leaf.
pub(crate) fn parse_bracket_group(
    parent: &mut Statement,
    cursor: &mut Cursor<'_>,
    end: usize,
) -> bool {
    let end = end.min(cursor.len());
    let open_at = cursor.position();
    let Some(opener) = cursor.current() else {
        return false;
    };
    let close_at = matcher::matching_close(cursor, open_at, end);

    let child = parent.add_child();
    child.push(opener.clone());
    cursor.advance();

    while cursor.position() < close_at {
        let before = cursor.position();
        parse_all(child, cursor, close_at);
        if cursor.position() == before {
            // A token even the whole-subtree walk refused (stray
            // end-of-input category): keep it as a leaf.
            if let Some(stray) = cursor.current() {
                child.push(stray.clone());
            }
            cursor.advance();
        }
    }

    if close_at < end {
        if let Some(closer) = cursor.current() {
            child.push(closer.clone());
        }
        cursor.advance();
        true
    } else {
        false
    }
}

/// Parse a `#define` directive: the directive token stays a leaf, the run
/// of tokens up to (excluding) the next newline is carved out and parsed
/// into one appended child as an independent top-level stream.
fn parse_define_directive(response: &mut Statement, cursor: &mut Cursor<'_>, end: usize) {
    let end = end.min(cursor.len());
    let Some(directive) = cursor.current() else {
        return;
    };
    response.push(directive.clone());
    cursor.advance();

    let body = extract_until(cursor, end, Category::Newline);
    trace!(tokens = body.len(), "define body carved");

    let child = response.add_child();
    parse_sequence(child, &body);
}

/// Carve out the tokens up to (excluding) the next `terminator`-category
/// token and consume them from the main stream.
///
/// Returns an empty sequence — and consumes nothing — unless a terminator
/// is found strictly after the start (a truncated macro body degrades to
/// "nothing captured" rather than failing).
fn extract_until(cursor: &mut Cursor<'_>, end: usize, terminator: Category) -> TokenSequence {
    let start = cursor.position();
    let mut stop = start;
    while stop < end && cursor.category_at(stop) != terminator {
        stop += 1;
    }
    if stop >= end || stop == start {
        return TokenSequence::new();
    }

    let mut carved = TokenSequence::with_capacity(stop - start);
    while cursor.position() < stop {
        if let Some(token) = cursor.current() {
            carved.push(token.clone());
        }
        cursor.advance();
    }
    carved
}

/// Parse an independent token sequence to exhaustion, appending into
/// `response` (used for carved macro bodies).
pub(crate) fn parse_sequence(response: &mut Statement, tokens: &[Token]) {
    let mut cursor = Cursor::new(tokens);
    let end = cursor.len();
    while cursor.position() < end {
        let before = cursor.position();
        parse_one(response, &mut cursor, end);
        if cursor.position() == before {
            if let Some(token) = cursor.current() {
                response.push(token.clone());
            }
            cursor.advance();
        }
    }
}

/// Standard single-unit dispatch: a validated construct or an unhandled
/// token run is wrapped as one opaque child; a handled-but-invalid token
/// keeps parsing into `response` itself (its colon/closer semantics belong
/// to the current level).
pub(crate) fn dispatch(
    response: &mut Statement,
    cursor: &mut Cursor<'_>,
    end: usize,
) -> Result<(), BuildError> {
    let end = end.min(cursor.len());
    if cursor.position() >= end {
        return Err(BuildError::EmptyRange);
    }

    let category = cursor.category();
    if registry::is_handled(category) {
        // `is_handled` was just checked; a miss here is registry
        // corruption, not a data error.
        let construct = match registry::strategy(category) {
            Ok(construct) => construct,
            Err(err) => unreachable!("{err}"),
        };
        if construct.is_valid(cursor, end) {
            parse_one(response.add_child(), cursor, end);
        } else {
            parse_one(response, cursor, end);
        }
    } else {
        parse_one(response.add_child(), cursor, end);
    }
    Ok(())
}
