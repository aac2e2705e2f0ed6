//! The conditional (ternary) operator.
//!
//! Shared strategy for the question-mark and colon categories. Validation
//! happens at the `?`: the colon alone never starts a ternary, so a colon
//! the strategy does not claim terminates its level (case labels, access
//! labels, heritage lists keep their own colon handling).

use crest_ir::{Category, Statement};

use crate::builder::StatementBuilder;
use crate::cursor::Cursor;
use crate::registry::Construct;
use crate::walk;

pub(crate) struct TernaryOperator;

impl TernaryOperator {
    /// Look for the ternary-else colon at bracket depth zero before
    /// anything that would close the current level.
    fn colon_at_depth_zero(cursor: &Cursor<'_>, end: usize) -> bool {
        let end = end.min(cursor.len());
        let mut depth = 0usize;
        for pos in cursor.position() + 1..end {
            let category = cursor.category_at(pos);
            if category.is_opening_bracket() {
                depth += 1;
            } else if category.is_closing_bracket() {
                if depth == 0 {
                    return false;
                }
                depth -= 1;
            } else if depth == 0 {
                match category {
                    Category::Colon => return true,
                    Category::Semicolon | Category::Eof | Category::Eoi => return false,
                    _ => {}
                }
            }
        }
        false
    }
}

impl Construct for TernaryOperator {
    fn is_valid(&self, cursor: &Cursor<'_>, end: usize) -> bool {
        match cursor.category() {
            Category::Question => Self::colon_at_depth_zero(cursor, end),
            _ => false,
        }
    }

    fn create(&self, parent: &mut Statement, cursor: &mut Cursor<'_>, end: usize) -> bool {
        let end = end.min(cursor.len());
        let mut builder = StatementBuilder::new(parent.add_child());
        builder.push_current(cursor);

        // Then-branch, up to and including the depth-zero colon.
        while cursor.position() < end {
            match cursor.category() {
                Category::Colon => {
                    builder.push_current(cursor);
                    break;
                }
                category if category.is_opening_bracket() => {
                    walk::parse_bracket_group(builder.statement(), cursor, end);
                }
                Category::Semicolon
                | Category::RightParen
                | Category::RightBrace
                | Category::RightBracket
                | Category::Eof
                | Category::Eoi => break,
                _ => {
                    builder.push_current(cursor);
                }
            }
        }

        // Else-branch: one expression run, stopping before whatever closes
        // the level.
        if cursor.position() < end {
            let category = cursor.category();
            if !category.terminates_level() && category != Category::Comma {
                builder.parse_argument(cursor, end);
            }
        }

        true
    }
}
