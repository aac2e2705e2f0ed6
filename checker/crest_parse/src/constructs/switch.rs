//! `switch` statements and their `case`/`default` labels.

use crest_ir::{Category, Statement};

use super::{significant_after, significant_here};
use crate::builder::StatementBuilder;
use crate::cursor::Cursor;
use crate::registry::Construct;
use crate::walk;

pub(crate) struct SwitchStatement;

impl Construct for SwitchStatement {
    fn is_valid(&self, cursor: &Cursor<'_>, end: usize) -> bool {
        cursor.category() == Category::Switch
            && significant_after(cursor, end) == Some(Category::LeftParen)
    }

    fn create(&self, parent: &mut Statement, cursor: &mut Cursor<'_>, end: usize) -> bool {
        let end = end.min(cursor.len());
        let mut builder = StatementBuilder::new(parent.add_child());
        builder.push_current(cursor);
        if !builder.parse_arguments(cursor, end) {
            return false;
        }
        // Labels inside the body dispatch through the registry like any
        // scope statement.
        builder.parse_scope(cursor, end);
        true
    }
}

pub(crate) struct CaseLabel;

impl CaseLabel {
    /// A case label needs its colon before anything that would end the
    /// surrounding statement.
    fn colon_ahead(cursor: &Cursor<'_>, end: usize) -> bool {
        let end = end.min(cursor.len());
        for pos in cursor.position() + 1..end {
            match cursor.category_at(pos) {
                Category::Colon => return true,
                Category::Semicolon
                | Category::LeftBrace
                | Category::RightBrace
                | Category::Eof
                | Category::Eoi => return false,
                _ => {}
            }
        }
        false
    }
}

impl Construct for CaseLabel {
    fn is_valid(&self, cursor: &Cursor<'_>, end: usize) -> bool {
        cursor.category() == Category::Case && Self::colon_ahead(cursor, end)
    }

    fn create(&self, parent: &mut Statement, cursor: &mut Cursor<'_>, end: usize) -> bool {
        let end = end.min(cursor.len());
        let mut builder = StatementBuilder::new(parent.add_child());
        builder.push_current(cursor);

        // The label expression, up to and including the colon. Statements
        // after the label stay siblings in the enclosing scope.
        while cursor.position() < end {
            match cursor.category() {
                Category::Colon => {
                    builder.push_current(cursor);
                    break;
                }
                Category::LeftParen => {
                    walk::parse_bracket_group(builder.statement(), cursor, end);
                }
                Category::Semicolon
                | Category::LeftBrace
                | Category::RightBrace
                | Category::Eof
                | Category::Eoi => break,
                _ => {
                    builder.push_current(cursor);
                }
            }
        }

        true
    }
}

pub(crate) struct DefaultLabel;

impl Construct for DefaultLabel {
    fn is_valid(&self, cursor: &Cursor<'_>, end: usize) -> bool {
        cursor.category() == Category::Default
            && significant_after(cursor, end) == Some(Category::Colon)
    }

    fn create(&self, parent: &mut Statement, cursor: &mut Cursor<'_>, end: usize) -> bool {
        let end = end.min(cursor.len());
        let mut builder = StatementBuilder::new(parent.add_child());
        builder.push_current(cursor);
        if significant_here(cursor, end) != Some(Category::Colon) {
            return false;
        }
        builder.copy_filler(cursor, end);
        builder.push_current(cursor);
        true
    }
}
