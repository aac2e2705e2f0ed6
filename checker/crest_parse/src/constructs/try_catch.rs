//! `try` blocks and their `catch` clauses.

use crest_ir::{Category, Statement};

use super::{significant_after, significant_here};
use crate::builder::StatementBuilder;
use crate::cursor::Cursor;
use crate::registry::Construct;

pub(crate) struct CatchClause;

impl Construct for CatchClause {
    fn is_valid(&self, cursor: &Cursor<'_>, end: usize) -> bool {
        cursor.category() == Category::Catch
            && significant_after(cursor, end) == Some(Category::LeftParen)
    }

    fn create(&self, parent: &mut Statement, cursor: &mut Cursor<'_>, end: usize) -> bool {
        let end = end.min(cursor.len());
        let mut builder = StatementBuilder::new(parent.add_child());
        builder.push_current(cursor);
        if !builder.parse_arguments(cursor, end) {
            return false;
        }
        builder.parse_scope(cursor, end);
        true
    }
}

pub(crate) struct TryBlock;

impl Construct for TryBlock {
    fn is_valid(&self, cursor: &Cursor<'_>, end: usize) -> bool {
        cursor.category() == Category::Try
            && significant_after(cursor, end) == Some(Category::LeftBrace)
    }

    fn create(&self, parent: &mut Statement, cursor: &mut Cursor<'_>, end: usize) -> bool {
        let end = end.min(cursor.len());
        let mut builder = StatementBuilder::new(parent.add_child());
        builder.push_current(cursor);
        builder.parse_scope(cursor, end);

        // Every directly following catch clause folds into this statement.
        while significant_here(cursor, end) == Some(Category::Catch) {
            builder.copy_filler(cursor, end);
            if !CatchClause.is_valid(cursor, end) {
                break;
            }
            if !CatchClause.create(builder.statement(), cursor, end) {
                return false;
            }
        }

        true
    }
}
