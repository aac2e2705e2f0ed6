//! `if` statements, with their `else` branches.

use crest_ir::{Category, Statement};

use super::{significant_after, significant_here};
use crate::builder::StatementBuilder;
use crate::cursor::Cursor;
use crate::registry::Construct;

pub(crate) struct IfStatement;

impl Construct for IfStatement {
    fn is_valid(&self, cursor: &Cursor<'_>, end: usize) -> bool {
        cursor.category() == Category::If
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

        // The else branch belongs to this statement; `else if` chains
        // resolve through the scope fallback dispatching the nested if.
        if significant_here(cursor, end) == Some(Category::Else) {
            builder.copy_filler(cursor, end);
            builder.push_current(cursor);
            builder.parse_scope(cursor, end);
        }

        true
    }
}
