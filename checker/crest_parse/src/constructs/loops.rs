//! `for`, `while` and `do`/`while` loops.

use crest_ir::{Category, Statement};

use super::{significant_after, significant_here};
use crate::builder::StatementBuilder;
use crate::cursor::Cursor;
use crate::registry::Construct;

pub(crate) struct ForLoop;

impl Construct for ForLoop {
    fn is_valid(&self, cursor: &Cursor<'_>, end: usize) -> bool {
        cursor.category() == Category::For
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

pub(crate) struct WhileLoop;

impl Construct for WhileLoop {
    fn is_valid(&self, cursor: &Cursor<'_>, end: usize) -> bool {
        cursor.category() == Category::While
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

pub(crate) struct DoWhileLoop;

impl Construct for DoWhileLoop {
    fn is_valid(&self, cursor: &Cursor<'_>, _end: usize) -> bool {
        cursor.category() == Category::Do
    }

    fn create(&self, parent: &mut Statement, cursor: &mut Cursor<'_>, end: usize) -> bool {
        let end = end.min(cursor.len());
        let mut builder = StatementBuilder::new(parent.add_child());
        builder.push_current(cursor);
        builder.parse_scope(cursor, end);

        // Trailing `while (...)`, then the optional terminating semicolon.
        if significant_here(cursor, end) == Some(Category::While) {
            builder.copy_filler(cursor, end);
            builder.push_current(cursor);
            if !builder.parse_arguments(cursor, end) {
                return false;
            }
        }
        if significant_here(cursor, end) == Some(Category::Semicolon) {
            builder.copy_filler(cursor, end);
            builder.push_current(cursor);
        }

        true
    }
}
