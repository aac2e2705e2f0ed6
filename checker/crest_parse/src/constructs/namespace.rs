//! `namespace` blocks.

use crest_ir::{Category, Statement};

use super::significant_after;
use crate::builder::StatementBuilder;
use crate::cursor::Cursor;
use crate::registry::Construct;

pub(crate) struct NamespaceBlock;

impl Construct for NamespaceBlock {
    fn is_valid(&self, cursor: &Cursor<'_>, end: usize) -> bool {
        cursor.category() == Category::Namespace
            && matches!(
                significant_after(cursor, end),
                Some(Category::Identifier | Category::LeftBrace)
            )
    }

    fn create(&self, parent: &mut Statement, cursor: &mut Cursor<'_>, end: usize) -> bool {
        let end = end.min(cursor.len());
        let mut builder = StatementBuilder::new(parent.add_child());
        builder.push_current(cursor);

        // Optional (possibly qualified) name.
        loop {
            builder.copy_filler(cursor, end);
            if cursor.position() >= end {
                return true;
            }
            match cursor.category() {
                Category::Identifier | Category::ColonColon => {
                    builder.push_current(cursor);
                }
                _ => break,
            }
        }

        builder.parse_scope(cursor, end);
        true
    }
}
