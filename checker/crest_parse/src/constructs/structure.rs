//! `struct` definitions: name, heritage list, body, trailing declarators.
//!
//! This is the construct that exercises the full declaration-builder
//! surface: base-class lists go through `parse_heritage`, the body through
//! `parse_scope`, and the declarators between the closing brace and the
//! semicolon through `parse_declarator_list`.

use crest_ir::{Category, Statement};
use smallvec::smallvec;

use super::significant_after;
use crate::builder::{FinishStack, StatementBuilder};
use crate::cursor::Cursor;
use crate::registry::Construct;

pub(crate) struct StructDefinition;

impl Construct for StructDefinition {
    fn is_valid(&self, cursor: &Cursor<'_>, end: usize) -> bool {
        cursor.category() == Category::Struct
            && matches!(
                significant_after(cursor, end),
                Some(Category::Identifier | Category::LeftBrace)
            )
    }

    fn create(&self, parent: &mut Statement, cursor: &mut Cursor<'_>, end: usize) -> bool {
        let end = end.min(cursor.len());
        let mut builder = StatementBuilder::new(parent.add_child());
        builder.push_current(cursor);

        // Name tokens up to the heritage colon, the body, or the end of a
        // plain declaration.
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

        if cursor.category() == Category::Colon && !builder.parse_heritage(cursor, end) {
            return false;
        }

        if cursor.position() < end && cursor.category() == Category::LeftBrace {
            builder.parse_scope(cursor, end);
        }
        if cursor.position() >= end {
            return true;
        }

        // Declarators between the body and the terminating semicolon.
        let mut finish: FinishStack = smallvec![Category::Semicolon];
        if !builder.parse_declarator_list(cursor, end, &mut finish) {
            return true;
        }
        if cursor.position() < end && cursor.category() == Category::Semicolon {
            builder.push_current(cursor);
        }

        true
    }
}
