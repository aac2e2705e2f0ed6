//! Access specifier labels (`public:`, `protected:`, `private:`).

use crest_ir::{Category, Statement};

use super::significant_after;
use crate::builder::StatementBuilder;
use crate::cursor::Cursor;
use crate::registry::Construct;

/// One shared strategy for the three access specifiers.
///
/// The colon lookahead is the disambiguation: `public Base` in a heritage
/// list is not a label and stays a plain token.
pub(crate) struct AccessModifier;

impl Construct for AccessModifier {
    fn is_valid(&self, cursor: &Cursor<'_>, end: usize) -> bool {
        matches!(
            cursor.category(),
            Category::Public | Category::Protected | Category::Private
        ) && significant_after(cursor, end) == Some(Category::Colon)
    }

    fn create(&self, parent: &mut Statement, cursor: &mut Cursor<'_>, end: usize) -> bool {
        let end = end.min(cursor.len());
        let mut builder = StatementBuilder::new(parent.add_child());
        builder.push_current(cursor);
        builder.copy_filler(cursor, end);
        if cursor.position() >= end || cursor.category() != Category::Colon {
            return false;
        }
        builder.push_current(cursor);
        true
    }
}
