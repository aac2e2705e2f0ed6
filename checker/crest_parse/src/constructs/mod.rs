//! Construct strategies.
//!
//! One module per construct family, each implementing [`Construct`]
//! (non-consuming `is_valid` lookahead plus consuming `create`). Every
//! strategy builds exactly one child statement under the parent it is
//! given and leaves the cursor just past what it consumed.

mod access;
mod if_else;
mod loops;
mod namespace;
mod structure;
mod switch;
mod ternary;
mod try_catch;

pub(crate) use access::AccessModifier;
pub(crate) use if_else::IfStatement;
pub(crate) use loops::{DoWhileLoop, ForLoop, WhileLoop};
pub(crate) use namespace::NamespaceBlock;
pub(crate) use structure::StructDefinition;
pub(crate) use switch::{CaseLabel, DefaultLabel, SwitchStatement};
pub(crate) use ternary::TernaryOperator;
pub(crate) use try_catch::{CatchClause, TryBlock};

use crest_ir::Category;

use crate::cursor::Cursor;

/// Category of the first significant token strictly after the current one.
fn significant_after(cursor: &Cursor<'_>, end: usize) -> Option<Category> {
    let at = cursor.next_significant(cursor.position() + 1, end)?;
    Some(cursor.category_at(at))
}

/// Category of the first significant token at or after the current one.
fn significant_here(cursor: &Cursor<'_>, end: usize) -> Option<Category> {
    let at = cursor.next_significant(cursor.position(), end)?;
    Some(cursor.category_at(at))
}
