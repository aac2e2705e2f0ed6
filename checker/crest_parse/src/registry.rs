//! Construct registry.
//!
//! The registry is the dispatch point for "does this token start a known
//! construct here". It maps the fixed set of construct categories to their
//! strategies, is built once behind a `OnceLock`, and is immutable
//! thereafter.

use std::sync::OnceLock;

use crest_ir::{Category, Statement};
use rustc_hash::FxHashMap;

use crate::constructs;
use crate::cursor::Cursor;
use crate::error::BuildError;

/// A construct strategy: one recognizer per registered category.
pub trait Construct: Send + Sync {
    /// Read-only lookahead confirming that the token at the cursor truly
    /// begins this construct here. Must not advance the cursor.
    fn is_valid(&self, cursor: &Cursor<'_>, end: usize) -> bool;

    /// Consume the construct, building one child statement under `parent`.
    ///
    /// On success the cursor points just past everything consumed. On
    /// failure the tokens consumed so far remain in the tree (the walkers
    /// degrade the rest of the region to plain leaves).
    fn create(&self, parent: &mut Statement, cursor: &mut Cursor<'_>, end: usize) -> bool;
}

/// Global construct table singleton.
static REGISTRY: OnceLock<FxHashMap<Category, Box<dyn Construct>>> = OnceLock::new();

fn table() -> &'static FxHashMap<Category, Box<dyn Construct>> {
    REGISTRY.get_or_init(|| {
        let mut table: FxHashMap<Category, Box<dyn Construct>> = FxHashMap::default();

        // Control flow
        table.insert(Category::If, Box::new(constructs::IfStatement));
        table.insert(Category::For, Box::new(constructs::ForLoop));
        table.insert(Category::While, Box::new(constructs::WhileLoop));
        table.insert(Category::Do, Box::new(constructs::DoWhileLoop));
        table.insert(Category::Switch, Box::new(constructs::SwitchStatement));
        table.insert(Category::Case, Box::new(constructs::CaseLabel));
        table.insert(Category::Default, Box::new(constructs::DefaultLabel));
        table.insert(Category::Try, Box::new(constructs::TryBlock));
        table.insert(Category::Catch, Box::new(constructs::CatchClause));

        // Declarations
        table.insert(Category::Namespace, Box::new(constructs::NamespaceBlock));
        table.insert(Category::Struct, Box::new(constructs::StructDefinition));

        // The three access specifiers share one strategy.
        table.insert(Category::Public, Box::new(constructs::AccessModifier));
        table.insert(Category::Protected, Box::new(constructs::AccessModifier));
        table.insert(Category::Private, Box::new(constructs::AccessModifier));

        // The paired question-mark/colon categories share the ternary
        // strategy.
        table.insert(Category::Question, Box::new(constructs::TernaryOperator));
        table.insert(Category::Colon, Box::new(constructs::TernaryOperator));

        table
    })
}

/// Look up the strategy for a category, if one is registered.
pub fn lookup(category: Category) -> Option<&'static dyn Construct> {
    table().get(&category).map(|strategy| strategy.as_ref())
}

/// Whether the registry covers a category.
pub fn is_handled(category: Category) -> bool {
    table().contains_key(&category)
}

/// Resolve the strategy for a category the caller already validated as
/// handled. Dispatching on an unhandled category is a caller error.
pub fn strategy(category: Category) -> Result<&'static dyn Construct, BuildError> {
    lookup(category).ok_or(BuildError::Unhandled(category))
}
