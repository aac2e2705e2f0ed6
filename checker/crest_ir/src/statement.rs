//! The statement tree node.
//!
//! A [`Statement`] owns leaf tokens and child statements in two separate
//! sequences, plus one slot marker per logical position. Replaying the
//! markers over the two sequences reconstructs the exact left-to-right
//! source order — see [`Statement::items`]. Every append pushes to exactly
//! one sequence and records exactly one marker, so the interleaving is
//! total by construction.

use crate::{Token, TokenSequence};

/// Marker distinguishing what occupies a logical child position.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ItemKind {
    Token,
    Statement,
}

/// One entry of the interleaved view over a statement's leaves and children.
#[derive(Clone, Copy, Debug)]
pub enum Item<'a> {
    Token(&'a Token),
    Statement(&'a Statement),
}

/// A node of the statement tree: either a grouping of tokens and nested
/// statements, or (when it holds a single leaf) one plain token.
///
/// Created empty by its owning parse call, populated exclusively by that
/// call and its recursive descendants, and treated as immutable once the
/// call returns. Ownership is strictly tree-shaped.
#[derive(Clone, Debug, Default, Eq)]
pub struct Statement {
    tokens: TokenSequence,
    children: Vec<Statement>,
    slots: Vec<ItemKind>,
}

impl Statement {
    pub fn new() -> Self {
        Statement::default()
    }

    /// Append a leaf token at the next slot.
    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
        self.slots.push(ItemKind::Token);
    }

    /// Append an empty child statement at the next slot and return it for
    /// the caller to populate.
    pub fn add_child(&mut self) -> &mut Statement {
        let index = self.children.len();
        self.children.push(Statement::new());
        self.slots.push(ItemKind::Statement);
        &mut self.children[index]
    }

    /// The leaf tokens owned directly by this statement, in append order.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// The child statements, in append order.
    pub fn children(&self) -> &[Statement] {
        &self.children
    }

    /// The slot markers; `slots().len() == tokens().len() + children().len()`.
    pub fn slots(&self) -> &[ItemKind] {
        &self.slots
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn first_token(&self) -> Option<&Token> {
        self.tokens.first()
    }

    pub fn last_token(&self) -> Option<&Token> {
        self.tokens.last()
    }

    /// Iterate leaves and children interleaved in source order.
    pub fn items(&self) -> Items<'_> {
        debug_assert_eq!(self.slots.len(), self.tokens.len() + self.children.len());
        Items {
            statement: self,
            slot: 0,
            token: 0,
            child: 0,
        }
    }

    /// Append this subtree's tokens, in source order, to `out`.
    pub fn flatten_into(&self, out: &mut TokenSequence) {
        for item in self.items() {
            match item {
                Item::Token(token) => out.push(token.clone()),
                Item::Statement(child) => child.flatten_into(out),
            }
        }
    }

    /// The original token sequence this subtree was built from.
    pub fn flatten(&self) -> TokenSequence {
        let mut out = TokenSequence::new();
        self.flatten_into(&mut out);
        out
    }
}

// Equality is purely structural over the two owned sequences; the slot
// interleaving is deliberately not part of the contract. Downstream rules
// rely on this looser notion, so it must not be tightened.
impl PartialEq for Statement {
    fn eq(&self, other: &Self) -> bool {
        self.tokens == other.tokens && self.children == other.children
    }
}

/// Iterator returned by [`Statement::items`].
pub struct Items<'a> {
    statement: &'a Statement,
    slot: usize,
    token: usize,
    child: usize,
}

impl<'a> Iterator for Items<'a> {
    type Item = Item<'a>;

    fn next(&mut self) -> Option<Item<'a>> {
        let kind = *self.statement.slots.get(self.slot)?;
        self.slot += 1;
        match kind {
            ItemKind::Token => {
                let token = &self.statement.tokens[self.token];
                self.token += 1;
                Some(Item::Token(token))
            }
            ItemKind::Statement => {
                let child = &self.statement.children[self.child];
                self.child += 1;
                Some(Item::Statement(child))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn tok(name: &str) -> Token {
        Token::dummy(name, name)
    }

    #[test]
    fn appends_keep_slots_in_sync() {
        let mut statement = Statement::new();
        statement.push(tok("identifier"));
        statement.add_child().push(tok("leftparen"));
        statement.push(tok("semicolon"));

        assert_eq!(statement.tokens().len(), 2);
        assert_eq!(statement.children().len(), 1);
        assert_eq!(
            statement.slots(),
            &[ItemKind::Token, ItemKind::Statement, ItemKind::Token]
        );
    }

    #[test]
    fn items_replay_source_order() {
        let mut statement = Statement::new();
        statement.push(tok("a"));
        let child = statement.add_child();
        child.push(tok("b"));
        child.push(tok("c"));
        statement.push(tok("d"));

        let flat = statement.flatten();
        let names: Vec<&str> = flat.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["a", "b", "c", "d"]);
    }

    #[test]
    fn equality_ignores_slot_interleaving() {
        // Same leaf sequence, same child sequence, different relative
        // positions: still equal by contract.
        let mut left = Statement::new();
        left.push(tok("a"));
        left.add_child().push(tok("b"));

        let mut right = Statement::new();
        right.add_child().push(tok("b"));
        right.push(tok("a"));

        assert_eq!(left, right);
        assert_ne!(left.slots(), right.slots());
    }

    #[test]
    fn equality_compares_children_recursively() {
        let mut left = Statement::new();
        left.add_child().push(tok("a"));

        let mut right = Statement::new();
        right.add_child().push(tok("b"));
        assert_ne!(left, right);

        let mut more = Statement::new();
        more.add_child().push(tok("a"));
        more.add_child().push(tok("a"));
        assert_ne!(left, more);
    }
}
