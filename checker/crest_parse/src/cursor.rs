//! Token cursor for navigating the token stream.
//!
//! Provides bounds-checked token access, significant-token lookahead, and
//! monotone consumption. The cursor carries a dense category array parallel
//! to the token slice, computed once at construction, so a token's category
//! is never re-derived at individual test sites.

use crest_ir::{classify, Category, Token};
use tracing::trace;

/// Cursor over a token range.
///
/// One cursor is shared mutably by all cooperating parse procedures over a
/// range; the position only ever moves forward. Range narrowing is done by
/// the callers' explicit `end` bounds, never by the cursor itself.
pub struct Cursor<'a> {
    tokens: &'a [Token],
    /// Dense array of categories, parallel to `tokens`.
    categories: Vec<Category>,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at the start of the token range, classifying
    /// every token exactly once.
    pub fn new(tokens: &'a [Token]) -> Self {
        let categories = tokens.iter().map(|token| classify(&token.name)).collect();
        Cursor {
            tokens,
            categories,
            pos: 0,
        }
    }

    /// Total number of tokens in the range.
    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Current position in the token range.
    ///
    /// Compare positions before and after a parse call to determine
    /// whether tokens were consumed.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Move the cursor forward to `pos`.
    ///
    /// Used to anchor a parse at a found token. The position is clamped to
    /// the range length and must not move the cursor backward.
    pub fn set_position(&mut self, pos: usize) {
        debug_assert!(pos >= self.pos, "cursor must not move backward");
        self.pos = pos.min(self.tokens.len());
    }

    /// The current token, or `None` once the range is exhausted.
    #[inline]
    pub fn current(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    /// The current token's category; [`Category::Eof`] once exhausted.
    #[inline]
    pub fn category(&self) -> Category {
        self.category_at(self.pos)
    }

    /// The token at an absolute position, if in range.
    #[inline]
    pub fn token_at(&self, pos: usize) -> Option<&'a Token> {
        self.tokens.get(pos)
    }

    /// The category at an absolute position; [`Category::Eof`] past the end.
    #[inline]
    pub fn category_at(&self, pos: usize) -> Category {
        self.categories.get(pos).copied().unwrap_or(Category::Eof)
    }

    /// First position in `from..end` holding a non-filler token.
    pub fn next_significant(&self, from: usize, end: usize) -> Option<usize> {
        let end = end.min(self.tokens.len());
        (from..end).find(|&pos| !self.category_at(pos).is_filler())
    }

    /// Consume the current token and return it.
    #[inline]
    pub fn advance(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.pos)?;
        trace!(pos = self.pos, name = %token.name, "advance");
        self.pos += 1;
        Some(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stream() -> Vec<Token> {
        vec![
            Token::dummy("identifier", "x"),
            Token::dummy("space", " "),
            Token::dummy("leftparen", "("),
            Token::dummy("rightparen", ")"),
        ]
    }

    #[test]
    fn categories_computed_once_per_token() {
        let tokens = stream();
        let cursor = Cursor::new(&tokens);
        assert_eq!(cursor.category_at(0), Category::Identifier);
        assert_eq!(cursor.category_at(1), Category::Space);
        assert_eq!(cursor.category_at(2), Category::LeftParen);
        assert_eq!(cursor.category_at(4), Category::Eof);
    }

    #[test]
    fn advance_is_monotone_and_bounded() {
        let tokens = stream();
        let mut cursor = Cursor::new(&tokens);
        assert_eq!(cursor.advance().map(|t| t.text.as_str()), Some("x"));
        assert_eq!(cursor.position(), 1);
        cursor.advance();
        cursor.advance();
        cursor.advance();
        assert_eq!(cursor.position(), 4);
        assert!(cursor.advance().is_none());
        assert_eq!(cursor.position(), 4);
        assert!(cursor.current().is_none());
        assert_eq!(cursor.category(), Category::Eof);
    }

    #[test]
    fn next_significant_skips_filler() {
        let tokens = stream();
        let cursor = Cursor::new(&tokens);
        assert_eq!(cursor.next_significant(1, tokens.len()), Some(2));
        assert_eq!(cursor.next_significant(4, tokens.len()), None);
        // Bound is clamped, never overrun.
        assert_eq!(cursor.next_significant(0, 100), Some(0));
    }
}
