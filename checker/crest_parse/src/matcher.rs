//! Bracket matching.

use crate::cursor::Cursor;

/// Find the position of the closer matching the opening bracket at
/// `open_at`, counting nested same-kind pairs.
///
/// Returns `end` when no match exists before the bound (truncated or
/// malformed input); the caller's interior parse then simply runs out of
/// tokens and returns what it built. Positions at or past `end`, or not
/// holding an opening bracket, also yield `end`.
pub fn matching_close(cursor: &Cursor<'_>, open_at: usize, end: usize) -> usize {
    let end = end.min(cursor.len());
    let open = cursor.category_at(open_at);
    let Some(close) = open.matching_closer() else {
        return end;
    };

    let mut depth = 0usize;
    let mut pos = open_at + 1;
    while pos < end {
        let category = cursor.category_at(pos);
        if category == open {
            depth += 1;
        } else if category == close {
            if depth == 0 {
                return pos;
            }
            depth -= 1;
        }
        pos += 1;
    }
    end
}

#[cfg(test)]
mod tests {
    use crest_ir::Token;

    use super::*;

    fn cursor_for(names: &[&str]) -> (Vec<Token>, usize) {
        let tokens: Vec<Token> = names.iter().map(|n| Token::dummy(*n, *n)).collect();
        let len = tokens.len();
        (tokens, len)
    }

    #[test]
    fn matches_flat_pair() {
        let (tokens, len) = cursor_for(&["leftparen", "identifier", "rightparen"]);
        let cursor = Cursor::new(&tokens);
        assert_eq!(matching_close(&cursor, 0, len), 2);
    }

    #[test]
    fn skips_nested_same_kind_pairs() {
        let (tokens, len) = cursor_for(&[
            "leftparen",
            "leftparen",
            "rightparen",
            "rightparen",
            "rightparen",
        ]);
        let cursor = Cursor::new(&tokens);
        assert_eq!(matching_close(&cursor, 0, len), 3);
    }

    #[test]
    fn other_bracket_kinds_do_not_interfere() {
        let (tokens, len) = cursor_for(&[
            "leftbrace",
            "leftparen",
            "rightparen",
            "rightbrace",
        ]);
        let cursor = Cursor::new(&tokens);
        assert_eq!(matching_close(&cursor, 0, len), 3);
        assert_eq!(matching_close(&cursor, 1, len), 2);
    }

    #[test]
    fn unmatched_returns_end() {
        let (tokens, len) = cursor_for(&["leftbracket", "identifier"]);
        let cursor = Cursor::new(&tokens);
        assert_eq!(matching_close(&cursor, 0, len), len);
    }

    #[test]
    fn non_bracket_position_returns_end() {
        let (tokens, len) = cursor_for(&["identifier", "rightparen"]);
        let cursor = Cursor::new(&tokens);
        assert_eq!(matching_close(&cursor, 0, len), len);
        assert_eq!(matching_close(&cursor, 10, len), len);
    }
}
