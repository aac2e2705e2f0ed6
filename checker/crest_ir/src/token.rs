//! Token values as produced by the external lexer.

use std::fmt;

/// An ordered, finite sequence of tokens for one parse.
pub type TokenSequence = Vec<Token>;

/// A single lexeme.
///
/// `name` is the lexical name assigned by the lexer (e.g. `"leftparen"`,
/// `"identifier"`, `"pp_define"`) and is the key the parser resolves into a
/// [`Category`](crate::Category). `text`, `line` and `column` are opaque to
/// the parser and carried through the tree unchanged.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub name: String,
    pub text: String,
    pub line: u32,
    pub column: u32,
}

impl Token {
    pub fn new(
        name: impl Into<String>,
        text: impl Into<String>,
        line: u32,
        column: u32,
    ) -> Self {
        Token {
            name: name.into(),
            text: text.into(),
            line,
            column,
        }
    }

    /// Create a token with a dummy position, for tests and generated input.
    pub fn dummy(name: impl Into<String>, text: impl Into<String>) -> Self {
        Token::new(name, text, 0, 0)
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({:?}) @ {}:{}",
            self.name, self.text, self.line, self.column
        )
    }
}
