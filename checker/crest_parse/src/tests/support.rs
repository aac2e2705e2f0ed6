//! Test-only token stream construction.

use crest_ir::{classify, Category, Statement, Token, TokenSequence};

/// Build one token from a source word.
///
/// Punctuation maps to its lexical name, digit runs to `intlit`, known
/// keyword/category names to themselves, and everything else to
/// `identifier`. `NL`, `SP` and `EOF` are markers for tokens without
/// printable text.
pub(crate) fn tok(word: &str) -> Token {
    let name = match word {
        "(" => "leftparen",
        ")" => "rightparen",
        "{" => "leftbrace",
        "}" => "rightbrace",
        "[" => "leftbracket",
        "]" => "rightbracket",
        ";" => "semicolon",
        ":" => "colon",
        "::" => "colon_colon",
        "," => "comma",
        "?" => "question_mark",
        "=" => "assign",
        "==" => "equal",
        "<" => "less",
        ">" => "greater",
        "+" => "plus",
        "-" => "minus",
        "*" => "star",
        "." => "dot",
        "->" => "arrow",
        "#define" => "pp_define",
        "#include" => "pp_include",
        "NL" => "newline",
        "SP" => "space",
        "EOF" => "eof",
        w if w.chars().all(|c| c.is_ascii_digit()) => "intlit",
        w if classify(w) != Category::Unknown => w,
        _ => "identifier",
    };
    let text = match word {
        "NL" => "\n",
        "SP" => " ",
        "EOF" => "",
        other => other,
    };
    Token::dummy(name, text)
}

/// Tokenize a whitespace-separated source string.
pub(crate) fn tokens(source: &str) -> TokenSequence {
    source.split_whitespace().map(tok).collect()
}

/// Source texts of a token slice.
pub(crate) fn texts(tokens: &[Token]) -> Vec<&str> {
    tokens.iter().map(|t| t.text.as_str()).collect()
}

/// Source texts of a statement's flattened subtree.
pub(crate) fn flat_texts(statement: &Statement) -> Vec<String> {
    statement
        .flatten()
        .into_iter()
        .map(|t| t.text)
        .collect()
}

/// Depth-first search for a descendant statement whose first leaf has the
/// given text.
pub(crate) fn find_descendant<'a>(
    statement: &'a Statement,
    first_text: &str,
) -> Option<&'a Statement> {
    for child in statement.children() {
        if child.first_token().map(|t| t.text.as_str()) == Some(first_text) {
            return Some(child);
        }
        if let Some(found) = find_descendant(child, first_text) {
            return Some(found);
        }
    }
    None
}
