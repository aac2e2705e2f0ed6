//! Declaration-builder tests: scopes, heritage, arguments, declarators,
//! and the angle-bracket heuristic.

use crest_ir::{Category, Statement};
use pretty_assertions::assert_eq;
use smallvec::smallvec;

use super::support::{flat_texts, texts, tokens};
use crate::{Cursor, FinishStack, StatementBuilder};

#[test]
fn parse_arguments_requires_a_paren() {
    let toks = tokens("x y");
    let mut cursor = Cursor::new(&toks);
    let end = cursor.len();
    let mut statement = Statement::new();
    assert!(!StatementBuilder::new(&mut statement).parse_arguments(&mut cursor, end));
    assert_eq!(cursor.position(), 0);
}

#[test]
fn parse_arguments_copies_leading_filler() {
    let toks = tokens("SP ( a ) rest");
    let mut cursor = Cursor::new(&toks);
    let end = cursor.len();
    let mut statement = Statement::new();

    assert!(StatementBuilder::new(&mut statement).parse_arguments(&mut cursor, end));
    assert_eq!(texts(statement.tokens()), [" "]);
    assert_eq!(statement.children().len(), 1);
    assert_eq!(flat_texts(&statement.children()[0]), ["(", "a", ")"]);
    assert_eq!(cursor.position(), 4);
}

#[test]
fn parse_arguments_fails_when_unclosed() {
    let toks = tokens("( a");
    let mut cursor = Cursor::new(&toks);
    let end = cursor.len();
    let mut statement = Statement::new();

    assert!(!StatementBuilder::new(&mut statement).parse_arguments(&mut cursor, end));
    // Degraded, not lost: the open group kept what it saw.
    assert_eq!(flat_texts(&statement), ["(", "a"]);
}

#[test]
fn parse_scope_handles_nested_braces() {
    let toks = tokens("{ a ; { b ; } }");
    let mut cursor = Cursor::new(&toks);
    let end = cursor.len();
    let mut statement = Statement::new();

    StatementBuilder::new(&mut statement).parse_scope(&mut cursor, end);
    assert_eq!(cursor.position(), end);
    assert_eq!(statement.children().len(), 1);

    let scope = &statement.children()[0];
    assert_eq!(scope.first_token().map(|t| t.text.as_str()), Some("{"));
    assert_eq!(scope.last_token().map(|t| t.text.as_str()), Some("}"));
    assert_eq!(flat_texts(scope), ["{", "a", ";", "{", "b", ";", "}", "}"]);

    // The nested braces went through a fresh builder into their own child.
    assert!(scope
        .children()
        .iter()
        .any(|c| c.first_token().map(|t| t.text.as_str()) == Some("{")));
}

#[test]
fn parse_scope_without_brace_falls_back_to_one_statement() {
    let toks = tokens("x ; y");
    let mut cursor = Cursor::new(&toks);
    let end = cursor.len();
    let mut statement = Statement::new();

    StatementBuilder::new(&mut statement).parse_scope(&mut cursor, end);
    assert_eq!(statement.children().len(), 1);
    assert_eq!(flat_texts(&statement.children()[0]), ["x", ";"]);
    assert_eq!(cursor.position(), 2);
}

#[test]
fn parse_heritage_list() {
    let toks = tokens(": public a , b { x }");
    let mut cursor = Cursor::new(&toks);
    let end = cursor.len();
    let mut statement = Statement::new();

    assert!(StatementBuilder::new(&mut statement).parse_heritage(&mut cursor, end));
    assert_eq!(texts(statement.tokens()), [":", ","]);
    assert_eq!(statement.children().len(), 2);
    assert_eq!(flat_texts(&statement.children()[0]), ["public", "a"]);
    assert_eq!(flat_texts(&statement.children()[1]), ["b"]);
    assert_eq!(cursor.category(), Category::LeftBrace);
}

#[test]
fn parse_heritage_rejects_other_tokens() {
    let toks = tokens("base");
    let mut cursor = Cursor::new(&toks);
    let end = cursor.len();
    let mut statement = Statement::new();
    assert!(!StatementBuilder::new(&mut statement).parse_heritage(&mut cursor, end));
}

#[test]
fn parse_list_until_handles_an_empty_list() {
    let toks = tokens("( )");
    let mut cursor = Cursor::new(&toks);
    let end = cursor.len();
    let mut statement = Statement::new();

    assert!(StatementBuilder::new(&mut statement).parse_list_until(
        &mut cursor,
        end,
        Category::RightParen
    ));
    assert_eq!(texts(statement.tokens()), ["(", ")"]);
    assert!(statement.children().is_empty());
    assert_eq!(cursor.position(), end);
}

#[test]
fn template_arguments_form_a_nested_region() {
    let toks = tokens("vector < int > v ;");
    let mut cursor = Cursor::new(&toks);
    let end = cursor.len();
    let mut statement = Statement::new();
    let mut finish: FinishStack = smallvec![Category::Semicolon];

    assert!(StatementBuilder::new(&mut statement).parse_variable_declaration(
        &mut cursor,
        end,
        &mut finish
    ));
    assert_eq!(texts(statement.tokens()), ["vector", "v"]);
    assert_eq!(statement.children().len(), 1);
    assert_eq!(flat_texts(&statement.children()[0]), ["<", "int", ">"]);
    assert_eq!(cursor.category(), Category::Semicolon);
    assert_eq!(finish.as_slice(), [Category::Semicolon]);
}

#[test]
fn relational_operators_degrade_without_crashing() {
    // Lacking the disambiguating context, `<`/`>` parse as an argument
    // region: documented ambiguity, not a guaranteed correct parse.
    let toks = tokens("a < b ; c > d ;");
    let mut cursor = Cursor::new(&toks);
    let end = cursor.len();
    let mut statement = Statement::new();

    assert!(StatementBuilder::new(&mut statement).parse_argument(&mut cursor, end));
    assert_eq!(
        flat_texts(&statement),
        ["a", "<", "b", ";", "c", ">", "d"]
    );
    // Every token is either in the tree or still ahead of the cursor.
    assert_eq!(cursor.position(), end - 1);
    assert_eq!(cursor.category(), Category::Semicolon);
}

#[test]
fn declarator_list_with_initializers_and_regions() {
    let toks = tokens("a = 1 , b [ 2 ] , c ;");
    let mut cursor = Cursor::new(&toks);
    let end = cursor.len();
    let mut statement = Statement::new();
    let mut finish: FinishStack = smallvec![Category::Semicolon];

    assert!(StatementBuilder::new(&mut statement).parse_declarator_list(
        &mut cursor,
        end,
        &mut finish
    ));
    assert_eq!(texts(statement.tokens()), [",", ","]);
    assert_eq!(statement.children().len(), 3);
    assert_eq!(flat_texts(&statement.children()[0]), ["a", "=", "1"]);
    assert_eq!(flat_texts(&statement.children()[1]), ["b", "[", "2", "]"]);
    assert_eq!(flat_texts(&statement.children()[2]), ["c"]);
    assert_eq!(cursor.category(), Category::Semicolon);
}

#[test]
fn brace_initializer_grows_the_finish_stack_for_its_region() {
    let toks = tokens("x = { 1 , 2 } ;");
    let mut cursor = Cursor::new(&toks);
    let end = cursor.len();
    let mut statement = Statement::new();
    let mut finish: FinishStack = smallvec![Category::Semicolon];

    assert!(StatementBuilder::new(&mut statement).parse_variable_declaration(
        &mut cursor,
        end,
        &mut finish
    ));
    assert_eq!(flat_texts(&statement), ["x", "=", "{", "1", ",", "2", "}"]);
    assert_eq!(cursor.category(), Category::Semicolon);
    // The region's closer came back off the stack.
    assert_eq!(finish.as_slice(), [Category::Semicolon]);
}

#[test]
fn declarator_parsers_fail_only_on_an_exhausted_range() {
    let toks = tokens("");
    let mut cursor = Cursor::new(&toks);
    let mut statement = Statement::new();
    let mut finish: FinishStack = smallvec![Category::Semicolon];

    assert!(!StatementBuilder::new(&mut statement).parse_variable_declaration(
        &mut cursor,
        0,
        &mut finish
    ));
    assert!(!StatementBuilder::new(&mut statement).parse_declarator_list(
        &mut cursor,
        0,
        &mut finish
    ));
    assert!(!StatementBuilder::new(&mut statement).parse_argument(&mut cursor, 0));
}
