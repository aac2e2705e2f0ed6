//! Structured declaration builder.
//!
//! A composable builder bound to one [`Statement`], offering the
//! scope-, heritage-, argument- and variable-declaration-parsing
//! primitives used by constructs that need declaration-list semantics
//! (class bodies, base-class lists, declarator lists). The primitives
//! share the walkers' cursor conventions: on return the cursor sits just
//! past everything consumed, and a stop-set token is left for the caller.

use crest_ir::{Category, Statement, Token};
use smallvec::SmallVec;

use crate::cursor::Cursor;
use crate::stack::ensure_sufficient_stack;
use crate::walk;

/// Caller-maintained stack of the categories that end the current
/// declarator list. Grows by one entry for the duration of each nested
/// scope/array/template/paren region.
pub type FinishStack = SmallVec<[Category; 8]>;

/// Whether a token can start a sub-statement.
///
/// The default predicate consumed by [`copy_filler`]: everything but
/// trivia is a potential statement start.
pub fn starts_statement(category: Category) -> bool {
    !category.is_filler()
}

/// Fast-forward, copying tokens verbatim as leaves of `target`, until a
/// token recognized as structurally significant is reached.
///
/// Used as a filler step between structural operations so that stray
/// tokens are preserved without being misinterpreted as structure.
pub fn copy_filler(target: &mut Statement, cursor: &mut Cursor<'_>, end: usize) {
    let end = end.min(cursor.len());
    while cursor.position() < end {
        if starts_statement(cursor.category()) {
            break;
        }
        if let Some(token) = cursor.current() {
            target.push(token.clone());
        }
        cursor.advance();
    }
}

/// Builder over one statement.
pub struct StatementBuilder<'s> {
    statement: &'s mut Statement,
}

impl<'s> StatementBuilder<'s> {
    pub fn new(statement: &'s mut Statement) -> Self {
        StatementBuilder { statement }
    }

    /// The statement this builder populates.
    pub fn statement(&mut self) -> &mut Statement {
        self.statement
    }

    /// Append a leaf token.
    pub fn push(&mut self, token: Token) {
        self.statement.push(token);
    }

    /// Append an empty child statement and return it.
    pub fn add(&mut self) -> &mut Statement {
        self.statement.add_child()
    }

    /// Append the current token as a leaf and consume it.
    pub(crate) fn push_current(&mut self, cursor: &mut Cursor<'_>) -> bool {
        match cursor.current() {
            Some(token) => {
                self.statement.push(token.clone());
                cursor.advance();
                true
            }
            None => false,
        }
    }

    /// Copy filler tokens into this builder's statement.
    pub fn copy_filler(&mut self, cursor: &mut Cursor<'_>, end: usize) {
        copy_filler(self.statement, cursor, end);
    }

    /// Parse a parenthesized argument region.
    ///
    /// Validates that, after skipping insignificant tokens, the next
    /// significant token is an opening paren; if so, opens a child
    /// statement starting with that paren and delegates the interior to
    /// the whole-subtree walk. Fails when the structural expectation is
    /// not met or the interior does not close on a right paren.
    pub fn parse_arguments(&mut self, cursor: &mut Cursor<'_>, end: usize) -> bool {
        let end = end.min(cursor.len());
        let Some(at) = cursor.next_significant(cursor.position(), end) else {
            return false;
        };
        if cursor.category_at(at) != Category::LeftParen {
            return false;
        }
        copy_filler(self.statement, cursor, end);
        walk::parse_bracket_group(self.statement, cursor, end)
    }

    /// Parse a brace-delimited body into a new child statement.
    ///
    /// Each statement inside the braces goes through the standard
    /// single-unit dispatch; nested `{ }` recurse through a fresh builder.
    /// Without an opening brace the body degrades to one single-subtree
    /// parse of whatever follows.
    pub fn parse_scope(&mut self, cursor: &mut Cursor<'_>, end: usize) {
        ensure_sufficient_stack(|| {
            let end = end.min(cursor.len());
            if cursor.position() >= end {
                return;
            }

            let scope = self.statement.add_child();
            copy_filler(scope, cursor, end);
            if cursor.position() >= end {
                return;
            }

            if cursor.category() != Category::LeftBrace {
                walk::parse_one(scope, cursor, end);
                return;
            }

            if let Some(brace) = cursor.current() {
                scope.push(brace.clone());
            }
            cursor.advance();

            while cursor.position() < end {
                copy_filler(scope, cursor, end);
                if cursor.position() >= end {
                    break;
                }
                match cursor.category() {
                    Category::RightBrace => {
                        if let Some(brace) = cursor.current() {
                            scope.push(brace.clone());
                        }
                        cursor.advance();
                        break;
                    }
                    Category::LeftBrace => {
                        StatementBuilder::new(scope).parse_scope(cursor, end);
                    }
                    _ => {
                        let before = cursor.position();
                        if walk::dispatch(scope, cursor, end).is_err() {
                            break;
                        }
                        if cursor.position() == before {
                            // Refuse to stall on a token the dispatcher
                            // left alone.
                            if let Some(token) = cursor.current() {
                                scope.push(token.clone());
                            }
                            cursor.advance();
                        }
                    }
                }
            }
        });
    }

    /// Parse a base-class list introduced by `:`.
    ///
    /// Repeatedly: push the separator, skip filler, and parse one base
    /// specifier into a new child when the next significant token can
    /// start one; continues while subsequent tokens are commas. Fails when
    /// a base specifier fails to parse.
    pub fn parse_heritage(&mut self, cursor: &mut Cursor<'_>, end: usize) -> bool {
        let end = end.min(cursor.len());
        if cursor.position() >= end || cursor.category() != Category::Colon {
            return false;
        }

        loop {
            // The introducing colon, or the list comma.
            self.push_current(cursor);
            if cursor.position() >= end {
                break;
            }
            copy_filler(self.statement, cursor, end);
            if cursor.position() >= end {
                break;
            }

            if matches!(
                cursor.category(),
                Category::Identifier
                    | Category::Virtual
                    | Category::Public
                    | Category::Protected
                    | Category::Private
            ) {
                let mut base = StatementBuilder::new(self.statement.add_child());
                if !base.parse_argument(cursor, end) {
                    return false;
                }
                if cursor.position() >= end {
                    break;
                }
            }

            if cursor.category() != Category::Comma {
                break;
            }
        }

        true
    }

    /// Parse one type/expression token run.
    ///
    /// Pushes the first token, opens a nested terminator-delimited list on
    /// `(`, `[` or `<` (the `<`/`>` case is a best-effort heuristic, those
    /// tokens being lexically ambiguous with relational operators), and
    /// stops — without consuming — on `)`, `]`, an unmatched `>`, `{`,
    /// `;` or `,`. Absence of content is the only failure.
    pub fn parse_argument(&mut self, cursor: &mut Cursor<'_>, end: usize) -> bool {
        let end = end.min(cursor.len());
        if cursor.position() >= end {
            return false;
        }
        self.push_current(cursor);

        while cursor.position() < end {
            match cursor.category() {
                Category::LeftParen => {
                    let mut list = StatementBuilder::new(self.statement.add_child());
                    list.parse_list_until(cursor, end, Category::RightParen);
                }
                Category::LeftBracket => {
                    let mut list = StatementBuilder::new(self.statement.add_child());
                    list.parse_list_until(cursor, end, Category::RightBracket);
                }
                Category::Less => {
                    let mut list = StatementBuilder::new(self.statement.add_child());
                    list.parse_list_until(cursor, end, Category::Greater);
                }
                Category::RightParen
                | Category::RightBracket
                | Category::Greater
                | Category::LeftBrace
                | Category::Semicolon
                | Category::Comma => break,
                _ => {
                    self.push_current(cursor);
                }
            }
        }

        true
    }

    /// Parse a terminator-delimited list: the opener, then one argument
    /// per new child, until the caller-specified terminator category is
    /// pushed and consumed.
    ///
    /// Used uniformly for parenthesized argument lists, bracketed index
    /// lists and angle-bracketed lists.
    pub fn parse_list_until(
        &mut self,
        cursor: &mut Cursor<'_>,
        end: usize,
        terminator: Category,
    ) -> bool {
        let end = end.min(cursor.len());
        if cursor.position() >= end {
            return false;
        }
        self.push_current(cursor);
        if cursor.position() >= end {
            return false;
        }

        while cursor.position() < end {
            if cursor.category() == terminator {
                self.push_current(cursor);
                break;
            }

            let mut entry = StatementBuilder::new(self.statement.add_child());
            entry.parse_argument(cursor, end);
            if cursor.position() >= end {
                break;
            }

            // The separator, or the terminator itself.
            if cursor.category() == terminator {
                self.push_current(cursor);
                break;
            }
            self.push_current(cursor);
        }

        true
    }

    /// Parse a comma-separated declarator list, stopping when the current
    /// token's category is in the finish set.
    pub fn parse_declarator_list(
        &mut self,
        cursor: &mut Cursor<'_>,
        end: usize,
        finish: &mut FinishStack,
    ) -> bool {
        let end = end.min(cursor.len());
        if cursor.position() >= end {
            return false;
        }

        loop {
            copy_filler(self.statement, cursor, end);
            if cursor.position() >= end {
                break;
            }

            let mut category = cursor.category();
            if category == Category::Comma {
                self.push_current(cursor);
                copy_filler(self.statement, cursor, end);
                if cursor.position() >= end {
                    break;
                }
                category = cursor.category();
            } else if finish.contains(&category) {
                break;
            }

            if category != Category::Comma {
                let mut declarator = StatementBuilder::new(self.statement.add_child());
                if !declarator.parse_variable_declaration(cursor, end, finish) {
                    return false;
                }
                if cursor.position() >= end {
                    break;
                }
            }

            if cursor.category() != Category::Comma {
                break;
            }
        }

        true
    }

    /// Parse one declarator.
    ///
    /// Recurses into a nested declarator-list parse on `=` (initializer)
    /// and on an opening `{`/`(`/`<`/`[` (nested specifier, with the
    /// matching closer pushed onto the finish stack for the duration);
    /// otherwise pushes plain tokens. The declarator ends at a comma or at
    /// any category in the finish set.
    pub fn parse_variable_declaration(
        &mut self,
        cursor: &mut Cursor<'_>,
        end: usize,
        finish: &mut FinishStack,
    ) -> bool {
        ensure_sufficient_stack(|| {
            let end = end.min(cursor.len());
            if cursor.position() >= end {
                return false;
            }

            while cursor.position() < end {
                let category = cursor.category();
                if category == Category::Comma || finish.contains(&category) {
                    break;
                }

                if category == Category::Assign {
                    let mut initializer = StatementBuilder::new(self.statement.add_child());
                    initializer.push_current(cursor);
                    if cursor.position() >= end {
                        break;
                    }
                    if !initializer.parse_variable_declaration(cursor, end, finish) {
                        return false;
                    }
                    continue;
                }

                if let Some(closer) = category.matching_closer() {
                    finish.push(closer);
                    let mut region = StatementBuilder::new(self.statement.add_child());
                    region.push_current(cursor);
                    if cursor.position() >= end {
                        finish.pop();
                        break;
                    }
                    if !region.parse_declarator_list(cursor, end, finish) {
                        finish.pop();
                        return false;
                    }
                    // Keep our closer inside the region; an outer finish
                    // category stays for the outer list.
                    if cursor.position() < end && cursor.category() == closer {
                        region.push_current(cursor);
                    }
                    finish.pop();
                    continue;
                }

                self.push_current(cursor);
            }

            true
        })
    }
}
