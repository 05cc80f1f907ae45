//! The matcher protocol and the root (value-dispatch) matcher.
//!
//! A matcher is a small state machine owning one grammar production. The
//! driver keeps them on a stack and hands each code point to the topmost one.
//! `consume` answers with an optional child matcher to push and a `consumed`
//! flag; `false` asks the driver to re-deliver the same code point to the new
//! top of the stack. That hand-back is what lets a whitespace matcher stop on
//! the first non-space character and leave it for the value matcher beneath,
//! and what lets a number matcher terminate on the `,` or `]` that its parent
//! then acts on.

use crate::backend::Backend;
use crate::error::SyntaxError;
use crate::extensions::Extensions;
use crate::parser::composite::{ArrayMatcher, ObjectMatcher};
use crate::parser::number::NumberMatcher;
use crate::parser::string::StringMatcher;
use crate::parser::token::{EofMatcher, TokenKind, TokenMatcher};
use crate::parser::whitespace::WhitespaceMatcher;
use crate::parser::Parser;

/// What a matcher tells the driver after seeing one code point: an optional
/// child to push, and whether the code point was consumed.
pub(crate) type Step = (Option<Matcher>, bool);

/// One sub-state-machine per grammar production, dispatched as a tagged
/// union. Matchers are owned by value in the stack slots that pushed them.
#[derive(Debug)]
pub(crate) enum Matcher {
    Root(RootMatcher),
    Whitespace(WhitespaceMatcher),
    Number(NumberMatcher),
    String(StringMatcher),
    Array(ArrayMatcher),
    Object(ObjectMatcher),
    Token(TokenMatcher),
    Eof(EofMatcher),
}

impl Matcher {
    pub(crate) fn root(object_key: bool) -> Self {
        Matcher::Root(RootMatcher::new(object_key))
    }

    pub(crate) fn whitespace() -> Self {
        Matcher::Whitespace(WhitespaceMatcher::new())
    }

    pub(crate) fn number() -> Self {
        Matcher::Number(NumberMatcher::new())
    }

    pub(crate) fn string(object_key: bool, quote: char) -> Self {
        Matcher::String(StringMatcher::new(object_key, quote))
    }

    pub(crate) fn array() -> Self {
        Matcher::Array(ArrayMatcher::new())
    }

    pub(crate) fn object() -> Self {
        Matcher::Object(ObjectMatcher::new())
    }

    pub(crate) fn token(kind: TokenKind) -> Self {
        Matcher::Token(TokenMatcher::new(kind))
    }

    pub(crate) fn eof() -> Self {
        Matcher::Eof(EofMatcher::new())
    }

    /// Hands one code point (or the end-of-input sentinel, `None`) to this
    /// matcher.
    pub(crate) fn consume<B: Backend>(&mut self, p: &mut Parser<B>, ch: Option<char>) -> Step {
        match self {
            Matcher::Root(m) => m.consume(p, ch),
            Matcher::Whitespace(m) => m.consume(p, ch),
            Matcher::Number(m) => m.consume(p, ch),
            Matcher::String(m) => m.consume(p, ch),
            Matcher::Array(m) => m.consume(p, ch),
            Matcher::Object(m) => m.consume(p, ch),
            Matcher::Token(m) => m.consume(p, ch),
            Matcher::Eof(m) => m.consume(p, ch),
        }
    }

    /// True once the matcher has reached its terminal state; the driver pops
    /// it before continuing.
    pub(crate) fn is_done(&self) -> bool {
        match self {
            Matcher::Root(m) => m.is_done(),
            Matcher::Whitespace(m) => m.is_done(),
            Matcher::Number(m) => m.is_done(),
            Matcher::String(m) => m.is_done(),
            Matcher::Array(m) => m.is_done(),
            Matcher::Object(m) => m.is_done(),
            Matcher::Token(m) => m.is_done(),
            Matcher::Eof(m) => m.is_done(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RootState {
    Start,
    NewToken,
    Done,
}

/// Dispatches to a value matcher based on the first significant character.
///
/// Pushed wherever the grammar expects a value: at the top level, for each
/// array element, and (with `object_key` set) for each object key, where only
/// a string is acceptable.
#[derive(Debug)]
pub(crate) struct RootMatcher {
    state: RootState,
    object_key: bool,
}

impl RootMatcher {
    fn new(object_key: bool) -> Self {
        Self {
            state: RootState::Start,
            object_key,
        }
    }

    fn is_done(&self) -> bool {
        self.state == RootState::Done
    }

    fn consume<B: Backend>(&mut self, p: &mut Parser<B>, ch: Option<char>) -> Step {
        let Some(c) = ch else {
            p.set_error(SyntaxError::ExpectedToken);
            return (None, true);
        };
        match self.state {
            RootState::Start => {
                // Skip any leading whitespace, then look at the same
                // character again.
                self.state = RootState::NewToken;
                (Some(Matcher::whitespace()), false)
            }
            RootState::NewToken => {
                if self.object_key && c != '"' && c != '\'' {
                    p.set_error(SyntaxError::ExpectedString);
                    return (None, true);
                }
                self.state = RootState::Done;
                match c {
                    '+' if !p.extension_enabled(Extensions::LEADING_PLUS) => {
                        p.set_error(SyntaxError::ExpectedToken);
                        (None, true)
                    }
                    '+' | '-' | '0'..='9' => (Some(Matcher::number()), false),
                    '\'' if !p.extension_enabled(Extensions::SINGLE_QUOTE_STRING) => {
                        p.set_error(SyntaxError::ExpectedToken);
                        (None, true)
                    }
                    '"' | '\'' => {
                        p.string_buf.clear();
                        (Some(Matcher::string(self.object_key, c)), false)
                    }
                    't' => (Some(Matcher::token(TokenKind::True)), false),
                    'f' => (Some(Matcher::token(TokenKind::False)), false),
                    'n' => (Some(Matcher::token(TokenKind::Null)), false),
                    '[' => (Some(Matcher::array()), false),
                    '{' => (Some(Matcher::object()), false),
                    _ => {
                        p.set_error(SyntaxError::ExpectedToken);
                        (None, true)
                    }
                }
            }
            RootState::Done => unreachable!("consume() called on a finished matcher"),
        }
    }
}
