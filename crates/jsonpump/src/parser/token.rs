//! Fixed-token matchers for `true`, `false`, and `null`, and the EOF matcher
//! that anchors the bottom of the parse stack.

use crate::backend::Backend;
use crate::error::SyntaxError;
use crate::parser::matcher::Step;
use crate::parser::Parser;

/// Which keyword a token matcher is looking for, and which backend callback
/// fires when it completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TokenKind {
    True,
    False,
    Null,
}

impl TokenKind {
    fn text(self) -> &'static [u8] {
        match self {
            TokenKind::True => b"true",
            TokenKind::False => b"false",
            TokenKind::Null => b"null",
        }
    }

    fn complete<B: Backend>(self, backend: &mut B) -> Result<(), B::Error> {
        match self {
            TokenKind::True => backend.boolean_value(true),
            TokenKind::False => backend.boolean_value(false),
            TokenKind::Null => backend.null_value(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TokState {
    /// Matching characters against the keyword text.
    Matching,
    /// All characters matched; the next one must not be alphanumeric.
    Lookahead,
    Done,
}

/// Matches one keyword byte-for-byte. The input must reproduce the keyword
/// exactly and must not continue with an ASCII letter or digit (`nullx` is an
/// unrecognized token, `null,` is fine — the comma is handed back).
#[derive(Debug)]
pub(crate) struct TokenMatcher {
    state: TokState,
    kind: TokenKind,
    /// The keyword bytes not yet matched.
    rest: &'static [u8],
}

impl TokenMatcher {
    pub(crate) fn new(kind: TokenKind) -> Self {
        Self {
            state: TokState::Matching,
            kind,
            rest: kind.text(),
        }
    }

    pub(crate) fn is_done(&self) -> bool {
        self.state == TokState::Done
    }

    pub(crate) fn consume<B: Backend>(&mut self, p: &mut Parser<B>, ch: Option<char>) -> Step {
        match self.state {
            TokState::Matching => {
                match (ch, self.rest.split_first()) {
                    (Some(c), Some((&expected, tail))) if c == char::from(expected) => {
                        self.rest = tail;
                        if tail.is_empty() {
                            self.state = TokState::Lookahead;
                        }
                    }
                    _ => p.set_error(SyntaxError::UnrecognizedToken),
                }
                (None, true)
            }
            TokState::Lookahead => {
                let mut consumed = true;
                if let Some(c) = ch {
                    if c.is_ascii_alphanumeric() {
                        p.set_error(SyntaxError::UnrecognizedToken);
                        return (None, true);
                    }
                    // The lookahead character belongs to whoever comes next.
                    consumed = false;
                }
                let emitted = self.kind.complete(&mut p.backend);
                p.check(emitted);
                self.state = TokState::Done;
                (None, consumed)
            }
            TokState::Done => unreachable!("consume() called on a finished matcher"),
        }
    }
}

/// Sits at the bottom of the stack: anything other than the end of input is
/// extra text after the top-level value.
#[derive(Debug)]
pub(crate) struct EofMatcher {
    done: bool,
}

impl EofMatcher {
    pub(crate) fn new() -> Self {
        Self { done: false }
    }

    pub(crate) fn is_done(&self) -> bool {
        self.done
    }

    pub(crate) fn consume<B: Backend>(&mut self, p: &mut Parser<B>, ch: Option<char>) -> Step {
        if ch.is_some() {
            p.set_error(SyntaxError::UnexpectedExtraInput);
        } else {
            self.done = true;
        }
        (None, true)
    }
}
