//! Parse errors.
//!
//! Every failure the parser can report is a [`SyntaxError`], except for
//! errors returned by the backend, which are carried through unchanged as
//! [`ErrorKind::Backend`]. Errors are sticky: once one is recorded the parser
//! consumes no further input and keeps returning the same error.

use thiserror::Error;

use crate::coord::Coord;

/// An error raised during parsing, tagged with the input position at which it
/// was detected.
#[derive(Clone, Debug, PartialEq, Error)]
#[error("{kind} at {pos}")]
pub struct Error<E> {
    pub(crate) kind: ErrorKind<E>,
    pub(crate) pos: Coord,
}

impl<E> Error<E> {
    pub(crate) fn new(kind: ErrorKind<E>, pos: Coord) -> Self {
        Self { kind, pos }
    }

    /// What went wrong.
    #[must_use]
    pub fn kind(&self) -> &ErrorKind<E> {
        &self.kind
    }

    /// The input coordinate at the moment of detection.
    #[must_use]
    pub fn pos(&self) -> Coord {
        self.pos
    }

    /// The syntax error, if this is one (as opposed to a backend error).
    #[must_use]
    pub fn syntax(&self) -> Option<SyntaxError> {
        match &self.kind {
            ErrorKind::Syntax(e) => Some(*e),
            ErrorKind::Backend(_) => None,
        }
    }
}

/// The two sources of parse failure: the input text, or the backend.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ErrorKind<E> {
    /// The input violated the JSON grammar (or an enabled extension of it).
    #[error("{0}")]
    Syntax(#[from] SyntaxError),
    /// The backend rejected an event; parsing stopped there.
    #[error("backend error: {0}")]
    Backend(E),
}

/// Everything that can be wrong with the input text itself.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum SyntaxError {
    /// An illegal control character or malformed UTF-8/UTF-16 in a string,
    /// or an orphan/unpaired surrogate escape.
    #[error("bad UNICODE code point")]
    BadUnicodeCodePoint,
    /// Premature end or unexpected character inside an array.
    #[error("expected array member")]
    ExpectedArrayMember,
    /// End of input inside a string.
    #[error("expected close quote")]
    ExpectedCloseQuote,
    /// Missing `:` between an object key and its value.
    #[error("expected colon")]
    ExpectedColon,
    /// End of input inside an incomplete number such as `-` or `1.`.
    #[error("expected digits")]
    ExpectedDigits,
    /// Premature end or unexpected character inside an object.
    #[error("expected object member")]
    ExpectedObjectMember,
    /// An object key that is not a quoted string.
    #[error("expected string")]
    ExpectedString,
    /// An illegal first character of a value or comment.
    #[error("expected token")]
    ExpectedToken,
    /// A character other than `" ' / \ b f n r t u` after a backslash.
    #[error("invalid escape character")]
    InvalidEscapeChar,
    /// A non-hexadecimal character inside a `\u` escape.
    #[error("invalid hexadecimal escape character")]
    InvalidHexChar,
    /// Integer overflow, an out-of-range signed magnitude, or a float that
    /// lands on infinity or NaN.
    #[error("number out of range")]
    NumberOutOfRange,
    /// Non-whitespace input after the top-level value.
    #[error("unexpected extra input")]
    UnexpectedExtraInput,
    /// A misspelled `true`/`false`/`null`, an alphanumeric character trailing
    /// a token, or a bad character inside a number.
    #[error("unrecognized token")]
    UnrecognizedToken,
    /// The parse stack exceeded its depth limit.
    #[error("objects are too deeply nested")]
    NestingTooDeep,
}
