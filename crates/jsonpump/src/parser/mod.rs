//! The streaming parser driver.
//!
//! The parser is a pushdown automaton: a stack of matchers, each owning one
//! production of the JSON grammar. Input bytes run through an incremental
//! UTF-8 decoder; every completed code point is handed to the topmost
//! matcher, which may push a child matcher, finish and be popped, and decide
//! whether the same code point should be re-delivered to the new top of the
//! stack. Backend callbacks fire synchronously from inside the matchers.

mod composite;
mod matcher;
mod number;
mod string;
mod token;
mod whitespace;

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use crate::backend::Backend;
use crate::coord::Coord;
use crate::error::{Error, ErrorKind, SyntaxError};
use crate::extensions::Extensions;
use crate::transcode::Utf8Decoder;
use self::matcher::Matcher;

/// The maximum depth the parse stack may reach. The limit exists to stop
/// adversarial inputs (say, a few hundred kilobytes of `[`) from growing the
/// parser's memory without bound.
const MAX_STACK_DEPTH: usize = 200;

/// An incremental push parser for JSON text.
///
/// Feed UTF-8 input with [`input`](Parser::input) — in as many chunks as you
/// like, split anywhere, even mid-code-point — then call
/// [`eof`](Parser::eof). Events are delivered to the [`Backend`] as soon as
/// each token completes.
///
/// # Examples
///
/// ```
/// use jsonpump::{Dom, Parser, Value};
///
/// let mut parser = Parser::new(Dom::new());
/// parser.input(br#"{"ten"#).input(br#"": 10}"#);
/// let value = parser.eof().unwrap();
/// assert_eq!(
///     value,
///     Some(Value::Object([("ten".into(), Value::UInt(10))].into()))
/// );
/// ```
///
/// A parser is single-use: after [`eof`](Parser::eof) it accepts no more
/// input. It is not `Sync`-shareable mid-parse; independent instances are
/// fully independent.
pub struct Parser<B: Backend> {
    stack: Vec<Matcher>,
    decoder: Utf8Decoder,
    /// Scratch storage shared by every string token in the document; cleared
    /// when a string match begins, so it grows to the largest single token.
    pub(crate) string_buf: String,
    error: Option<Error<B::Error>>,
    /// Position of the next code point to be read.
    pos: Coord,
    /// Position of the first code point of the token being matched.
    matcher_pos: Coord,
    extensions: Extensions,
    pub(crate) backend: B,
}

impl<B: Backend> Parser<B> {
    /// Creates a parser for the strict RFC 8259 grammar.
    pub fn new(backend: B) -> Self {
        Self::with_extensions(backend, Extensions::NONE)
    }

    /// Creates a parser with the given syntax extensions enabled.
    pub fn with_extensions(backend: B, extensions: Extensions) -> Self {
        Self {
            // The EOF matcher sits at the bottom so that input ends after a
            // single top-level value; above it, whitespace may trail that
            // value.
            stack: vec![Matcher::eof(), Matcher::whitespace(), Matcher::root(false)],
            decoder: Utf8Decoder::new(),
            string_buf: String::new(),
            error: None,
            pos: Coord::default(),
            matcher_pos: Coord::default(),
            extensions,
            backend,
        }
    }

    /// Parses a chunk of JSON input.
    ///
    /// May be called any number of times with portions of the source text as
    /// they arrive; chunks may split anywhere, including in the middle of a
    /// multi-byte code point. Once the whole document has been fed, call
    /// [`eof`](Parser::eof).
    ///
    /// After an error the remaining input is discarded; after a completed
    /// [`eof`](Parser::eof) further input is ignored.
    pub fn input(&mut self, src: impl AsRef<[u8]>) -> &mut Self {
        for &byte in src.as_ref() {
            if self.error.is_some() || self.stack.is_empty() {
                break;
            }
            match self.decoder.feed(byte) {
                Ok(None) => {}
                Ok(Some(code_point)) => {
                    self.consume_code_point(Some(code_point));
                    if self.error.is_none() {
                        self.pos.advance_column();
                    }
                }
                Err(_) => self.set_error(SyntaxError::BadUnicodeCodePoint),
            }
        }
        self
    }

    /// Signals that the complete input has been fed.
    ///
    /// Drains the parse stack by delivering the end-of-input sentinel to each
    /// remaining matcher, then returns [`Backend::result`] — or the sticky
    /// error, if one was recorded at any point.
    pub fn eof(&mut self) -> Result<B::Result, Error<B::Error>> {
        while !self.stack.is_empty() && self.error.is_none() {
            self.consume_code_point(None);
        }
        match &self.error {
            None => Ok(self.backend.result()),
            Some(err) => Err(err.clone()),
        }
    }

    /// True if the parser has recorded an error.
    #[must_use]
    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    /// The sticky error, if any.
    #[must_use]
    pub fn last_error(&self) -> Option<&Error<B::Error>> {
        self.error.as_ref()
    }

    /// The position of the first code point of the most recent token.
    #[must_use]
    pub fn pos(&self) -> Coord {
        self.matcher_pos
    }

    /// The position of the next code point to be read.
    #[must_use]
    pub fn input_pos(&self) -> Coord {
        self.pos
    }

    /// The extensions this parser was constructed with.
    #[must_use]
    pub fn extensions(&self) -> Extensions {
        self.extensions
    }

    /// Shared access to the backend.
    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Mutable access to the backend.
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Consumes the parser, returning the backend.
    #[must_use]
    pub fn into_backend(self) -> B {
        self.backend
    }

    /// Delivers one code point (or the end-of-input sentinel) to the matcher
    /// stack, honoring the re-delivery protocol: a matcher that returns
    /// `consumed == false` asks for the same code point to be presented to
    /// whatever is on top of the stack after its own push/pop took effect.
    fn consume_code_point(&mut self, ch: Option<char>) {
        loop {
            let Some(mut top) = self.stack.pop() else {
                return;
            };
            let (child, consumed) = top.consume(self, ch);
            if self.error.is_some() {
                return;
            }
            if top.is_done() {
                self.matcher_pos = self.pos;
            } else {
                self.stack.push(top);
            }
            if let Some(child) = child {
                if self.stack.len() > MAX_STACK_DEPTH {
                    self.set_error(SyntaxError::NestingTooDeep);
                    return;
                }
                self.stack.push(child);
                self.matcher_pos = self.pos;
            }
            if consumed {
                return;
            }
        }
    }

    /// Records a syntax error. The first error wins; parsing makes no further
    /// progress once one is set.
    pub(crate) fn set_error(&mut self, err: SyntaxError) {
        if self.error.is_none() {
            self.error = Some(Error::new(ErrorKind::Syntax(err), self.pos));
        }
    }

    /// Records a backend callback's failure, if it failed. Returns true if
    /// the parser is now (or already was) in the error state.
    pub(crate) fn check(&mut self, result: Result<(), B::Error>) -> bool {
        if let Err(err) = result {
            if self.error.is_none() {
                self.error = Some(Error::new(ErrorKind::Backend(err), self.pos));
            }
        }
        self.error.is_some()
    }

    pub(crate) fn extension_enabled(&self, flag: Extensions) -> bool {
        self.extensions.enabled(flag)
    }

    pub(crate) fn advance_row(&mut self) {
        self.pos.advance_row();
    }

    pub(crate) fn reset_column(&mut self) {
        self.pos.reset_column();
    }
}
