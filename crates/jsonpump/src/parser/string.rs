//! The string matcher.
//!
//! Handles both object keys and string values, writing into the parser's
//! shared string buffer. Escape sequences cover the simple escapes and
//! `\uXXXX`; UTF-16 surrogate-pair state is carried across escapes so a pair
//! split over two `\u` sequences (or two input chunks) reassembles, and an
//! orphan surrogate is rejected no later than the closing quote.

use crate::backend::Backend;
use crate::error::SyntaxError;
use crate::parser::matcher::Step;
use crate::parser::Parser;
use crate::transcode::Utf16Collector;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StrState {
    /// Consuming the opening quote.
    Start,
    /// Ordinary characters and the closing quote.
    NormalChar,
    /// The character after a backslash.
    Escape,
    /// Hex digits of a `\uXXXX` escape, most significant first.
    Hex1,
    Hex2,
    Hex3,
    Hex4,
    Done,
}

#[derive(Debug)]
pub(crate) struct StringMatcher {
    state: StrState,
    object_key: bool,
    /// The quote character that opened the string; `'` under the
    /// single-quote extension, `"` otherwise.
    quote: char,
    /// Accumulator for the four hex digits of a `\u` escape.
    hex: u32,
    utf16: Utf16Collector,
}

impl StringMatcher {
    pub(crate) fn new(object_key: bool, quote: char) -> Self {
        Self {
            state: StrState::Start,
            object_key,
            quote,
            hex: 0,
            utf16: Utf16Collector::new(),
        }
    }

    pub(crate) fn is_done(&self) -> bool {
        self.state == StrState::Done
    }

    pub(crate) fn consume<B: Backend>(&mut self, p: &mut Parser<B>, ch: Option<char>) -> Step {
        let Some(c) = ch else {
            p.set_error(SyntaxError::ExpectedCloseQuote);
            return (None, true);
        };
        match self.state {
            StrState::Start => {
                if c == self.quote {
                    self.state = StrState::NormalChar;
                } else {
                    p.set_error(SyntaxError::ExpectedToken);
                }
            }
            StrState::NormalChar => self.normal(p, c),
            StrState::Escape => self.escape(p, c),
            StrState::Hex1 | StrState::Hex2 | StrState::Hex3 | StrState::Hex4 => {
                self.hex_digit(p, c);
            }
            StrState::Done => unreachable!("consume() called on a finished matcher"),
        }
        (None, true)
    }

    fn normal<B: Backend>(&mut self, p: &mut Parser<B>, c: char) {
        if c == self.quote {
            if self.utf16.partial() {
                // A high surrogate is still waiting for its partner.
                p.set_error(SyntaxError::BadUnicodeCodePoint);
                return;
            }
            let emitted = if self.object_key {
                p.backend.key(&p.string_buf)
            } else {
                p.backend.string_value(&p.string_buf)
            };
            p.check(emitted);
            self.state = StrState::Done;
        } else if c == '\\' {
            self.state = StrState::Escape;
        } else if (c as u32) <= 0x1f {
            // Control characters U+0000 through U+001F must be escaped.
            p.set_error(SyntaxError::BadUnicodeCodePoint);
        } else {
            p.string_buf.push(c);
        }
    }

    fn escape<B: Backend>(&mut self, p: &mut Parser<B>, c: char) {
        let literal = match c {
            '"' | '\'' | '/' | '\\' => c,
            'b' => '\u{0008}',
            'f' => '\u{000c}',
            'n' => '\n',
            'r' => '\r',
            't' => '\t',
            'u' => {
                self.hex = 0;
                self.state = StrState::Hex1;
                return;
            }
            _ => {
                p.set_error(SyntaxError::InvalidEscapeChar);
                return;
            }
        };
        p.string_buf.push(literal);
        self.state = StrState::NormalChar;
    }

    fn hex_digit<B: Backend>(&mut self, p: &mut Parser<B>, c: char) {
        let Some(d) = hex_value(c) else {
            p.set_error(SyntaxError::InvalidHexChar);
            return;
        };
        self.hex = self.hex * 16 + d;
        self.state = match self.state {
            StrState::Hex1 => StrState::Hex2,
            StrState::Hex2 => StrState::Hex3,
            StrState::Hex3 => StrState::Hex4,
            StrState::Hex4 => {
                // Four digits collected: one UTF-16 code unit, possibly half
                // of a surrogate pair.
                #[allow(clippy::cast_possible_truncation)]
                let unit = self.hex as u16;
                if self.utf16.feed(unit, &mut p.string_buf).is_err() {
                    p.set_error(SyntaxError::BadUnicodeCodePoint);
                    return;
                }
                self.hex = 0;
                StrState::NormalChar
            }
            _ => unreachable!(),
        };
    }
}

fn hex_value(c: char) -> Option<u32> {
    match c {
        '0'..='9' => Some(c as u32 - '0' as u32),
        'a'..='f' => Some(c as u32 - 'a' as u32 + 10),
        'A'..='F' => Some(c as u32 - 'A' as u32 + 10),
        _ => None,
    }
}
