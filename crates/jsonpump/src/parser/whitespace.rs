//! Whitespace and comments.
//!
//! Consumes the four JSON whitespace characters and, when the corresponding
//! extensions are enabled, `#`, `//`, and `/* */` comments. Also the one
//! place where line breaks are counted: a lone CR, a lone LF, or a CR/LF
//! pair each advance the row exactly once.

use crate::backend::Backend;
use crate::error::SyntaxError;
use crate::extensions::Extensions;
use crate::parser::matcher::Step;
use crate::parser::Parser;

/// The whitespace characters of RFC 8259.
pub(crate) fn is_json_whitespace(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r' | ' ')
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WsState {
    /// Plain whitespace scanning.
    Body,
    /// A CR was just consumed; an immediately following LF belongs to it.
    CrLf,
    /// A `/` was consumed; the next character decides `//` versus `/*`.
    CommentStart,
    /// Inside a `#` or `//` comment, consuming to the end of the line.
    SingleLineComment,
    /// Inside a `/* */` comment.
    MultiLineCommentBody,
    /// A `*` was seen inside a multi-line comment; `/` would end it.
    MultiLineCommentEnding,
    /// CR inside a multi-line comment; pairs with a following LF.
    MultiLineCommentCrLf,
    Done,
}

#[derive(Debug)]
pub(crate) struct WhitespaceMatcher {
    state: WsState,
}

impl WhitespaceMatcher {
    pub(crate) fn new() -> Self {
        Self { state: WsState::Body }
    }

    pub(crate) fn is_done(&self) -> bool {
        self.state == WsState::Done
    }

    pub(crate) fn consume<B: Backend>(&mut self, p: &mut Parser<B>, ch: Option<char>) -> Step {
        let Some(c) = ch else {
            // End of input is fine anywhere, including inside a comment.
            self.state = WsState::Done;
            return (None, true);
        };
        match self.state {
            WsState::CrLf => {
                self.state = WsState::Body;
                if c == '\n' {
                    // Second half of a CR/LF pair: the row already advanced.
                    p.reset_column();
                    (None, true)
                } else {
                    self.consume_body(p, c)
                }
            }
            WsState::Body => self.consume_body(p, c),
            WsState::CommentStart => {
                if c == '/' && p.extension_enabled(Extensions::SINGLE_LINE_COMMENTS) {
                    self.state = WsState::SingleLineComment;
                } else if c == '*' && p.extension_enabled(Extensions::MULTI_LINE_COMMENTS) {
                    self.state = WsState::MultiLineCommentBody;
                } else {
                    p.set_error(SyntaxError::ExpectedToken);
                }
                (None, true)
            }
            WsState::SingleLineComment => {
                if c == '\r' || c == '\n' {
                    // The line break ends the comment but is not part of it;
                    // retry it as ordinary whitespace.
                    self.state = WsState::Body;
                    (None, false)
                } else {
                    (None, true)
                }
            }
            WsState::MultiLineCommentEnding => {
                self.state = if c == '/' {
                    WsState::Body
                } else {
                    WsState::MultiLineCommentBody
                };
                (None, true)
            }
            WsState::MultiLineCommentCrLf => {
                self.state = WsState::MultiLineCommentBody;
                if c == '\n' {
                    p.reset_column();
                    (None, true)
                } else {
                    self.multi_line_comment_body(p, c)
                }
            }
            WsState::MultiLineCommentBody => self.multi_line_comment_body(p, c),
            WsState::Done => unreachable!("consume() called on a finished matcher"),
        }
    }

    fn consume_body<B: Backend>(&mut self, p: &mut Parser<B>, c: char) -> Step {
        match c {
            ' ' | '\t' => (None, true),
            '\r' => {
                p.advance_row();
                self.state = WsState::CrLf;
                (None, true)
            }
            '\n' => {
                p.advance_row();
                (None, true)
            }
            '#' if p.extension_enabled(Extensions::BASH_COMMENTS) => {
                self.state = WsState::SingleLineComment;
                (None, true)
            }
            '/' if p.extension_enabled(Extensions::SINGLE_LINE_COMMENTS)
                || p.extension_enabled(Extensions::MULTI_LINE_COMMENTS) =>
            {
                self.state = WsState::CommentStart;
                (None, true)
            }
            _ => {
                // Not whitespace: finish and let the caller see this
                // character.
                self.state = WsState::Done;
                (None, false)
            }
        }
    }

    fn multi_line_comment_body<B: Backend>(&mut self, p: &mut Parser<B>, c: char) -> Step {
        match c {
            '*' => self.state = WsState::MultiLineCommentEnding,
            '\r' => {
                p.advance_row();
                self.state = WsState::MultiLineCommentCrLf;
            }
            '\n' => p.advance_row(),
            _ => {}
        }
        (None, true)
    }
}
