//! Array and object matchers.
//!
//! Each emits its begin event on the opening bracket, recognizes members by
//! pushing a root matcher (with the object-key flag set for keys), and
//! interposes whitespace matchers between structural tokens. The trailing
//! comma extensions work by returning to the "first member" state after a
//! comma, where the closing bracket is also acceptable.

use crate::backend::Backend;
use crate::error::SyntaxError;
use crate::extensions::Extensions;
use crate::parser::matcher::{Matcher, Step};
use crate::parser::whitespace::is_json_whitespace;
use crate::parser::Parser;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ArrayState {
    /// The opening `[`.
    Start,
    /// Expecting the first element, or `]` for an empty array.
    FirstElement,
    /// Expecting an element; `]` is not acceptable here.
    Element,
    /// Expecting `,` or `]`.
    Comma,
    Done,
}

#[derive(Debug)]
pub(crate) struct ArrayMatcher {
    state: ArrayState,
}

impl ArrayMatcher {
    pub(crate) fn new() -> Self {
        Self {
            state: ArrayState::Start,
        }
    }

    pub(crate) fn is_done(&self) -> bool {
        self.state == ArrayState::Done
    }

    pub(crate) fn consume<B: Backend>(&mut self, p: &mut Parser<B>, ch: Option<char>) -> Step {
        let Some(c) = ch else {
            p.set_error(SyntaxError::ExpectedArrayMember);
            return (None, true);
        };
        match self.state {
            ArrayState::Start => {
                debug_assert_eq!(c, '[');
                let emitted = p.backend.begin_array();
                if p.check(emitted) {
                    return (None, true);
                }
                self.state = ArrayState::FirstElement;
                // Consume the bracket and skip whitespace before the first
                // element or the closing bracket.
                (Some(Matcher::whitespace()), true)
            }
            ArrayState::FirstElement if c == ']' => {
                self.end(p);
                (None, true)
            }
            ArrayState::FirstElement | ArrayState::Element => {
                self.state = ArrayState::Comma;
                (Some(Matcher::root(false)), false)
            }
            ArrayState::Comma => {
                if is_json_whitespace(c) {
                    return (Some(Matcher::whitespace()), false);
                }
                match c {
                    ',' => {
                        self.state = if p.extension_enabled(Extensions::ARRAY_TRAILING_COMMA) {
                            ArrayState::FirstElement
                        } else {
                            ArrayState::Element
                        };
                        (Some(Matcher::whitespace()), true)
                    }
                    ']' => {
                        self.end(p);
                        (None, true)
                    }
                    _ => {
                        p.set_error(SyntaxError::ExpectedArrayMember);
                        (None, true)
                    }
                }
            }
            ArrayState::Done => unreachable!("consume() called on a finished matcher"),
        }
    }

    fn end<B: Backend>(&mut self, p: &mut Parser<B>) {
        let emitted = p.backend.end_array();
        p.check(emitted);
        self.state = ArrayState::Done;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ObjectState {
    /// The opening `{`.
    Start,
    /// Expecting the first key, or `}` for an empty object.
    FirstKey,
    /// Expecting a key; `}` is not acceptable here.
    Key,
    /// Expecting the `:` separator.
    Colon,
    /// Expecting the member's value.
    Value,
    /// Expecting `,` or `}`.
    Comma,
    Done,
}

#[derive(Debug)]
pub(crate) struct ObjectMatcher {
    state: ObjectState,
}

impl ObjectMatcher {
    pub(crate) fn new() -> Self {
        Self {
            state: ObjectState::Start,
        }
    }

    pub(crate) fn is_done(&self) -> bool {
        self.state == ObjectState::Done
    }

    pub(crate) fn consume<B: Backend>(&mut self, p: &mut Parser<B>, ch: Option<char>) -> Step {
        let Some(c) = ch else {
            p.set_error(SyntaxError::ExpectedObjectMember);
            return (None, true);
        };
        match self.state {
            ObjectState::Start => {
                debug_assert_eq!(c, '{');
                let emitted = p.backend.begin_object();
                if p.check(emitted) {
                    return (None, true);
                }
                self.state = ObjectState::FirstKey;
                (Some(Matcher::whitespace()), true)
            }
            ObjectState::FirstKey if c == '}' => {
                self.end(p);
                (None, true)
            }
            ObjectState::FirstKey | ObjectState::Key => {
                // Match a key (the root matcher insists on a string), then
                // expect a colon.
                self.state = ObjectState::Colon;
                (Some(Matcher::root(true)), false)
            }
            ObjectState::Colon => {
                if is_json_whitespace(c) {
                    return (Some(Matcher::whitespace()), false);
                }
                if c == ':' {
                    self.state = ObjectState::Value;
                } else {
                    p.set_error(SyntaxError::ExpectedColon);
                }
                (None, true)
            }
            ObjectState::Value => {
                self.state = ObjectState::Comma;
                (Some(Matcher::root(false)), false)
            }
            ObjectState::Comma => {
                if is_json_whitespace(c) {
                    return (Some(Matcher::whitespace()), false);
                }
                match c {
                    ',' => {
                        self.state = if p.extension_enabled(Extensions::OBJECT_TRAILING_COMMA) {
                            ObjectState::FirstKey
                        } else {
                            ObjectState::Key
                        };
                        (Some(Matcher::whitespace()), true)
                    }
                    '}' => {
                        self.end(p);
                        (None, true)
                    }
                    _ => {
                        p.set_error(SyntaxError::ExpectedObjectMember);
                        (None, true)
                    }
                }
            }
            ObjectState::Done => unreachable!("consume() called on a finished matcher"),
        }
    }

    fn end<B: Backend>(&mut self, p: &mut Parser<B>) {
        let emitted = p.backend.end_object();
        p.check(emitted);
        self.state = ObjectState::Done;
    }
}
