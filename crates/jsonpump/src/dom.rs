//! An optional backend that assembles parse events into an in-memory value.
//!
//! The builder keeps a flat stack of completed values separated by marks: a
//! `begin_array`/`begin_object` pushes a mark, and the matching `end_*`
//! collects everything back to it. Keys ride the same stack as plain strings
//! and pair up with their values when the object closes.

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::backend::Backend;
use crate::error::Error;
use crate::extensions::Extensions;
use crate::parser::Parser;

/// A parsed JSON value.
///
/// Integral numbers keep the parser's signedness split: values that needed
/// the signed range are [`Int`](Value::Int), other integers are
/// [`UInt`](Value::UInt), and anything with a fraction or exponent is
/// [`Double`](Value::Double).
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Null,
    Boolean(bool),
    Int(i64),
    UInt(u64),
    Double(f64),
    String(String),
    Array(Vec<Value>),
    Object(BTreeMap<String, Value>),
}

impl Value {
    /// The string slice, if this is a string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// The elements, if this is an array.
    #[must_use]
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(values) => Some(values),
            _ => None,
        }
    }

    /// The members, if this is an object.
    #[must_use]
    pub fn as_object(&self) -> Option<&BTreeMap<String, Value>> {
        match self {
            Value::Object(members) => Some(members),
            _ => None,
        }
    }

    /// Any numeric variant widened to a double.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        #[allow(clippy::cast_precision_loss)]
        match *self {
            Value::Int(v) => Some(v as f64),
            Value::UInt(v) => Some(v as f64),
            Value::Double(v) => Some(v),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

/// The DOM builder's own failure mode.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    /// The value stack outgrew the configured element limit.
    #[error("object or array contains too many members")]
    TooManyMembers,
}

#[derive(Debug)]
enum Node {
    Value(Value),
    /// Separates the elements of the container currently being filled from
    /// everything beneath it.
    Mark,
}

/// A [`Backend`] that builds a [`Value`] tree.
///
/// # Examples
///
/// ```
/// use jsonpump::{parse, Value};
///
/// let value = parse(br#"[1, -2, "three"]"#).unwrap();
/// assert_eq!(
///     value,
///     Value::Array(vec![Value::UInt(1), Value::Int(-2), "three".into()])
/// );
/// ```
#[derive(Debug)]
pub struct Dom {
    stack: Vec<Node>,
    limit: usize,
}

/// Upper bound on simultaneously pending elements; generous for any sane
/// document while bounding a hostile one.
const DEFAULT_ELEMENT_LIMIT: usize = 1024;

impl Default for Dom {
    fn default() -> Self {
        Self::new()
    }
}

impl Dom {
    /// A builder with the default element limit.
    #[must_use]
    pub fn new() -> Self {
        Self::with_limit(DEFAULT_ELEMENT_LIMIT)
    }

    /// A builder that refuses to hold more than `limit` pending elements.
    #[must_use]
    pub fn with_limit(limit: usize) -> Self {
        Self {
            stack: Vec::new(),
            limit,
        }
    }

    fn push(&mut self, node: Node) -> Result<(), DomError> {
        if self.stack.len() >= self.limit {
            return Err(DomError::TooManyMembers);
        }
        self.stack.push(node);
        Ok(())
    }

    fn push_value(&mut self, value: Value) -> Result<(), DomError> {
        self.push(Node::Value(value))
    }
}

impl Backend for Dom {
    type Error = DomError;
    type Result = Option<Value>;

    fn string_value(&mut self, s: &str) -> Result<(), DomError> {
        self.push_value(Value::String(s.to_string()))
    }

    fn key(&mut self, s: &str) -> Result<(), DomError> {
        self.push_value(Value::String(s.to_string()))
    }

    fn int64_value(&mut self, v: i64) -> Result<(), DomError> {
        self.push_value(Value::Int(v))
    }

    fn uint64_value(&mut self, v: u64) -> Result<(), DomError> {
        self.push_value(Value::UInt(v))
    }

    fn double_value(&mut self, v: f64) -> Result<(), DomError> {
        self.push_value(Value::Double(v))
    }

    fn boolean_value(&mut self, v: bool) -> Result<(), DomError> {
        self.push_value(Value::Boolean(v))
    }

    fn null_value(&mut self) -> Result<(), DomError> {
        self.push_value(Value::Null)
    }

    fn begin_array(&mut self) -> Result<(), DomError> {
        self.push(Node::Mark)
    }

    fn end_array(&mut self) -> Result<(), DomError> {
        let mut elements = Vec::new();
        loop {
            match self.stack.pop() {
                Some(Node::Value(value)) => elements.push(value),
                Some(Node::Mark) => break,
                None => unreachable!("end_array without a begin_array"),
            }
        }
        elements.reverse();
        self.push_value(Value::Array(elements))
    }

    fn begin_object(&mut self) -> Result<(), DomError> {
        self.push(Node::Mark)
    }

    fn end_object(&mut self) -> Result<(), DomError> {
        let mut members = BTreeMap::new();
        loop {
            let value = match self.stack.pop() {
                Some(Node::Value(value)) => value,
                Some(Node::Mark) => break,
                None => unreachable!("end_object without a begin_object"),
            };
            let Some(Node::Value(Value::String(key))) = self.stack.pop() else {
                unreachable!("object member without a key");
            };
            // Duplicate keys: the earlier (leftmost) pop wins here, which is
            // the member that appeared last in the document.
            members.entry(key).or_insert(value);
        }
        self.push_value(Value::Object(members))
    }

    fn result(&mut self) -> Option<Value> {
        match self.stack.pop() {
            Some(Node::Value(value)) if self.stack.is_empty() => Some(value),
            _ => None,
        }
    }
}

/// Parses a complete document into a [`Value`] with the strict grammar.
///
/// # Errors
///
/// Any syntax error, or [`DomError`] if the document outgrows the builder.
pub fn parse(src: impl AsRef<[u8]>) -> Result<Value, Error<DomError>> {
    parse_with_extensions(src, Extensions::NONE)
}

/// Parses a complete document into a [`Value`] with extensions enabled.
///
/// # Errors
///
/// Any syntax error, or [`DomError`] if the document outgrows the builder.
pub fn parse_with_extensions(
    src: impl AsRef<[u8]>,
    extensions: Extensions,
) -> Result<Value, Error<DomError>> {
    let mut parser = Parser::with_extensions(Dom::new(), extensions);
    parser.input(src);
    match parser.eof()? {
        Some(value) => Ok(value),
        None => unreachable!("a successful parse produces exactly one value"),
    }
}
