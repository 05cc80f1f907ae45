//! The backend (sink) contract.
//!
//! A backend receives the parser's semantic events: scalar values, object
//! keys, and array/object boundaries, in strict document order. Callbacks run
//! synchronously from inside [`Parser::input`](crate::Parser::input) and
//! [`Parser::eof`](crate::Parser::eof); any `Err` a callback returns becomes
//! the parser's sticky error and halts all further processing.

use core::convert::Infallible;
use core::fmt::{Debug, Display};

/// Consumer of parse events.
///
/// String slices passed to [`string_value`](Backend::string_value) and
/// [`key`](Backend::key) borrow the parser's internal buffer and are only
/// valid for the duration of the call.
///
/// Integral numbers arrive through [`int64_value`](Backend::int64_value) when
/// negative and [`uint64_value`](Backend::uint64_value) otherwise, so the
/// full unsigned 64-bit range survives. Numbers with a fraction or exponent
/// arrive through [`double_value`](Backend::double_value).
///
/// # Examples
///
/// A backend that counts array elements at the top level:
///
/// ```
/// use jsonpump::{Backend, Parser};
///
/// #[derive(Default)]
/// struct Count(usize);
///
/// impl Backend for Count {
///     type Error = core::convert::Infallible;
///     type Result = usize;
///
///     fn uint64_value(&mut self, _: u64) -> Result<(), Self::Error> {
///         self.0 += 1;
///         Ok(())
///     }
///     fn result(&mut self) -> usize {
///         self.0
///     }
/// }
///
/// let mut parser = Parser::new(Count::default());
/// parser.input("[1, 2, 3]");
/// assert_eq!(parser.eof().unwrap(), 3);
/// ```
pub trait Backend {
    /// The backend's own failure type, propagated through
    /// [`ErrorKind::Backend`](crate::ErrorKind::Backend).
    type Error: Clone + Debug + Display + PartialEq;
    /// Whatever [`result`](Backend::result) produces; returned by
    /// [`Parser::eof`](crate::Parser::eof) on success.
    type Result;

    /// A completed quoted string that is not an object key.
    fn string_value(&mut self, _s: &str) -> Result<(), Self::Error> {
        Ok(())
    }
    /// A completed object key.
    fn key(&mut self, _s: &str) -> Result<(), Self::Error> {
        Ok(())
    }
    /// An integral number that required the signed range.
    fn int64_value(&mut self, _v: i64) -> Result<(), Self::Error> {
        Ok(())
    }
    /// A non-negative integral number.
    fn uint64_value(&mut self, _v: u64) -> Result<(), Self::Error> {
        Ok(())
    }
    /// A number with a fractional part or exponent.
    fn double_value(&mut self, _v: f64) -> Result<(), Self::Error> {
        Ok(())
    }
    /// A `true` or `false` token.
    fn boolean_value(&mut self, _v: bool) -> Result<(), Self::Error> {
        Ok(())
    }
    /// A `null` token.
    fn null_value(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
    /// The opening bracket of an array.
    fn begin_array(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
    /// The closing bracket of an array; always balances an earlier
    /// [`begin_array`](Backend::begin_array).
    fn end_array(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
    /// The opening brace of an object.
    fn begin_object(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
    /// The closing brace of an object; always balances an earlier
    /// [`begin_object`](Backend::begin_object).
    fn end_object(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
    /// Produce the final result. Called once by
    /// [`Parser::eof`](crate::Parser::eof) after a successful parse.
    fn result(&mut self) -> Self::Result;
}

/// A backend that discards every event: parse for validity only.
///
/// ```
/// use jsonpump::{Null, Parser};
///
/// let mut parser = Parser::new(Null);
/// parser.input(br#"{"valid": [true, null]}"#);
/// assert!(parser.eof().is_ok());
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Null;

impl Backend for Null {
    type Error = Infallible;
    type Result = ();

    fn result(&mut self) {}
}
