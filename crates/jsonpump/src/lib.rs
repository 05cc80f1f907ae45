//! An incremental, push-style JSON parser.
//!
//! Feed UTF-8 bytes to a [`Parser`] in chunks of any size — split anywhere,
//! even mid-code-point — and it pushes semantic events (scalars, object keys,
//! container boundaries) into a [`Backend`] of your choosing as each token
//! completes. The parser builds no tree of its own; the optional [`Dom`]
//! backend assembles a [`Value`] from the event stream, and [`Null`] discards
//! everything for validation-only parsing.
//!
//! Strict RFC 8259 by default, with opt-in [`Extensions`] for comments,
//! trailing commas, single-quoted strings, and leading `+` signs.
//!
//! ```
//! use jsonpump::{parse_with_extensions, Extensions, Value};
//!
//! let value = parse_with_extensions(
//!     b"[1, 2, 3,] // nothing to see here",
//!     Extensions::ARRAY_TRAILING_COMMA | Extensions::SINGLE_LINE_COMMENTS,
//! )
//! .unwrap();
//! assert_eq!(
//!     value,
//!     Value::Array(vec![Value::UInt(1), Value::UInt(2), Value::UInt(3)])
//! );
//! ```
//!
//! Malformed input is rejected with a precise [`SyntaxError`] and the
//! position it was detected at; errors are sticky, and memory stays bounded
//! against adversarial nesting by a hard parse-stack depth cap.

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod backend;
mod coord;
mod dom;
mod emit;
mod error;
mod extensions;
mod parser;
mod transcode;

pub use backend::{Backend, Null};
pub use coord::Coord;
pub use dom::{parse, parse_with_extensions, Dom, DomError, Value};
pub use emit::emit;
pub use error::{Error, ErrorKind, SyntaxError};
pub use extensions::Extensions;
pub use parser::Parser;

#[cfg(test)]
mod tests;
