use alloc::vec;
use alloc::vec::Vec;

use super::utils::{syntax_error_strict, Event, Recorder};
use crate::{Backend, Coord, Error, ErrorKind, Null, Parser, SyntaxError};

#[test]
fn errors_are_sticky() {
    let mut parser = Parser::new(Recorder::default());
    parser.input("tru!");
    assert!(parser.has_error());
    let first: Error<_> = parser.last_error().unwrap().clone();
    assert_eq!(first.syntax(), Some(SyntaxError::UnrecognizedToken));

    let events_so_far = parser.backend().events.len();
    parser.input("e, true, [1, 2]");
    assert_eq!(parser.last_error(), Some(&first));
    assert_eq!(parser.backend().events.len(), events_so_far);
    assert_eq!(parser.eof(), Err(first));
}

#[test]
fn extra_input_after_the_top_level_value() {
    let mut parser = Parser::new(Recorder::default());
    parser.input("1 2");
    let err = parser.last_error().unwrap();
    assert_eq!(err.syntax(), Some(SyntaxError::UnexpectedExtraInput));
    // The first value was already delivered before the error.
    assert_eq!(parser.backend().events, vec![Event::UInt(1)]);
}

#[test]
fn events_stop_at_the_error() {
    let mut parser = Parser::new(Recorder::default());
    parser.input("[true, nope, true]");
    assert!(parser.has_error());
    assert_eq!(
        parser.backend().events,
        vec![Event::BeginArray, Event::Boolean(true)]
    );
}

/// A backend that refuses booleans, for exercising callback cancellation.
#[derive(Debug, Default)]
struct NoBooleans {
    seen: Vec<Event>,
}

impl Backend for NoBooleans {
    type Error = &'static str;
    type Result = usize;

    fn boolean_value(&mut self, _v: bool) -> Result<(), &'static str> {
        Err("boolean refused")
    }

    fn begin_array(&mut self) -> Result<(), &'static str> {
        self.seen.push(Event::BeginArray);
        Ok(())
    }

    fn uint64_value(&mut self, v: u64) -> Result<(), &'static str> {
        self.seen.push(Event::UInt(v));
        Ok(())
    }

    fn result(&mut self) -> usize {
        self.seen.len()
    }
}

#[test]
fn backend_errors_abort_the_parse() {
    let mut parser = Parser::new(NoBooleans::default());
    parser.input("[1, true, 2]");
    let err = parser.last_error().unwrap();
    assert_eq!(err.kind(), &ErrorKind::Backend("boolean refused"));
    assert_eq!(err.syntax(), None);
    // Nothing after the refused callback reached the backend.
    assert_eq!(parser.backend().seen, vec![Event::BeginArray, Event::UInt(1)]);
    assert!(parser.eof().is_err());
}

#[test]
fn malformed_utf8_is_rejected() {
    for bad in [
        &[0xff_u8][..],
        &[0x80][..],
        &[0xc0, 0xaf][..],
        &[0xc2, 0x41][..],
        &b"[\xff]"[..],
        &b"\"abc\xed\xa0\x80\""[..],
    ] {
        let mut parser = Parser::new(Null);
        parser.input(bad);
        assert_eq!(
            parser.last_error().and_then(Error::syntax),
            Some(SyntaxError::BadUnicodeCodePoint),
            "{bad:x?}"
        );
    }
}

#[test]
fn byte_order_mark_is_not_stripped() {
    assert_eq!(syntax_error_strict(b"\xef\xbb\xbftrue"), SyntaxError::ExpectedToken);
}

#[test]
fn truncated_utf8_pending_at_eof_is_ignored() {
    // The final partial sequence never produced a code point, so the parse
    // ends as if it were absent.
    let mut parser = Parser::new(Recorder::default());
    parser.input(b"true \xf0\x9d");
    assert!(!parser.has_error());
    assert_eq!(parser.eof().unwrap(), vec![Event::Boolean(true)]);
}

#[test]
fn input_after_eof_is_ignored() {
    let mut parser = Parser::new(Null);
    parser.input("1");
    assert!(parser.eof().is_ok());
    parser.input("2");
    assert!(!parser.has_error());
}

#[test]
fn error_reports_the_detection_position() {
    let mut parser = Parser::new(Null);
    parser.input("{\n  \"a\": nope\n}");
    let err = parser.last_error().unwrap();
    assert_eq!(err.syntax(), Some(SyntaxError::UnrecognizedToken));
    // The mismatch surfaces at the `o` of `nope`, column 9 of line 2.
    assert_eq!(err.pos(), Coord { line: 2, column: 9 });
    assert_eq!(parser.input_pos(), err.pos());
}
