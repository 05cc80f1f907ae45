//! Shared test fixtures: an event-recording backend and parse helpers.

use alloc::string::String;
use alloc::vec::Vec;
use core::convert::Infallible;
use core::mem;

use crate::{Backend, Error, Extensions, Parser, SyntaxError};

/// Everything a backend can be told, with payloads, for comparing whole
/// parses against each other.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    Str(String),
    Key(String),
    Int(i64),
    UInt(u64),
    Double(f64),
    Boolean(bool),
    Null,
    BeginArray,
    EndArray,
    BeginObject,
    EndObject,
}

#[derive(Debug, Default)]
pub struct Recorder {
    pub events: Vec<Event>,
}

impl Backend for Recorder {
    type Error = Infallible;
    type Result = Vec<Event>;

    fn string_value(&mut self, s: &str) -> Result<(), Infallible> {
        self.events.push(Event::Str(s.into()));
        Ok(())
    }

    fn key(&mut self, s: &str) -> Result<(), Infallible> {
        self.events.push(Event::Key(s.into()));
        Ok(())
    }

    fn int64_value(&mut self, v: i64) -> Result<(), Infallible> {
        self.events.push(Event::Int(v));
        Ok(())
    }

    fn uint64_value(&mut self, v: u64) -> Result<(), Infallible> {
        self.events.push(Event::UInt(v));
        Ok(())
    }

    fn double_value(&mut self, v: f64) -> Result<(), Infallible> {
        self.events.push(Event::Double(v));
        Ok(())
    }

    fn boolean_value(&mut self, v: bool) -> Result<(), Infallible> {
        self.events.push(Event::Boolean(v));
        Ok(())
    }

    fn null_value(&mut self) -> Result<(), Infallible> {
        self.events.push(Event::Null);
        Ok(())
    }

    fn begin_array(&mut self) -> Result<(), Infallible> {
        self.events.push(Event::BeginArray);
        Ok(())
    }

    fn end_array(&mut self) -> Result<(), Infallible> {
        self.events.push(Event::EndArray);
        Ok(())
    }

    fn begin_object(&mut self) -> Result<(), Infallible> {
        self.events.push(Event::BeginObject);
        Ok(())
    }

    fn end_object(&mut self) -> Result<(), Infallible> {
        self.events.push(Event::EndObject);
        Ok(())
    }

    fn result(&mut self) -> Vec<Event> {
        mem::take(&mut self.events)
    }
}

/// Feeds `src` as one chunk and returns the event sequence or the error.
pub fn record(src: impl AsRef<[u8]>, extensions: Extensions) -> Result<Vec<Event>, Error<Infallible>> {
    let mut parser = Parser::with_extensions(Recorder::default(), extensions);
    parser.input(src);
    parser.eof()
}

/// [`record`] under the strict grammar.
pub fn record_strict(src: impl AsRef<[u8]>) -> Result<Vec<Event>, Error<Infallible>> {
    record(src, Extensions::NONE)
}

/// Asserts that `src` fails, and returns the syntax error it fails with.
#[track_caller]
pub fn syntax_error(src: impl AsRef<[u8]>, extensions: Extensions) -> SyntaxError {
    match record(src, extensions) {
        Err(err) => err.syntax().expect("expected a syntax error"),
        Ok(events) => panic!("expected a parse failure, got {events:?}"),
    }
}

/// [`syntax_error`] under the strict grammar.
#[track_caller]
pub fn syntax_error_strict(src: impl AsRef<[u8]>) -> SyntaxError {
    syntax_error(src, Extensions::NONE)
}
