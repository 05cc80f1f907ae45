#![no_main]

use jsonpump::{Backend, Error, Extensions, Parser};
use libfuzzer_sys::fuzz_target;

/// Records every event with its payload so two parses can be compared.
#[derive(Debug, Default, PartialEq)]
struct Tape {
    events: Vec<String>,
}

impl Backend for Tape {
    type Error = core::convert::Infallible;
    type Result = Vec<String>;

    fn string_value(&mut self, s: &str) -> Result<(), Self::Error> {
        self.events.push(format!("str:{s}"));
        Ok(())
    }
    fn key(&mut self, s: &str) -> Result<(), Self::Error> {
        self.events.push(format!("key:{s}"));
        Ok(())
    }
    fn int64_value(&mut self, v: i64) -> Result<(), Self::Error> {
        self.events.push(format!("i64:{v}"));
        Ok(())
    }
    fn uint64_value(&mut self, v: u64) -> Result<(), Self::Error> {
        self.events.push(format!("u64:{v}"));
        Ok(())
    }
    fn double_value(&mut self, v: f64) -> Result<(), Self::Error> {
        self.events.push(format!("f64:{v:?}"));
        Ok(())
    }
    fn boolean_value(&mut self, v: bool) -> Result<(), Self::Error> {
        self.events.push(format!("bool:{v}"));
        Ok(())
    }
    fn null_value(&mut self) -> Result<(), Self::Error> {
        self.events.push("null".into());
        Ok(())
    }
    fn begin_array(&mut self) -> Result<(), Self::Error> {
        self.events.push("[".into());
        Ok(())
    }
    fn end_array(&mut self) -> Result<(), Self::Error> {
        self.events.push("]".into());
        Ok(())
    }
    fn begin_object(&mut self) -> Result<(), Self::Error> {
        self.events.push("{".into());
        Ok(())
    }
    fn end_object(&mut self) -> Result<(), Self::Error> {
        self.events.push("}".into());
        Ok(())
    }
    fn result(&mut self) -> Vec<String> {
        std::mem::take(&mut self.events)
    }
}

fn extensions_from(flags: u8) -> Extensions {
    let table = [
        Extensions::BASH_COMMENTS,
        Extensions::SINGLE_LINE_COMMENTS,
        Extensions::MULTI_LINE_COMMENTS,
        Extensions::ARRAY_TRAILING_COMMA,
        Extensions::OBJECT_TRAILING_COMMA,
        Extensions::SINGLE_QUOTE_STRING,
        Extensions::LEADING_PLUS,
    ];
    let mut extensions = Extensions::NONE;
    for (bit, flag) in table.into_iter().enumerate() {
        if flags & (1 << bit) != 0 {
            extensions |= flag;
        }
    }
    extensions
}

fn run<'a>(
    chunks: impl Iterator<Item = &'a [u8]>,
    extensions: Extensions,
) -> Result<Vec<String>, Error<core::convert::Infallible>> {
    let mut parser = Parser::with_extensions(Tape::default(), extensions);
    for chunk in chunks {
        parser.input(chunk);
    }
    parser.eof()
}

// Two properties on completely arbitrary bytes: the parser never panics, and
// splitting the input into chunks cannot change the outcome.
fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    let extensions = extensions_from(data[0]);
    let stride = usize::from(data[1]) + 1;
    let payload = &data[2..];

    let whole = run(core::iter::once(payload), extensions);
    let chunked = run(payload.chunks(stride), extensions);
    assert_eq!(whole, chunked);
});
