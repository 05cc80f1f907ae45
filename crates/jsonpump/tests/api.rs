//! End-to-end checks through the public API only.

use jsonpump::{
    emit, parse, parse_with_extensions, Backend, Coord, Dom, Extensions, Null, Parser,
    SyntaxError, Value,
};

#[test]
fn parse_builds_a_value() {
    let value = parse(br#"{"name": "pump", "tags": [1, -2, 3.5], "ok": true}"#).unwrap();
    let members = value.as_object().unwrap();
    assert_eq!(members["name"].as_str(), Some("pump"));
    assert_eq!(
        members["tags"],
        Value::Array(vec![Value::UInt(1), Value::Int(-2), Value::Double(3.5)])
    );
    assert_eq!(members["ok"], Value::Boolean(true));
}

#[test]
fn chunked_input_through_the_parser() {
    let mut parser = Parser::new(Dom::new());
    for chunk in ["{\"a\": [tr", "ue, nu", "ll], \"b\"", ": \"x\"}"] {
        parser.input(chunk);
    }
    let value = parser.eof().unwrap().unwrap();
    assert_eq!(
        value.as_object().unwrap()["a"],
        Value::Array(vec![Value::Boolean(true), Value::Null])
    );
}

#[test]
fn extensions_combine() {
    let value = parse_with_extensions(
        b"// header\n{'a': +1, /* gap */ 'b': [2,],}\n",
        Extensions::SINGLE_LINE_COMMENTS
            | Extensions::MULTI_LINE_COMMENTS
            | Extensions::SINGLE_QUOTE_STRING
            | Extensions::LEADING_PLUS
            | Extensions::ARRAY_TRAILING_COMMA
            | Extensions::OBJECT_TRAILING_COMMA,
    )
    .unwrap();
    let members = value.as_object().unwrap();
    assert_eq!(members["a"], Value::UInt(1));
    assert_eq!(members["b"], Value::Array(vec![Value::UInt(2)]));
}

#[test]
fn validation_only_with_the_null_backend() {
    let mut parser = Parser::new(Null);
    parser.input(b"[{\"deep\": [null, \"\xf0\x9d\x84\x9e\", 1e-3]}]");
    assert!(parser.eof().is_ok());
    assert!(!parser.has_error());
}

#[test]
fn errors_carry_position_and_kind() {
    let err = parse(b"{\n  \"a\": 1,\n}").unwrap_err();
    assert_eq!(err.syntax(), Some(SyntaxError::ExpectedString));
    assert_eq!(err.pos(), Coord { line: 3, column: 1 });
    assert_eq!(err.to_string(), "expected string at 3:1");
}

#[test]
fn backend_results_pass_through_eof() {
    struct DepthGauge {
        depth: usize,
        max: usize,
    }

    impl Backend for DepthGauge {
        type Error = core::convert::Infallible;
        type Result = usize;

        fn begin_array(&mut self) -> Result<(), Self::Error> {
            self.depth += 1;
            self.max = self.max.max(self.depth);
            Ok(())
        }
        fn end_array(&mut self) -> Result<(), Self::Error> {
            self.depth -= 1;
            Ok(())
        }
        fn result(&mut self) -> usize {
            self.max
        }
    }

    let mut parser = Parser::new(DepthGauge { depth: 0, max: 0 });
    parser.input("[[[]],[[[1]]]]");
    assert_eq!(parser.eof().unwrap(), 3);
}

#[test]
fn emit_then_reparse() {
    let original = parse(br#"{"xs": [1, 2.5, "three", null], "flag": false}"#).unwrap();
    let mut text = String::new();
    emit(&mut text, &original).unwrap();
    let reparsed = parse(text.as_bytes()).unwrap();
    assert_eq!(original, reparsed);
}
