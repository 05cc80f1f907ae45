use alloc::vec;

use rstest::rstest;

use super::utils::{record, syntax_error, syntax_error_strict, Event, Recorder};
use crate::{Coord, Extensions, Parser, SyntaxError};

#[rstest]
#[case("# leading\ntrue", Extensions::BASH_COMMENTS)]
#[case("true # trailing", Extensions::BASH_COMMENTS)]
#[case("// leading\ntrue", Extensions::SINGLE_LINE_COMMENTS)]
#[case("true // trailing", Extensions::SINGLE_LINE_COMMENTS)]
#[case("/* leading */ true", Extensions::MULTI_LINE_COMMENTS)]
#[case("true /* trailing */", Extensions::MULTI_LINE_COMMENTS)]
#[case("/*\n multi \n line \n*/true", Extensions::MULTI_LINE_COMMENTS)]
#[case("/* stars *** in body */true", Extensions::MULTI_LINE_COMMENTS)]
#[case("/**/true", Extensions::MULTI_LINE_COMMENTS)]
// End of input inside a trailing comment is accepted.
#[case("true // unterminated", Extensions::SINGLE_LINE_COMMENTS)]
#[case("true /* unterminated", Extensions::MULTI_LINE_COMMENTS)]
#[case("true #", Extensions::BASH_COMMENTS)]
fn comments_are_whitespace(#[case] src: &str, #[case] extensions: Extensions) {
    assert_eq!(record(src, extensions).unwrap(), vec![Event::Boolean(true)]);
}

#[test]
fn comments_between_structural_tokens() {
    let extensions = Extensions::SINGLE_LINE_COMMENTS | Extensions::MULTI_LINE_COMMENTS;
    let src = "[ 1 , /* here */ 2 // there\n, 3 ]";
    assert_eq!(
        record(src, extensions).unwrap(),
        vec![
            Event::BeginArray,
            Event::UInt(1),
            Event::UInt(2),
            Event::UInt(3),
            Event::EndArray
        ]
    );
}

#[rstest]
// Without the extensions, a comment opener is just an illegal value start.
#[case("# nope\ntrue", Extensions::NONE)]
#[case("// nope\ntrue", Extensions::NONE)]
#[case("/* nope */true", Extensions::NONE)]
// `/` followed by neither `/` nor `*` under the comment extensions.
#[case("/x", Extensions::SINGLE_LINE_COMMENTS)]
#[case("/x", Extensions::MULTI_LINE_COMMENTS)]
// `//` needs its own flag even when `/*` is enabled, and vice versa.
#[case("// nope\ntrue", Extensions::MULTI_LINE_COMMENTS)]
#[case("/* nope */true", Extensions::SINGLE_LINE_COMMENTS)]
fn comment_openers_rejected(#[case] src: &str, #[case] extensions: Extensions) {
    assert_eq!(syntax_error(src, extensions), SyntaxError::ExpectedToken);
}

#[test]
fn crlf_counts_as_one_line_break() {
    // The error lands on the first character of line 2 in all three cases.
    for src in ["[1,\nx]", "[1,\r\nx]", "[1,\rx]"] {
        let err = record(src, Extensions::NONE).unwrap_err();
        assert_eq!(err.syntax(), Some(SyntaxError::ExpectedToken), "{src:?}");
        assert_eq!(err.pos(), Coord { line: 2, column: 1 }, "{src:?}");
    }
}

#[test]
fn line_breaks_inside_multi_line_comments_count() {
    let err = record("/* 1\n 2\r\n 3 */ x", Extensions::MULTI_LINE_COMMENTS).unwrap_err();
    assert_eq!(err.syntax(), Some(SyntaxError::ExpectedToken));
    assert_eq!(err.pos().line, 3);
}

#[test]
fn token_position_and_cursor_position_differ() {
    let mut parser = Parser::new(Recorder::default());
    parser.input("\n\n1");
    // The cursor is past the digit; the token began at it.
    assert_eq!(parser.input_pos(), Coord { line: 3, column: 2 });
    assert_eq!(parser.pos(), Coord { line: 3, column: 1 });
    assert!(parser.eof().is_ok());
}

#[test]
fn error_positions_read_naturally() {
    let err = syntax_error_strict(r#"{"a" 1}"#);
    assert_eq!(err, SyntaxError::ExpectedColon);
    let err = record(r#"{"a" 1}"#, Extensions::NONE).unwrap_err();
    assert_eq!(alloc::string::ToString::to_string(&err), "expected colon at 1:6");
}
