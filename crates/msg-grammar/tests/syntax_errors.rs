// msg-grammar/tests/syntax_errors.rs
// ============================================================================
// Module: Grammar Error Tests
// Description: Failure-path tests for every syntax error class.
// Purpose: Ensure malformed constructs fail with the right kind and offset.
// Dependencies: msg-grammar
// ============================================================================
//! ## Overview
//! Validates that the parser rejects malformed interpolation with a
//! descriptive, positioned error rather than guessing at intent.

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only assertions are permitted."
)]

use msg_grammar::SyntaxErrorKind;
use msg_grammar::parse;

/// Parses a message expected to fail and returns the error kind.
fn parse_err(message: &str) -> SyntaxErrorKind {
    parse(message).unwrap_err().kind
}

#[test]
fn unmatched_closing_brace() {
    assert_eq!(parse_err("oops } here"), SyntaxErrorKind::UnmatchedBrace);
}

#[test]
fn double_brace_is_rejected() {
    assert_eq!(parse_err("{{count}}"), SyntaxErrorKind::DoubleBrace);
    let err = parse("pre {{x}}").unwrap_err();
    assert_eq!(err.kind, SyntaxErrorKind::DoubleBrace);
    assert_eq!(err.offset, 4);
}

#[test]
fn empty_argument_name() {
    assert_eq!(parse_err("{}"), SyntaxErrorKind::EmptyArgumentName);
    assert_eq!(parse_err("{ , number}"), SyntaxErrorKind::EmptyArgumentName);
}

#[test]
fn junk_after_argument_name() {
    assert_eq!(parse_err("{a b}"), SyntaxErrorKind::ExpectedCommaOrBrace);
}

#[test]
fn unclosed_argument_at_end_of_input() {
    let err = parse("tail {name").unwrap_err();
    assert_eq!(err.kind, SyntaxErrorKind::UnclosedArgument);
    assert_eq!(err.offset, 5);
}

#[test]
fn unknown_argument_type() {
    assert_eq!(
        parse_err("{n, ordinal}"),
        SyntaxErrorKind::UnknownArgumentFormat {
            found: "ordinal".to_string(),
        }
    );
}

#[test]
fn plural_missing_case_list() {
    assert_eq!(parse_err("{n, plural}"), SyntaxErrorKind::ExpectedCaseList);
}

#[test]
fn plural_missing_other_case() {
    assert_eq!(
        parse_err("{n, plural, one {# item}}"),
        SyntaxErrorKind::MissingOtherCase {
            construct: "plural",
        }
    );
}

#[test]
fn select_missing_other_case() {
    assert_eq!(
        parse_err("{side, select, home {Home}}"),
        SyntaxErrorKind::MissingOtherCase {
            construct: "select",
        }
    );
}

#[test]
fn case_label_without_body() {
    assert_eq!(
        parse_err("{n, plural, one # other {x}}"),
        SyntaxErrorKind::ExpectedCaseBody
    );
}

#[test]
fn empty_exact_case_label() {
    assert_eq!(
        parse_err("{n, plural, = {x} other {y}}"),
        SyntaxErrorKind::EmptyCaseLabel
    );
}

#[test]
fn unclosed_case_body() {
    assert_eq!(
        parse_err("{n, plural, other {dangling"),
        SyntaxErrorKind::UnclosedCaseBody
    );
}

#[test]
fn invalid_plural_offset() {
    assert_eq!(
        parse_err("{n, plural, offset: one {x} other {y}}"),
        SyntaxErrorKind::InvalidOffset
    );
}

#[test]
fn unclosed_tag() {
    assert_eq!(
        parse_err("<b>never closed"),
        SyntaxErrorKind::UnclosedTag {
            name: "b".to_string(),
        }
    );
}

#[test]
fn mismatched_closing_tag() {
    assert_eq!(
        parse_err("<b>bold</i>"),
        SyntaxErrorKind::MismatchedClosingTag {
            expected: "b".to_string(),
            found: "i".to_string(),
        }
    );
}

#[test]
fn closing_tag_without_open() {
    assert_eq!(parse_err("text </b>"), SyntaxErrorKind::UnexpectedClosingTag);
}

#[test]
fn malformed_self_closing_tag() {
    assert_eq!(parse_err("<br/ >"), SyntaxErrorKind::MalformedTag);
}

#[test]
fn brace_inside_tag_children_is_unmatched() {
    assert_eq!(parse_err("<b>}</b>"), SyntaxErrorKind::UnmatchedBrace);
}

#[test]
fn error_offsets_point_at_the_construct() {
    let err = parse("ok {n, plural, one {x}}").unwrap_err();
    assert_eq!(err.kind, SyntaxErrorKind::MissingOtherCase {
        construct: "plural",
    });
    assert_eq!(err.offset, 3);
}
