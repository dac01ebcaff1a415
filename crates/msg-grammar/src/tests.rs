// msg-grammar/src/tests.rs
// ============================================================================
// Module: Message Grammar Unit Tests
// Description: In-crate tests for lexical edge cases of the parser.
// Purpose: Cover apostrophe escaping and literal-text boundaries.
// ============================================================================

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only assertions are permitted."
)]

use crate::MessageNode;
use crate::SyntaxErrorKind;
use crate::parse;

/// Collapses a parse of pure text into its literal content.
fn parse_text(message: &str) -> String {
    match parse(message).unwrap().as_slice() {
        [] => String::new(),
        [MessageNode::Text(text)] => text.clone(),
        other => panic!("expected a single text node, got {other:?}"),
    }
}

#[test]
fn empty_message_parses_to_no_nodes() {
    assert!(parse("").unwrap().is_empty());
}

#[test]
fn double_apostrophe_is_literal() {
    assert_eq!(parse_text("It''s fine"), "It's fine");
}

#[test]
fn lone_apostrophe_is_literal() {
    assert_eq!(parse_text("don't"), "don't");
}

#[test]
fn quoted_brace_is_literal() {
    assert_eq!(parse_text("literal '{' brace"), "literal { brace");
}

#[test]
fn quoted_run_swallows_interpolation() {
    assert_eq!(parse_text("'{count}' items"), "{count} items");
}

#[test]
fn quoted_run_with_doubled_apostrophe() {
    assert_eq!(parse_text("'{it''s}'"), "{it's}");
}

#[test]
fn unterminated_quote_is_an_error() {
    let err = parse("broken '{quote").unwrap_err();
    assert_eq!(err.kind, SyntaxErrorKind::UnterminatedQuote);
    assert_eq!(err.offset, 7);
}

#[test]
fn lone_angle_bracket_is_literal() {
    assert_eq!(parse_text("a < b"), "a < b");
}

#[test]
fn angle_bracket_before_digit_is_literal() {
    assert_eq!(parse_text("score <3"), "score <3");
}

#[test]
fn hash_is_plain_text() {
    assert_eq!(parse_text("#1 fan"), "#1 fan");
}

#[test]
fn quoted_hash_is_literal() {
    assert_eq!(parse_text("'#' one"), "# one");
}
