// msg-grammar/src/error.rs
// ============================================================================
// Module: Message Syntax Errors
// Description: Error types reported by the message parser.
// Purpose: Describe the first malformed construct with a stable offset.
// Dependencies: thiserror
// ============================================================================

//! ## Overview
//! Parsing fails on the first malformed construct. The error carries the
//! byte offset where the construct begins so tooling can point at the exact
//! position inside the message string.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

// ============================================================================
// SECTION: Error Types
// ============================================================================

/// Classification of a message syntax failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxErrorKind {
    /// A `}` appeared with no matching opening brace.
    #[error("unmatched '}}'")]
    UnmatchedBrace,
    /// A `{{` double brace opened an interpolation.
    #[error("'{{{{' is not a valid interpolation")]
    DoubleBrace,
    /// An opening brace was not followed by an argument name.
    #[error("expected an argument name after '{{'")]
    EmptyArgumentName,
    /// An argument name was followed by something other than `,` or `}`.
    #[error("expected ',' or '}}' after the argument name")]
    ExpectedCommaOrBrace,
    /// The closing `}` of an argument was never found.
    #[error("expected '}}' to close the argument")]
    UnclosedArgument,
    /// The argument type keyword was not one of the supported set.
    #[error("unknown argument type '{found}' (expected number, date, time, plural, or select)")]
    UnknownArgumentFormat {
        /// The keyword encountered in the message source.
        found: String,
    },
    /// A plural or select keyword was not followed by a case list.
    #[error("expected ',' and a case list after the keyword")]
    ExpectedCaseList,
    /// A case label was empty or malformed.
    #[error("expected a case label")]
    EmptyCaseLabel,
    /// A case label was not followed by a braced body.
    #[error("expected '{{' to open the case body")]
    ExpectedCaseBody,
    /// A case body was never closed before the end of the message.
    #[error("expected '}}' to close the case body")]
    UnclosedCaseBody,
    /// A plural or select construct lacked the mandatory `other` case.
    #[error("{construct} argument is missing the mandatory 'other' case")]
    MissingOtherCase {
        /// Construct keyword, `plural` or `select`.
        construct: &'static str,
    },
    /// An `offset:` marker was not followed by digits.
    #[error("expected a number after 'offset:'")]
    InvalidOffset,
    /// A quoted literal run opened by `'` was never closed.
    #[error("unterminated quoted literal")]
    UnterminatedQuote,
    /// A tag opening or closing marker was malformed.
    #[error("malformed tag")]
    MalformedTag,
    /// An opened tag was never closed before the end of its scope.
    #[error("expected '</{name}>' to close the tag")]
    UnclosedTag {
        /// Name of the unclosed tag.
        name: String,
    },
    /// A closing tag did not match the innermost open tag.
    #[error("expected '</{expected}>' but found '</{found}>'")]
    MismatchedClosingTag {
        /// Name of the tag awaiting closure.
        expected: String,
        /// Name found in the closing marker.
        found: String,
    },
    /// A closing tag appeared with no tag open.
    #[error("closing tag with no open tag")]
    UnexpectedClosingTag,
}

/// A message syntax error with the byte offset of the offending construct.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} at byte {offset}")]
pub struct SyntaxError {
    /// What went wrong.
    pub kind: SyntaxErrorKind,
    /// Byte offset into the message where the malformed construct begins.
    pub offset: usize,
}

impl SyntaxError {
    /// Constructs a syntax error at the given offset.
    #[must_use]
    pub const fn new(kind: SyntaxErrorKind, offset: usize) -> Self {
        Self {
            kind,
            offset,
        }
    }
}
