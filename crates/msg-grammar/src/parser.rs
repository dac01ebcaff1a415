// msg-grammar/src/parser.rs
// ============================================================================
// Module: Message Parser
// Description: Recursive-descent parser for the interpolation grammar.
// Purpose: Turn a message string into a node tree or a positioned error.
// Dependencies: crate::{ast, error}
// ============================================================================

//! ## Overview
//! The parser recognizes plain text, `{name}` arguments, typed arguments
//! (`number`, `date`, `time` with an optional style token), `plural` and
//! `select` constructs with recursively parsed case bodies, and inline tags
//! (`<b>...</b>`, `<br/>`). Apostrophe escaping follows the ICU convention:
//! `'` quotes a literal run when immediately followed by `{`, `}`, `<`, or
//! `#`, and `''` is a literal apostrophe. Nested constructs inside case
//! bodies and tag children need no escaping.
//!
//! Parsing stops at the first malformed construct and reports it with a
//! byte offset. Plain text always parses.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::ast::ArgumentFormat;
use crate::ast::MessageCase;
use crate::ast::MessageNode;
use crate::error::SyntaxError;
use crate::error::SyntaxErrorKind;

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// Parses a message string into its node tree.
///
/// # Errors
///
/// Returns [`SyntaxError`] describing the first malformed construct.
pub fn parse(message: &str) -> Result<Vec<MessageNode>, SyntaxError> {
    let mut parser = Parser::new(message);
    parser.parse_sequence(Scope::Root)
}

// ============================================================================
// SECTION: Parser State
// ============================================================================

/// Enclosing context of the sequence currently being parsed.
#[derive(Clone, Copy)]
enum Scope<'a> {
    /// Top level of the message.
    Root,
    /// Inside a plural/select case body; a bare `}` ends the sequence.
    CaseBody,
    /// Inside tag children; a `</` marker ends the sequence.
    TagChildren(&'a str),
}

/// Cursor over the message source.
struct Parser<'a> {
    /// Full message source.
    input: &'a str,
    /// Current byte offset into `input`.
    pos: usize,
}

impl<'a> Parser<'a> {
    /// Creates a parser positioned at the start of `input`.
    const fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
        }
    }

    /// Returns the unparsed remainder of the input.
    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    /// Returns the next character without consuming it.
    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Returns the character after the next one without consuming either.
    fn peek_second(&self) -> Option<char> {
        let mut chars = self.rest().chars();
        chars.next();
        chars.next()
    }

    /// Consumes and returns the next character.
    fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    /// Consumes the next character when it equals `expected`.
    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.pos += expected.len_utf8();
            true
        } else {
            false
        }
    }

    /// Skips a run of whitespace characters.
    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek() {
            if ch.is_whitespace() {
                self.pos += ch.len_utf8();
            } else {
                break;
            }
        }
    }

    /// Builds an error anchored at the current position.
    const fn error(&self, kind: SyntaxErrorKind) -> SyntaxError {
        SyntaxError::new(kind, self.pos)
    }

    // ------------------------------------------------------------------
    // Sequences
    // ------------------------------------------------------------------

    /// Parses a node sequence until the scope's terminator.
    ///
    /// Terminators are left unconsumed for the caller: a case body's `}` and
    /// a tag's `</` marker are handled by the construct that opened them.
    fn parse_sequence(&mut self, scope: Scope<'_>) -> Result<Vec<MessageNode>, SyntaxError> {
        let mut nodes = Vec::new();
        loop {
            match self.peek() {
                None => {
                    return match scope {
                        Scope::Root => Ok(nodes),
                        Scope::CaseBody => Err(self.error(SyntaxErrorKind::UnclosedCaseBody)),
                        Scope::TagChildren(name) => Err(self.error(SyntaxErrorKind::UnclosedTag {
                            name: name.to_string(),
                        })),
                    };
                }
                Some('}') => {
                    return match scope {
                        Scope::CaseBody => Ok(nodes),
                        Scope::Root | Scope::TagChildren(_) => {
                            Err(self.error(SyntaxErrorKind::UnmatchedBrace))
                        }
                    };
                }
                Some('{') => nodes.push(self.parse_argument()?),
                Some('<') if self.peek_second() == Some('/') => {
                    return match scope {
                        Scope::TagChildren(_) => Ok(nodes),
                        Scope::Root | Scope::CaseBody => {
                            Err(self.error(SyntaxErrorKind::UnexpectedClosingTag))
                        }
                    };
                }
                Some('<') if self.peek_second().is_some_and(|ch| ch.is_ascii_alphabetic()) => {
                    nodes.push(self.parse_tag()?);
                }
                Some(_) => {
                    let text = self.parse_text()?;
                    nodes.push(MessageNode::Text(text));
                }
            }
        }
    }

    // ------------------------------------------------------------------
    // Text
    // ------------------------------------------------------------------

    /// Parses a literal text run, resolving apostrophe escapes.
    ///
    /// Stops before `{`, `}`, and any `<` that begins a tag or closing
    /// marker; a `<` followed by anything else is literal text.
    fn parse_text(&mut self) -> Result<String, SyntaxError> {
        let mut text = String::new();
        while let Some(ch) = self.peek() {
            match ch {
                '{' | '}' => break,
                '<' => {
                    let next = self.peek_second();
                    if next == Some('/') || next.is_some_and(|c| c.is_ascii_alphabetic()) {
                        break;
                    }
                    text.push('<');
                    self.pos += 1;
                }
                '\'' => self.consume_apostrophe(&mut text)?,
                _ => {
                    text.push(ch);
                    self.pos += ch.len_utf8();
                }
            }
        }
        Ok(text)
    }

    /// Resolves an apostrophe: `''` is a literal `'`; an apostrophe before a
    /// syntax character opens a quoted literal run; anything else is text.
    fn consume_apostrophe(&mut self, text: &mut String) -> Result<(), SyntaxError> {
        let quote_offset = self.pos;
        self.pos += 1;
        match self.peek() {
            Some('\'') => {
                text.push('\'');
                self.pos += 1;
                Ok(())
            }
            Some('{' | '}' | '<' | '#') => loop {
                match self.bump() {
                    None => {
                        return Err(SyntaxError::new(SyntaxErrorKind::UnterminatedQuote, quote_offset));
                    }
                    Some('\'') => {
                        if self.peek() == Some('\'') {
                            text.push('\'');
                            self.pos += 1;
                        } else {
                            return Ok(());
                        }
                    }
                    Some(other) => text.push(other),
                }
            },
            _ => {
                text.push('\'');
                Ok(())
            }
        }
    }

    // ------------------------------------------------------------------
    // Arguments
    // ------------------------------------------------------------------

    /// Parses an interpolation opened by `{`.
    fn parse_argument(&mut self) -> Result<MessageNode, SyntaxError> {
        let open_offset = self.pos;
        self.pos += 1;
        if self.peek() == Some('{') {
            return Err(SyntaxError::new(SyntaxErrorKind::DoubleBrace, open_offset));
        }
        self.skip_whitespace();
        let name = self.parse_identifier();
        if name.is_empty() {
            return Err(self.error(SyntaxErrorKind::EmptyArgumentName));
        }
        self.skip_whitespace();
        match self.peek() {
            Some('}') => {
                self.pos += 1;
                Ok(MessageNode::Argument {
                    name,
                })
            }
            Some(',') => {
                self.pos += 1;
                self.skip_whitespace();
                self.parse_argument_tail(name, open_offset)
            }
            None => Err(SyntaxError::new(SyntaxErrorKind::UnclosedArgument, open_offset)),
            Some(_) => Err(self.error(SyntaxErrorKind::ExpectedCommaOrBrace)),
        }
    }

    /// Parses the portion of an argument after `{name,`.
    fn parse_argument_tail(
        &mut self,
        name: String,
        open_offset: usize,
    ) -> Result<MessageNode, SyntaxError> {
        let keyword_offset = self.pos;
        let keyword = self.parse_identifier();
        self.skip_whitespace();
        match keyword.as_str() {
            "number" => self.finish_typed_argument(name, ArgumentFormat::Number, open_offset),
            "date" => self.finish_typed_argument(name, ArgumentFormat::Date, open_offset),
            "time" => self.finish_typed_argument(name, ArgumentFormat::Time, open_offset),
            "plural" => self.finish_branching_argument(name, true, open_offset),
            "select" => self.finish_branching_argument(name, false, open_offset),
            _ => Err(SyntaxError::new(
                SyntaxErrorKind::UnknownArgumentFormat {
                    found: keyword,
                },
                keyword_offset,
            )),
        }
    }

    /// Finishes a `number`/`date`/`time` argument after its keyword.
    fn finish_typed_argument(
        &mut self,
        name: String,
        format: ArgumentFormat,
        open_offset: usize,
    ) -> Result<MessageNode, SyntaxError> {
        match self.peek() {
            Some('}') => {
                self.pos += 1;
                Ok(MessageNode::TypedArgument {
                    name,
                    format,
                    style: None,
                })
            }
            Some(',') => {
                self.pos += 1;
                let style = self.parse_style()?;
                Ok(MessageNode::TypedArgument {
                    name,
                    format,
                    style,
                })
            }
            None => Err(SyntaxError::new(SyntaxErrorKind::UnclosedArgument, open_offset)),
            Some(_) => Err(self.error(SyntaxErrorKind::ExpectedCommaOrBrace)),
        }
    }

    /// Parses a raw style token up to and including the closing `}`.
    fn parse_style(&mut self) -> Result<Option<String>, SyntaxError> {
        let mut style = String::new();
        while let Some(ch) = self.peek() {
            if ch == '}' {
                break;
            }
            if ch == '{' {
                return Err(self.error(SyntaxErrorKind::ExpectedCommaOrBrace));
            }
            style.push(ch);
            self.pos += ch.len_utf8();
        }
        if !self.eat('}') {
            return Err(self.error(SyntaxErrorKind::UnclosedArgument));
        }
        let style = style.trim();
        if style.is_empty() {
            Ok(None)
        } else {
            Ok(Some(style.to_string()))
        }
    }

    // ------------------------------------------------------------------
    // Plural / Select
    // ------------------------------------------------------------------

    /// Finishes a `plural` or `select` argument after its keyword.
    fn finish_branching_argument(
        &mut self,
        name: String,
        is_plural: bool,
        open_offset: usize,
    ) -> Result<MessageNode, SyntaxError> {
        if !self.eat(',') {
            return Err(self.error(SyntaxErrorKind::ExpectedCaseList));
        }
        self.skip_whitespace();
        let mut offset_value = None;
        if is_plural && self.rest().starts_with("offset:") {
            self.pos += "offset:".len();
            offset_value = Some(self.parse_offset_digits()?);
            self.skip_whitespace();
        }
        let cases = self.parse_cases(is_plural, open_offset)?;
        if !cases.iter().any(|case| case.label == "other") {
            return Err(SyntaxError::new(
                SyntaxErrorKind::MissingOtherCase {
                    construct: if is_plural { "plural" } else { "select" },
                },
                open_offset,
            ));
        }
        if is_plural {
            Ok(MessageNode::Plural {
                variable: name,
                offset: offset_value,
                cases,
            })
        } else {
            Ok(MessageNode::Select {
                variable: name,
                cases,
            })
        }
    }

    /// Parses the digit run of an `offset:N` marker.
    fn parse_offset_digits(&mut self) -> Result<u64, SyntaxError> {
        let digits_start = self.pos;
        while self.peek().is_some_and(|ch| ch.is_ascii_digit()) {
            self.pos += 1;
        }
        if self.pos == digits_start {
            return Err(self.error(SyntaxErrorKind::InvalidOffset));
        }
        self.input[digits_start..self.pos]
            .parse::<u64>()
            .map_err(|_| SyntaxError::new(SyntaxErrorKind::InvalidOffset, digits_start))
    }

    /// Parses case branches up to and including the construct's closing `}`.
    fn parse_cases(
        &mut self,
        is_plural: bool,
        open_offset: usize,
    ) -> Result<Vec<MessageCase>, SyntaxError> {
        let mut cases = Vec::new();
        loop {
            self.skip_whitespace();
            match self.peek() {
                None => {
                    return Err(SyntaxError::new(SyntaxErrorKind::UnclosedArgument, open_offset));
                }
                Some('}') => {
                    self.pos += 1;
                    return Ok(cases);
                }
                Some(_) => {
                    let label = self.parse_case_label(is_plural)?;
                    self.skip_whitespace();
                    if !self.eat('{') {
                        return Err(self.error(SyntaxErrorKind::ExpectedCaseBody));
                    }
                    let body = self.parse_sequence(Scope::CaseBody)?;
                    if !self.eat('}') {
                        return Err(self.error(SyntaxErrorKind::UnclosedCaseBody));
                    }
                    cases.push(MessageCase {
                        label,
                        body,
                    });
                }
            }
        }
    }

    /// Parses a case label: an identifier, or `=N` for plural exact matches.
    fn parse_case_label(&mut self, is_plural: bool) -> Result<String, SyntaxError> {
        let label_offset = self.pos;
        if is_plural && self.eat('=') {
            let digits_start = self.pos;
            while self.peek().is_some_and(|ch| ch.is_ascii_digit()) {
                self.pos += 1;
            }
            if self.pos == digits_start {
                return Err(SyntaxError::new(SyntaxErrorKind::EmptyCaseLabel, label_offset));
            }
            return Ok(format!("={}", &self.input[digits_start..self.pos]));
        }
        let label = self.parse_identifier();
        if label.is_empty() {
            return Err(SyntaxError::new(SyntaxErrorKind::EmptyCaseLabel, label_offset));
        }
        Ok(label)
    }

    // ------------------------------------------------------------------
    // Tags
    // ------------------------------------------------------------------

    /// Parses a tag opened by `<` plus an ASCII letter.
    fn parse_tag(&mut self) -> Result<MessageNode, SyntaxError> {
        self.pos += 1;
        let name = self.parse_tag_name();
        self.skip_whitespace();
        if self.eat('/') {
            if !self.eat('>') {
                return Err(self.error(SyntaxErrorKind::MalformedTag));
            }
            return Ok(MessageNode::Tag {
                name,
                children: Vec::new(),
                self_closing: true,
            });
        }
        if !self.eat('>') {
            return Err(self.error(SyntaxErrorKind::MalformedTag));
        }
        let children = self.parse_sequence(Scope::TagChildren(&name))?;
        self.pos += 2;
        let close_offset = self.pos;
        let close_name = self.parse_tag_name();
        if close_name.is_empty() {
            return Err(SyntaxError::new(SyntaxErrorKind::MalformedTag, close_offset));
        }
        self.skip_whitespace();
        if !self.eat('>') {
            return Err(self.error(SyntaxErrorKind::MalformedTag));
        }
        if close_name != name {
            return Err(SyntaxError::new(
                SyntaxErrorKind::MismatchedClosingTag {
                    expected: name,
                    found: close_name,
                },
                close_offset,
            ));
        }
        Ok(MessageNode::Tag {
            name,
            children,
            self_closing: false,
        })
    }

    // ------------------------------------------------------------------
    // Lexical helpers
    // ------------------------------------------------------------------

    /// Consumes an identifier run of ASCII alphanumerics and `_`.
    fn parse_identifier(&mut self) -> String {
        let start = self.pos;
        while let Some(ch) = self.peek() {
            if ch.is_ascii_alphanumeric() || ch == '_' {
                self.pos += 1;
            } else {
                break;
            }
        }
        self.input[start..self.pos].to_string()
    }

    /// Consumes a tag name run of ASCII alphanumerics, `_`, and `-`.
    fn parse_tag_name(&mut self) -> String {
        let start = self.pos;
        while let Some(ch) = self.peek() {
            if ch.is_ascii_alphanumeric() || ch == '_' || ch == '-' {
                self.pos += 1;
            } else {
                break;
            }
        }
        self.input[start..self.pos].to_string()
    }
}
