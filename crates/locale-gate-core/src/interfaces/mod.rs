// locale-gate-core/src/interfaces/mod.rs
// ============================================================================
// Module: Locale Gate Interfaces
// Description: Capability seams the validation runtime depends on.
// Purpose: Keep the comparator testable against hand-built syntax trees.
// Dependencies: msg-grammar
// ============================================================================

//! ## Overview
//! The message grammar is an external capability: the runtime only consumes
//! parse results and node shapes. Routing it through [`MessageParser`] lets
//! tests drive the comparator and extractor with a fake parser returning
//! hand-built trees, without invoking a real grammar engine.

// ============================================================================
// SECTION: Imports
// ============================================================================

use msg_grammar::MessageNode;
use msg_grammar::SyntaxError;

// ============================================================================
// SECTION: Message Parser
// ============================================================================

/// Message-grammar parsing capability consumed by the runtime.
pub trait MessageParser {
    /// Parses one message string into its node tree.
    ///
    /// # Errors
    ///
    /// Returns [`SyntaxError`] describing the first malformed construct.
    fn parse_message(&self, message: &str) -> Result<Vec<MessageNode>, SyntaxError>;
}

/// Production parser backed by the `msg-grammar` engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct GrammarParser;

impl GrammarParser {
    /// Creates the production parser.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl MessageParser for GrammarParser {
    fn parse_message(&self, message: &str) -> Result<Vec<MessageNode>, SyntaxError> {
        msg_grammar::parse(message)
    }
}
