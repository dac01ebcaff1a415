// msg-grammar/src/ast.rs
// ============================================================================
// Module: Message Syntax Tree
// Description: Node types produced by parsing an interpolated message.
// Purpose: Give consumers a closed, serializable shape to walk.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! A parsed message is an ordered sequence of [`MessageNode`] values. Case
//! bodies and tag children are themselves full sub-messages, so the tree
//! nests arbitrarily. Consumers walk the tree structurally; no node carries
//! source offsets.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Node Types
// ============================================================================

/// Formatting family of a typed argument such as `{when, date}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArgumentFormat {
    /// `{name, number}` formatting.
    Number,
    /// `{name, date}` formatting.
    Date,
    /// `{name, time}` formatting.
    Time,
}

impl ArgumentFormat {
    /// Returns the keyword spelling used in message source.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Number => "number",
            Self::Date => "date",
            Self::Time => "time",
        }
    }
}

/// One labelled branch of a plural or select construct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageCase {
    /// Case label (`one`, `other`, `=3`, or a select case name).
    pub label: String,
    /// Sub-message forming the case body.
    pub body: Vec<MessageNode>,
}

/// A single node of a parsed message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageNode {
    /// Literal text run.
    Text(String),
    /// Simple named argument `{name}`.
    Argument {
        /// Argument identifier.
        name: String,
    },
    /// Typed argument `{name, number}` with an optional trailing style token.
    TypedArgument {
        /// Argument identifier.
        name: String,
        /// Formatting family.
        format: ArgumentFormat,
        /// Raw style token (`{n, number, integer}`), preserved unvalidated.
        style: Option<String>,
    },
    /// Plural construct `{name, plural, ... other {...}}`.
    Plural {
        /// Controlling variable name.
        variable: String,
        /// Optional `offset:N` adjustment.
        offset: Option<u64>,
        /// Case branches, in source order. Always contains `other`.
        cases: Vec<MessageCase>,
    },
    /// Select construct `{name, select, ... other {...}}`.
    Select {
        /// Controlling variable name.
        variable: String,
        /// Case branches, in source order. Always contains `other`.
        cases: Vec<MessageCase>,
    },
    /// Inline tag marker, paired (`<b>...</b>`) or self-closing (`<br/>`).
    Tag {
        /// Tag name.
        name: String,
        /// Recursively parsed children. Empty for self-closing tags.
        children: Vec<MessageNode>,
        /// Whether the tag was written in the `<name/>` form.
        self_closing: bool,
    },
}
