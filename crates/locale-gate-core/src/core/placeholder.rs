// locale-gate-core/src/core/placeholder.rs
// ============================================================================
// Module: Placeholder Identity
// Description: Normalized identity of a runtime substitution point.
// Purpose: Disambiguate argument and tag identifiers sharing one name.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! A placeholder is what a message needs at render time: a named argument
//! (simple, typed, or the controller of a plural/select construct) or an
//! inline tag. Parity checking compares placeholder *sets*, so identity must
//! distinguish `{link}` from `<link>` while ignoring how often or where a
//! placeholder appears.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Placeholder Types
// ============================================================================

/// Kind of substitution point a placeholder names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaceholderKind {
    /// A named argument, including plural/select controllers.
    Argument,
    /// An inline tag marker.
    Tag,
}

/// Normalized placeholder identity used for set comparison.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Placeholder {
    /// Identifier as written in the message.
    pub name: String,
    /// Whether the identifier names an argument or a tag.
    pub kind: PlaceholderKind,
}

impl Placeholder {
    /// Creates an argument placeholder.
    #[must_use]
    pub fn argument(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: PlaceholderKind::Argument,
        }
    }

    /// Creates a tag placeholder.
    #[must_use]
    pub fn tag(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: PlaceholderKind::Tag,
        }
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            PlaceholderKind::Argument => write!(f, "{}", self.name),
            PlaceholderKind::Tag => write!(f, "<{}>", self.name),
        }
    }
}
