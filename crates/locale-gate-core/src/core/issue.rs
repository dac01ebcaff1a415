// locale-gate-core/src/core/issue.rs
// ============================================================================
// Module: Validation Issues
// Description: Structured findings produced by catalog comparison.
// Purpose: Carry severity, location, and reason for every finding.
// Dependencies: crate::core::identifiers, serde
// ============================================================================

//! ## Overview
//! Every finding is an [`Issue`]: an error blocks the run, a warning is
//! advisory. Issues are accumulated in discovery order and never
//! deduplicated; repeated problems across keys each produce their own
//! issue so contributors can locate every occurrence from the report alone.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

use crate::core::identifiers::LocaleId;
use crate::core::identifiers::Namespace;

// ============================================================================
// SECTION: Severity
// ============================================================================

/// Whether a finding blocks the run or merely advises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Blocking finding; at least one forces a failing exit.
    Error,
    /// Advisory finding; never affects the exit code.
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => f.write_str("error"),
            Self::Warning => f.write_str("warning"),
        }
    }
}

// ============================================================================
// SECTION: Issue Kinds
// ============================================================================

/// Classification of a finding. Each kind maps to a fixed severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    /// A target namespace file is missing or not valid JSON.
    FileUnreadable,
    /// A target key does not exist in the source catalog.
    ExtraKey,
    /// A source key has no entry in the target catalog.
    MissingTranslation,
    /// A target value is empty after trimming whitespace.
    EmptyValue,
    /// A target value failed message-grammar parsing.
    InvalidSyntax,
    /// A source placeholder is absent from the target message.
    MissingPlaceholder,
    /// A target placeholder is absent from the source message.
    UnknownPlaceholder,
    /// A source-locale value failed message-grammar parsing.
    SourceSyntax,
}

impl IssueKind {
    /// Returns the fixed severity of this kind.
    ///
    /// Partial translation is an accepted project state, so missing and
    /// empty values only warn. Schema drift and broken substitution would
    /// surface to end users, so those kinds block.
    #[must_use]
    pub const fn severity(self) -> Severity {
        match self {
            Self::FileUnreadable
            | Self::ExtraKey
            | Self::InvalidSyntax
            | Self::MissingPlaceholder
            | Self::UnknownPlaceholder
            | Self::SourceSyntax => Severity::Error,
            Self::MissingTranslation | Self::EmptyValue => Severity::Warning,
        }
    }
}

// ============================================================================
// SECTION: Issue
// ============================================================================

/// A single finding against one locale, namespace, and key path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// Severity derived from the issue kind.
    pub severity: Severity,
    /// Classification of the finding.
    pub kind: IssueKind,
    /// Locale the finding concerns.
    pub locale: LocaleId,
    /// Namespace the finding concerns.
    pub namespace: Namespace,
    /// Affected key path, or `None` for file-level findings.
    pub key: Option<String>,
    /// Human-readable reason.
    pub message: String,
}

impl Issue {
    /// Constructs an issue; severity follows the kind.
    #[must_use]
    pub fn new(
        kind: IssueKind,
        locale: LocaleId,
        namespace: Namespace,
        key: Option<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            severity: kind.severity(),
            kind,
            locale,
            namespace,
            key,
            message: message.into(),
        }
    }

    /// Returns the key path, or the file-level sentinel rendering.
    #[must_use]
    pub fn key_or_sentinel(&self) -> &str {
        self.key.as_deref().unwrap_or("(file)")
    }
}
