// locale-gate-core/src/core/report.rs
// ============================================================================
// Module: Validation Report
// Description: Accumulated issues and coverage for one validation pass.
// Purpose: Give the reporter a single structure to render and judge.
// Dependencies: crate::core::{identifiers, issue}, serde
// ============================================================================

//! ## Overview
//! One validation pass produces one [`ValidationReport`]: the ordered issue
//! stream plus per-locale coverage counters. The report is the sole input to
//! rendering and to the pass/fail decision; the engine never exits early on
//! non-fatal findings.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;

use crate::core::identifiers::LocaleId;
use crate::core::issue::Issue;
use crate::core::issue::Severity;

// ============================================================================
// SECTION: Coverage
// ============================================================================

/// Per-locale translation coverage counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coverage {
    /// Source keys considered across all namespaces.
    pub total: usize,
    /// Keys present in the target with any value.
    pub translated: usize,
}

impl Coverage {
    /// Creates zeroed counters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds another counter pair into this one.
    pub fn merge(&mut self, other: Self) {
        self.total += other.total;
        self.translated += other.translated;
    }

    /// Coverage percentage with half-up integer rounding; `0` when no keys
    /// were considered.
    #[must_use]
    pub const fn percent(&self) -> usize {
        if self.total == 0 {
            0
        } else {
            (self.translated * 100 + self.total / 2) / self.total
        }
    }
}

// ============================================================================
// SECTION: Report
// ============================================================================

/// Accumulated outcome of a full validation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Findings in discovery order.
    pub issues: Vec<Issue>,
    /// Coverage per target locale.
    pub coverage: BTreeMap<LocaleId, Coverage>,
    /// Target locales in comparison order.
    pub locales: Vec<LocaleId>,
}

impl ValidationReport {
    /// Creates an empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the coverage counters for a locale, creating them on first use.
    pub fn coverage_mut(&mut self, locale: &LocaleId) -> &mut Coverage {
        self.coverage.entry(locale.clone()).or_default()
    }

    /// Iterates error-severity issues in discovery order.
    pub fn errors(&self) -> impl Iterator<Item = &Issue> {
        self.issues
            .iter()
            .filter(|issue| issue.severity == Severity::Error)
    }

    /// Iterates warning-severity issues in discovery order.
    pub fn warnings(&self) -> impl Iterator<Item = &Issue> {
        self.issues
            .iter()
            .filter(|issue| issue.severity == Severity::Warning)
    }

    /// Whether at least one blocking issue was found.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    /// Number of blocking issues.
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    /// Number of advisory issues.
    #[must_use]
    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }
}
