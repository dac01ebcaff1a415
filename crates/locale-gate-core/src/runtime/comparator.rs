// locale-gate-core/src/runtime/comparator.rs
// ============================================================================
// Module: Locale Comparator
// Description: Key-by-key comparison of a target document against the source.
// Purpose: Convert one (locale, namespace) pair into issues and counters.
// Dependencies: crate::{core, interfaces, runtime::placeholders}, serde_json
// ============================================================================

//! ## Overview
//! The source locale's key set is the authoritative schema. Comparison walks
//! the target's extra keys first, then every source key in source order:
//! absence and emptiness warn, while extra keys, syntax failures, and
//! placeholder mismatches block. A key can produce several placeholder
//! issues at once; both directions are checked independently.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;
use std::collections::HashMap;

use serde_json::Value;

use crate::core::Coverage;
use crate::core::FlatCatalog;
use crate::core::Issue;
use crate::core::IssueKind;
use crate::core::LocaleId;
use crate::core::Namespace;
use crate::core::Placeholder;
use crate::core::flatten;
use crate::interfaces::MessageParser;
use crate::runtime::placeholders::extract_placeholders;

// ============================================================================
// SECTION: Source Schema
// ============================================================================

/// One namespace of the source locale, prepared for comparison.
///
/// The placeholder sets are extracted once during the up-front source
/// syntax check; a source value that failed to parse maps to an empty set
/// so target comparison still proceeds.
#[derive(Debug, Clone)]
pub struct SourceNamespace {
    /// Namespace this schema covers.
    pub namespace: Namespace,
    /// Flattened source catalog in document order.
    pub catalog: FlatCatalog,
    /// Placeholder set per source key path.
    pub placeholders: HashMap<String, BTreeSet<Placeholder>>,
}

/// Issues and counters produced for one (locale, namespace) pair.
#[derive(Debug, Clone, Default)]
pub struct NamespaceComparison {
    /// Findings in discovery order.
    pub issues: Vec<Issue>,
    /// Coverage increment for the pair.
    pub coverage: Coverage,
}

// ============================================================================
// SECTION: Comparison
// ============================================================================

/// Compares a target document against the prepared source namespace.
#[must_use]
pub fn compare_namespace(
    source: &SourceNamespace,
    target_document: &Value,
    parser: &dyn MessageParser,
    locale: &LocaleId,
) -> NamespaceComparison {
    let mut comparison = NamespaceComparison::default();
    let target = flatten(target_document);

    for key in target.keys() {
        if !source.catalog.contains_key(key) {
            comparison.issues.push(Issue::new(
                IssueKind::ExtraKey,
                locale.clone(),
                source.namespace.clone(),
                Some(key.to_string()),
                "extra key not in source",
            ));
        }
    }

    for key in source.catalog.keys() {
        comparison.coverage.total += 1;
        let Some(target_value) = target.get(key) else {
            comparison.issues.push(Issue::new(
                IssueKind::MissingTranslation,
                locale.clone(),
                source.namespace.clone(),
                Some(key.to_string()),
                "missing translation",
            ));
            continue;
        };
        comparison.coverage.translated += 1;
        if target_value.trim().is_empty() {
            comparison.issues.push(Issue::new(
                IssueKind::EmptyValue,
                locale.clone(),
                source.namespace.clone(),
                Some(key.to_string()),
                "empty value",
            ));
            continue;
        }
        let target_nodes = match parser.parse_message(target_value) {
            Ok(nodes) => nodes,
            Err(error) => {
                comparison.issues.push(Issue::new(
                    IssueKind::InvalidSyntax,
                    locale.clone(),
                    source.namespace.clone(),
                    Some(key.to_string()),
                    format!("invalid message syntax: {error}"),
                ));
                continue;
            }
        };
        let empty = BTreeSet::new();
        let source_set = source.placeholders.get(key).unwrap_or(&empty);
        let target_set = extract_placeholders(&target_nodes);
        for missing in source_set.difference(&target_set) {
            comparison.issues.push(Issue::new(
                IssueKind::MissingPlaceholder,
                locale.clone(),
                source.namespace.clone(),
                Some(key.to_string()),
                format!("missing placeholder: {missing}"),
            ));
        }
        for unknown in target_set.difference(source_set) {
            comparison.issues.push(Issue::new(
                IssueKind::UnknownPlaceholder,
                locale.clone(),
                source.namespace.clone(),
                Some(key.to_string()),
                format!("unknown placeholder: {unknown}"),
            ));
        }
    }

    comparison
}
