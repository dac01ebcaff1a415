// locale-gate-core/tests/proptest_catalog.rs
// ============================================================================
// Module: Catalog Flattening Properties
// Description: Property-based coverage for the document flattener.
// Purpose: Ensure flattening is total, injective, and string-only.
// Dependencies: locale-gate-core, proptest, serde_json
// ============================================================================
//! ## Overview
//! Generates arbitrary JSON trees and checks the flattener's structural
//! guarantees: one key path per string leaf, non-string leaves dropped,
//! deterministic output.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

use locale_gate_core::flatten;
use proptest::prelude::*;
use serde_json::Value;

/// Strategy producing arbitrary JSON documents of bounded depth.
fn json_document() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|number| Value::Number(number.into())),
        "[a-z ]{0,10}".prop_map(Value::String),
    ];
    leaf.prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..5).prop_map(Value::Array),
            prop::collection::btree_map("[a-z]{1,6}", inner, 0..5)
                .prop_map(|entries| Value::Object(entries.into_iter().collect())),
        ]
    })
}

/// Counts string leaves reachable through objects and arrays.
fn count_string_leaves(value: &Value) -> usize {
    match value {
        Value::String(_) => 1,
        Value::Array(items) => items.iter().map(count_string_leaves).sum(),
        Value::Object(entries) => entries.values().map(count_string_leaves).sum(),
        Value::Number(_) | Value::Bool(_) | Value::Null => 0,
    }
}

/// Resolves a flattened key path back to a node in the document.
fn resolve<'a>(document: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = document;
    for segment in path.split('.') {
        current = match current {
            Value::Object(entries) => entries.get(segment)?,
            Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
            Value::String(_) | Value::Number(_) | Value::Bool(_) | Value::Null => return None,
        };
    }
    Some(current)
}

proptest! {
    /// Every string leaf yields exactly one key path.
    #[test]
    fn one_key_path_per_string_leaf(document in json_document()) {
        let container_leaves = match &document {
            Value::Object(_) | Value::Array(_) => count_string_leaves(&document),
            // A scalar root has no addressable path.
            Value::String(_) | Value::Number(_) | Value::Bool(_) | Value::Null => 0,
        };
        prop_assert_eq!(flatten(&document).len(), container_leaves);
    }

    /// Every flattened entry resolves back to its string leaf.
    #[test]
    fn entries_resolve_to_their_leaves(document in json_document()) {
        let catalog = flatten(&document);
        for (path, message) in catalog.iter() {
            let node = resolve(&document, path);
            prop_assert_eq!(node, Some(&Value::String(message.to_string())));
        }
    }

    /// Flattening the same document twice yields identical catalogs.
    #[test]
    fn flattening_is_deterministic(document in json_document()) {
        prop_assert_eq!(flatten(&document), flatten(&document));
    }
}
