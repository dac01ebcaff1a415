// locale-gate-core/src/core/catalog.rs
// ============================================================================
// Module: Catalog Flattener
// Description: Flat key-path view over a nested JSON catalog document.
// Purpose: Convert nested objects and arrays into ordered key/message pairs.
// Dependencies: indexmap, serde_json
// ============================================================================

//! ## Overview
//! A namespace document is an arbitrarily nested JSON tree whose string
//! leaves are the translatable units. Flattening joins nested object keys
//! and zero-based array indices with `.` into a unique key path per string
//! leaf. Number, boolean, and null leaves are not translatable and are
//! dropped without a finding. Flattening is a pure function of the document;
//! entry order follows document order, which drives deterministic reports.

// ============================================================================
// SECTION: Imports
// ============================================================================

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

// ============================================================================
// SECTION: Flat Catalog
// ============================================================================

/// Ordered mapping from key path to message string for one document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FlatCatalog {
    /// Entries in document order.
    entries: IndexMap<String, String>,
}

impl FlatCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a key path and its message string.
    pub fn insert(&mut self, path: String, message: String) {
        self.entries.insert(path, message);
    }

    /// Looks up the message at a key path.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&str> {
        self.entries.get(path).map(String::as_str)
    }

    /// Returns whether the catalog contains a key path.
    #[must_use]
    pub fn contains_key(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(path, message)| (path.as_str(), message.as_str()))
    }

    /// Iterates key paths in document order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

// ============================================================================
// SECTION: Flattening
// ============================================================================

/// Flattens a catalog document into its key-path view.
#[must_use]
pub fn flatten(document: &Value) -> FlatCatalog {
    let mut catalog = FlatCatalog::new();
    flatten_container(document, "", &mut catalog);
    catalog
}

/// Recurses into an object or array, extending the path prefix per child.
///
/// A scalar at the root has no addressable key path and yields nothing.
fn flatten_container(value: &Value, prefix: &str, catalog: &mut FlatCatalog) {
    match value {
        Value::Object(entries) => {
            for (key, child) in entries {
                let path = join_path(prefix, key);
                flatten_child(child, &path, catalog);
            }
        }
        Value::Array(items) => {
            for (index, child) in items.iter().enumerate() {
                let path = join_path(prefix, &index.to_string());
                flatten_child(child, &path, catalog);
            }
        }
        Value::String(_) | Value::Number(_) | Value::Bool(_) | Value::Null => {}
    }
}

/// Records a string leaf, recurses into a container, or drops other leaves.
fn flatten_child(child: &Value, path: &str, catalog: &mut FlatCatalog) {
    match child {
        Value::String(message) => catalog.insert(path.to_string(), message.clone()),
        Value::Object(_) | Value::Array(_) => flatten_container(child, path, catalog),
        Value::Number(_) | Value::Bool(_) | Value::Null => {}
    }
}

/// Joins a path prefix and a child segment with `.`.
fn join_path(prefix: &str, segment: &str) -> String {
    if prefix.is_empty() {
        segment.to_string()
    } else {
        format!("{prefix}.{segment}")
    }
}
