// locale-gate-config/tests/load_validation.rs
// ============================================================================
// Module: Config Load Validation Tests
// Description: Failure-path tests for config loading and validation.
// Purpose: Ensure malformed or out-of-range configs fail closed.
// Dependencies: locale-gate-config, tempfile
// ============================================================================
//! ## Overview
//! Validates file-level failures (missing, oversized, malformed TOML) and
//! field-level validation errors.

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only assertions are permitted."
)]

use std::fs;

use locale_gate_config::ConfigError;
use locale_gate_config::LocaleGateConfig;
use tempfile::TempDir;

/// Writes a config file and loads it.
fn load(contents: &str) -> Result<LocaleGateConfig, ConfigError> {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("locale-gate.toml");
    fs::write(&path, contents).unwrap();
    LocaleGateConfig::load_file(&path)
}

#[test]
fn valid_file_loads() {
    let config = load(
        r#"
        [catalog]
        root = "translations"
        source_locale = "en-US"
        namespaces = ["game", "site"]

        [report]
        missing_display_cap = 5
        bar_width = 10
        "#,
    )
    .unwrap();
    assert_eq!(config.catalog.source_locale, "en-US");
    assert_eq!(config.catalog.namespaces, vec!["game", "site"]);
    assert_eq!(config.report.bar_width, 10);
}

#[test]
fn missing_explicit_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let result = LocaleGateConfig::load_file(&dir.path().join("absent.toml"));
    assert!(matches!(result, Err(ConfigError::Read { .. })));
}

#[test]
fn malformed_toml_is_an_error() {
    let result = load("[catalog\nsource_locale = ");
    assert!(matches!(result, Err(ConfigError::Parse { .. })));
}

#[test]
fn oversized_file_is_rejected() {
    let padding = format!("# {}\n", "x".repeat(70 * 1024));
    let result = load(&padding);
    assert!(matches!(result, Err(ConfigError::TooLarge { .. })));
}

#[test]
fn empty_source_locale_is_rejected() {
    let result = load(
        r#"
        [catalog]
        source_locale = "  "
        "#,
    );
    assert!(matches!(result, Err(ConfigError::EmptySourceLocale)));
}

#[test]
fn empty_namespace_list_is_rejected() {
    let result = load(
        r#"
        [catalog]
        namespaces = []
        "#,
    );
    assert!(matches!(result, Err(ConfigError::NoNamespaces)));
}

#[test]
fn duplicate_namespace_is_rejected() {
    let result = load(
        r#"
        [catalog]
        namespaces = ["game", "site", "game"]
        "#,
    );
    match result {
        Err(ConfigError::DuplicateNamespace(name)) => assert_eq!(name, "game"),
        other => panic!("expected DuplicateNamespace, got {other:?}"),
    }
}

#[test]
fn namespace_with_path_separator_is_rejected() {
    let result = load(
        r#"
        [catalog]
        namespaces = ["../escape"]
        "#,
    );
    assert!(matches!(result, Err(ConfigError::InvalidNamespace(_))));
}

#[test]
fn empty_namespace_name_is_rejected() {
    let result = load(
        r#"
        [catalog]
        namespaces = [""]
        "#,
    );
    assert!(matches!(result, Err(ConfigError::InvalidNamespace(_))));
}

#[test]
fn zero_bar_width_is_rejected() {
    let result = load(
        r#"
        [report]
        bar_width = 0
        "#,
    );
    assert!(matches!(result, Err(ConfigError::BarWidthOutOfRange { .. })));
}

#[test]
fn oversized_bar_width_is_rejected() {
    let result = load(
        r#"
        [report]
        bar_width = 200
        "#,
    );
    assert!(matches!(result, Err(ConfigError::BarWidthOutOfRange { .. })));
}
