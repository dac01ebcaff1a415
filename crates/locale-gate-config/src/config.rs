// locale-gate-config/src/config.rs
// ============================================================================
// Module: Locale Gate Configuration
// Description: Configuration loading and validation for Locale Gate.
// Purpose: Provide strict, fail-closed config parsing with hard limits.
// Dependencies: locale-gate-core, serde, toml
// ============================================================================

//! ## Overview
//! Configuration is loaded from a TOML file with strict size limits and
//! fail-closed validation. Every knob has a default, so a repository with
//! the conventional layout needs no config file at all. Validation results
//! never depend on the environment; only the config *path* resolution does.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::env;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

use locale_gate_core::EngineConfig;
use locale_gate_core::LocaleId;
use locale_gate_core::Namespace;
use serde::Deserialize;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default configuration filename when no path is specified.
pub const DEFAULT_CONFIG_NAME: &str = "locale-gate.toml";
/// Environment variable used to override the config path.
pub const CONFIG_ENV_VAR: &str = "LOCALE_GATE_CONFIG";
/// Maximum configuration file size in bytes.
pub(crate) const MAX_CONFIG_FILE_SIZE: usize = 64 * 1024;
/// Maximum number of namespaces in one run.
pub(crate) const MAX_NAMESPACES: usize = 32;
/// Maximum coverage bar width in characters.
pub(crate) const MAX_BAR_WIDTH: usize = 80;
/// Default catalog root directory.
const DEFAULT_ROOT: &str = "locales";
/// Default source locale identifier.
const DEFAULT_SOURCE_LOCALE: &str = "en";
/// Default namespace set, one JSON document each per locale.
const DEFAULT_NAMESPACES: [&str; 5] = ["game", "site", "pages", "error", "faq"];
/// Default cap on missing-translation keys listed per locale.
const DEFAULT_MISSING_DISPLAY_CAP: usize = 10;
/// Default coverage bar width in characters.
const DEFAULT_BAR_WIDTH: usize = 20;

// ============================================================================
// SECTION: Configuration Types
// ============================================================================

/// Locale Gate configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LocaleGateConfig {
    /// Catalog layout configuration.
    #[serde(default)]
    pub catalog: CatalogConfig,
    /// Report rendering configuration.
    #[serde(default)]
    pub report: ReportConfig,
}

/// Catalog layout: where locales live and what the schema is.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    /// Root directory holding one subdirectory per locale.
    #[serde(default = "default_root")]
    pub root: PathBuf,
    /// The authoritative locale.
    #[serde(default = "default_source_locale")]
    pub source_locale: String,
    /// Closed namespace set checked for every locale.
    #[serde(default = "default_namespaces")]
    pub namespaces: Vec<String>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            source_locale: default_source_locale(),
            namespaces: default_namespaces(),
        }
    }
}

/// Report rendering knobs. These never affect validation outcome.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// Missing-translation keys listed per locale before truncation.
    #[serde(default = "default_missing_display_cap")]
    pub missing_display_cap: usize,
    /// Coverage bar width in characters.
    #[serde(default = "default_bar_width")]
    pub bar_width: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            missing_display_cap: default_missing_display_cap(),
            bar_width: default_bar_width(),
        }
    }
}

// ============================================================================
// SECTION: Defaults
// ============================================================================

/// Default catalog root.
fn default_root() -> PathBuf {
    PathBuf::from(DEFAULT_ROOT)
}

/// Default source locale.
fn default_source_locale() -> String {
    DEFAULT_SOURCE_LOCALE.to_string()
}

/// Default namespace list.
fn default_namespaces() -> Vec<String> {
    DEFAULT_NAMESPACES.iter().map(ToString::to_string).collect()
}

/// Default missing-translation display cap.
const fn default_missing_display_cap() -> usize {
    DEFAULT_MISSING_DISPLAY_CAP
}

/// Default coverage bar width.
const fn default_bar_width() -> usize {
    DEFAULT_BAR_WIDTH
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration loading and validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config {path}: {source}")]
    Read {
        /// Path of the unreadable file.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The config file is not valid TOML.
    #[error("failed to parse config {path}: {source}")]
    Parse {
        /// Path of the malformed file.
        path: PathBuf,
        /// Underlying TOML failure.
        #[source]
        source: toml::de::Error,
    },
    /// The config file exceeds the size limit.
    #[error("config {path} is {size} bytes (limit {limit})")]
    TooLarge {
        /// Path of the oversized file.
        path: PathBuf,
        /// Observed size in bytes.
        size: usize,
        /// Maximum accepted size in bytes.
        limit: usize,
    },
    /// `catalog.source_locale` is empty.
    #[error("catalog.source_locale must not be empty")]
    EmptySourceLocale,
    /// `catalog.namespaces` is empty.
    #[error("catalog.namespaces must not be empty")]
    NoNamespaces,
    /// `catalog.namespaces` lists too many entries.
    #[error("catalog.namespaces lists {count} entries (limit {limit})")]
    TooManyNamespaces {
        /// Observed entry count.
        count: usize,
        /// Maximum accepted entry count.
        limit: usize,
    },
    /// A namespace appears more than once.
    #[error("catalog.namespaces lists '{0}' more than once")]
    DuplicateNamespace(String),
    /// A namespace is not a plain path-component-safe token.
    #[error("namespace '{0}' must be a plain name of letters, digits, '-' or '_'")]
    InvalidNamespace(String),
    /// `report.bar_width` is out of range.
    #[error("report.bar_width must be between 1 and {limit}")]
    BarWidthOutOfRange {
        /// Maximum accepted width.
        limit: usize,
    },
}

// ============================================================================
// SECTION: Loading
// ============================================================================

impl LocaleGateConfig {
    /// Resolves and loads the configuration.
    ///
    /// Resolution order: explicit path, then the `LOCALE_GATE_CONFIG`
    /// environment variable, then `locale-gate.toml` in the working
    /// directory if present, then pure defaults. An explicitly requested
    /// file must exist; the conventional file is optional.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the resolved file cannot be read or
    /// parsed, or when any field fails validation.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self, ConfigError> {
        let requested = explicit_path.map_or_else(
            || env::var(CONFIG_ENV_VAR).ok().map(PathBuf::from),
            |path| Some(path.to_path_buf()),
        );
        if let Some(path) = requested {
            return Self::load_file(&path);
        }
        let conventional = PathBuf::from(DEFAULT_CONFIG_NAME);
        if conventional.exists() {
            return Self::load_file(&conventional);
        }
        let config = Self::default();
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates one config file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file cannot be read, exceeds the
    /// size limit, is not valid TOML, or fails validation.
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        if contents.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::TooLarge {
                path: path.to_path_buf(),
                size: contents.len(),
                limit: MAX_CONFIG_FILE_SIZE,
            });
        }
        let config: Self = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Validates every field, failing closed on the first violation.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.catalog.source_locale.trim().is_empty() {
            return Err(ConfigError::EmptySourceLocale);
        }
        if self.catalog.namespaces.is_empty() {
            return Err(ConfigError::NoNamespaces);
        }
        if self.catalog.namespaces.len() > MAX_NAMESPACES {
            return Err(ConfigError::TooManyNamespaces {
                count: self.catalog.namespaces.len(),
                limit: MAX_NAMESPACES,
            });
        }
        for (index, namespace) in self.catalog.namespaces.iter().enumerate() {
            if namespace.is_empty()
                || !namespace
                    .chars()
                    .all(|ch| ch.is_ascii_alphanumeric() || ch == '-' || ch == '_')
            {
                return Err(ConfigError::InvalidNamespace(namespace.clone()));
            }
            if self.catalog.namespaces[..index].contains(namespace) {
                return Err(ConfigError::DuplicateNamespace(namespace.clone()));
            }
        }
        if self.report.bar_width == 0 || self.report.bar_width > MAX_BAR_WIDTH {
            return Err(ConfigError::BarWidthOutOfRange {
                limit: MAX_BAR_WIDTH,
            });
        }
        Ok(())
    }

    /// Builds the engine configuration this config describes.
    #[must_use]
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            root: self.catalog.root.clone(),
            source_locale: LocaleId::new(self.catalog.source_locale.clone()),
            namespaces: self
                .catalog
                .namespaces
                .iter()
                .map(|name| Namespace::new(name.clone()))
                .collect(),
        }
    }
}
