// locale-gate-core/src/runtime/engine.rs
// ============================================================================
// Module: Validation Engine
// Description: Single-pass driver over the locale directory tree.
// Purpose: Load, flatten, and compare every (locale, namespace) pair.
// Dependencies: crate::{core, interfaces, runtime}, serde_json, thiserror
// ============================================================================

//! ## Overview
//! The engine runs one sequential batch pass: load and syntax-check the
//! source locale's namespaces, discover target locale directories, then
//! compare each (locale, namespace) pair in a fixed order. Unreadable
//! target files become per-pair error issues and never stop the pass; an
//! unreadable *source* file is fatal because no schema exists to compare
//! against.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

use serde_json::Value;
use thiserror::Error;

use crate::core::Issue;
use crate::core::IssueKind;
use crate::core::LocaleId;
use crate::core::Namespace;
use crate::core::ValidationReport;
use crate::core::flatten;
use crate::interfaces::MessageParser;
use crate::runtime::comparator::SourceNamespace;
use crate::runtime::comparator::compare_namespace;
use crate::runtime::placeholders::extract_placeholders;

// ============================================================================
// SECTION: Configuration
// ============================================================================

/// Inputs fixing one validation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Root directory holding one subdirectory per locale.
    pub root: PathBuf,
    /// The authoritative locale.
    pub source_locale: LocaleId,
    /// Closed namespace set; one JSON document each per locale.
    pub namespaces: Vec<Namespace>,
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Fatal conditions that abort the pass before any comparison.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A source-locale namespace file could not be read.
    #[error("failed to read source catalog {path}: {source}")]
    SourceRead {
        /// Path of the unreadable file.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// A source-locale namespace file is not valid JSON.
    #[error("failed to parse source catalog {path}: {source}")]
    SourceParse {
        /// Path of the malformed file.
        path: PathBuf,
        /// Underlying JSON failure.
        #[source]
        source: serde_json::Error,
    },
    /// The locale root directory could not be listed.
    #[error("failed to list locale directories in {path}: {source}")]
    RootList {
        /// Path of the unreadable root.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
}

/// Why a single document failed to load. Recoverable for targets.
#[derive(Debug, Error)]
enum DocumentError {
    /// The file could not be read.
    #[error("{0}")]
    Read(#[from] std::io::Error),
    /// The file is not valid JSON.
    #[error("{0}")]
    Parse(#[from] serde_json::Error),
}

// ============================================================================
// SECTION: Engine
// ============================================================================

/// Single-pass validation driver.
pub struct ValidationEngine<'p> {
    /// Inputs fixing this pass.
    config: EngineConfig,
    /// Injected message-grammar capability.
    parser: &'p dyn MessageParser,
}

impl<'p> ValidationEngine<'p> {
    /// Creates an engine over a configuration and parser capability.
    #[must_use]
    pub const fn new(config: EngineConfig, parser: &'p dyn MessageParser) -> Self {
        Self {
            config,
            parser,
        }
    }

    /// Runs the full validation pass.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError`] only for fatal conditions: an unreadable or
    /// malformed source-locale file, or an unlistable locale root.
    pub fn run(&self) -> Result<ValidationReport, EngineError> {
        let mut report = ValidationReport::new();
        let sources = self.load_source_schema(&mut report)?;
        let locales = self.discover_locales()?;
        report.locales.clone_from(&locales);

        for locale in &locales {
            report.coverage_mut(locale);
            for source in &sources {
                let path = self.document_path(locale, &source.namespace);
                match load_document(&path) {
                    Ok(document) => {
                        let comparison =
                            compare_namespace(source, &document, self.parser, locale);
                        report.issues.extend(comparison.issues);
                        report.coverage_mut(locale).merge(comparison.coverage);
                    }
                    Err(error) => {
                        report.issues.push(Issue::new(
                            IssueKind::FileUnreadable,
                            locale.clone(),
                            source.namespace.clone(),
                            None,
                            format!("file missing or invalid: {error}"),
                        ));
                        report.coverage_mut(locale).total += source.catalog.len();
                    }
                }
            }
        }
        Ok(report)
    }

    /// Loads and syntax-checks every source namespace.
    ///
    /// Source values that fail to parse produce `SourceSyntax` issues and an
    /// empty placeholder set; the pass continues with whatever could be
    /// extracted.
    fn load_source_schema(
        &self,
        report: &mut ValidationReport,
    ) -> Result<Vec<SourceNamespace>, EngineError> {
        let mut sources = Vec::with_capacity(self.config.namespaces.len());
        for namespace in &self.config.namespaces {
            let path = self.document_path(&self.config.source_locale, namespace);
            let document = load_document(&path).map_err(|error| match error {
                DocumentError::Read(source) => EngineError::SourceRead {
                    path: path.clone(),
                    source,
                },
                DocumentError::Parse(source) => EngineError::SourceParse {
                    path: path.clone(),
                    source,
                },
            })?;
            let catalog = flatten(&document);
            let mut placeholders = HashMap::with_capacity(catalog.len());
            for (key, message) in catalog.iter() {
                match self.parser.parse_message(message) {
                    Ok(nodes) => {
                        placeholders.insert(key.to_string(), extract_placeholders(&nodes));
                    }
                    Err(error) => {
                        report.issues.push(Issue::new(
                            IssueKind::SourceSyntax,
                            self.config.source_locale.clone(),
                            namespace.clone(),
                            Some(key.to_string()),
                            format!("invalid message syntax: {error}"),
                        ));
                        placeholders.insert(key.to_string(), BTreeSet::new());
                    }
                }
            }
            sources.push(SourceNamespace {
                namespace: namespace.clone(),
                catalog,
                placeholders,
            });
        }
        Ok(sources)
    }

    /// Lists target locale directories, excluding the source locale.
    ///
    /// Sorted by name so comparison and report order are deterministic
    /// regardless of directory enumeration order.
    fn discover_locales(&self) -> Result<Vec<LocaleId>, EngineError> {
        let entries = fs::read_dir(&self.config.root).map_err(|source| EngineError::RootList {
            path: self.config.root.clone(),
            source,
        })?;
        let mut locales = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| EngineError::RootList {
                path: self.config.root.clone(),
                source,
            })?;
            let path = entry.path();
            if !path.is_dir() {
                continue;
            }
            let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
                continue;
            };
            if name == self.config.source_locale.as_str() {
                continue;
            }
            locales.push(LocaleId::new(name));
        }
        locales.sort();
        Ok(locales)
    }

    /// Path of one (locale, namespace) document under the root.
    fn document_path(&self, locale: &LocaleId, namespace: &Namespace) -> PathBuf {
        self.config
            .root
            .join(locale.as_str())
            .join(namespace.file_name())
    }
}

// ============================================================================
// SECTION: Document Loading
// ============================================================================

/// Reads and parses one JSON document.
fn load_document(path: &Path) -> Result<Value, DocumentError> {
    let contents = fs::read_to_string(path)?;
    let document = serde_json::from_str(&contents)?;
    Ok(document)
}
