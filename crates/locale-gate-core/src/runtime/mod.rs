// locale-gate-core/src/runtime/mod.rs
// ============================================================================
// Module: Locale Gate Runtime
// Description: Placeholder extraction, comparison, and the batch engine.
// Purpose: Execute one validation pass over a locale directory tree.
// Dependencies: crate::{core, interfaces}, msg-grammar
// ============================================================================

//! ## Overview
//! Runtime modules implement the validation pass: structural placeholder
//! extraction, key-by-key namespace comparison, and the sequential engine
//! that drives both over every discovered locale.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod comparator;
pub mod engine;
pub mod placeholders;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use comparator::NamespaceComparison;
pub use comparator::SourceNamespace;
pub use comparator::compare_namespace;
pub use engine::EngineConfig;
pub use engine::EngineError;
pub use engine::ValidationEngine;
pub use placeholders::extract_placeholders;
