// locale-gate-core/src/runtime/placeholders.rs
// ============================================================================
// Module: Placeholder Extraction
// Description: Structural collection of placeholder identities from a tree.
// Purpose: Produce the placeholder set a message needs at render time.
// Dependencies: crate::core, msg-grammar
// ============================================================================

//! ## Overview
//! Extraction is a structural walk over the parsed tree, never a text scan:
//! placeholder-looking sequences inside literal text stay literal, and case
//! labels (`one`, `other`, select case names) are never mistaken for
//! placeholders. Plural and select constructs contribute their controlling
//! variable exactly once regardless of how many branches reference it.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;

use msg_grammar::MessageNode;

use crate::core::Placeholder;

// ============================================================================
// SECTION: Extraction
// ============================================================================

/// Collects the distinct placeholder identities referenced by a message.
#[must_use]
pub fn extract_placeholders(nodes: &[MessageNode]) -> BTreeSet<Placeholder> {
    let mut placeholders = BTreeSet::new();
    collect(nodes, &mut placeholders);
    placeholders
}

/// Recursive walk accumulating placeholder identities.
fn collect(nodes: &[MessageNode], placeholders: &mut BTreeSet<Placeholder>) {
    for node in nodes {
        match node {
            MessageNode::Text(_) => {}
            MessageNode::Argument {
                name,
            }
            | MessageNode::TypedArgument {
                name, ..
            } => {
                placeholders.insert(Placeholder::argument(name.clone()));
            }
            MessageNode::Plural {
                variable,
                cases,
                ..
            }
            | MessageNode::Select {
                variable,
                cases,
            } => {
                placeholders.insert(Placeholder::argument(variable.clone()));
                for case in cases {
                    collect(&case.body, placeholders);
                }
            }
            MessageNode::Tag {
                name,
                children,
                ..
            } => {
                placeholders.insert(Placeholder::tag(name.clone()));
                collect(children, placeholders);
            }
        }
    }
}
