//! Field projection engine
//!
//! The core of the connector: a pure function that prunes an
//! arbitrarily-shaped nested JSON record down to a fixed allow-list of
//! fields at every nesting level.
//!
//! # Overview
//!
//! HiBob responses carry far more fields than downstream analytics are
//! allowed to receive, including tenant-specific custom fields keyed by
//! opaque numeric codes. Each stream declares an [`AllowList`] tree once at
//! catalog construction time; [`project`] applies that tree to every raw
//! record.
//!
//! # Degrade policy
//!
//! Projection never fails. Upstream data is inherently sparse: declared
//! fields may be absent, and fields declared as objects may arrive as null,
//! scalars, or arrays. Anything that does not match is dropped or passed
//! through unchanged, never raised as an error.

mod tree;

pub use tree::AllowList;

use crate::types::{JsonObject, JsonValue};

/// Apply an allow-list tree to a raw record, returning the pruned record.
///
/// Rules, applied recursively top-down:
///
/// - Keys absent from the node's kept set are dropped.
/// - Kept keys with a child node and an object value are projected
///   recursively.
/// - Kept keys holding scalars, arrays, or null are passed through
///   unchanged, even when a child node is declared for them (the tolerant
///   degrade policy — the child allow-list simply has nothing to recurse
///   into).
/// - A non-object input is returned unchanged; there is nothing to prune.
///
/// The input is never mutated; the output is a freshly built value that
/// shares no structure with the caller's record. Output key order follows
/// `serde_json`'s map ordering and is not semantically significant.
pub fn project(node: &AllowList, record: &JsonValue) -> JsonValue {
    let JsonValue::Object(map) = record else {
        return record.clone();
    };

    let mut out = JsonObject::new();
    for (key, value) in map {
        if !node.keeps(key) {
            continue;
        }
        let projected = match (node.child(key), value) {
            (Some(child), JsonValue::Object(_)) => project(child, value),
            _ => value.clone(),
        };
        out.insert(key.clone(), projected);
    }

    JsonValue::Object(out)
}

#[cfg(test)]
mod tests;
