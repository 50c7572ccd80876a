//! Allow-list tree
//!
//! Declares which fields survive projection at each nesting level.

use std::collections::{BTreeMap, BTreeSet};

/// A node in the allow-list tree.
///
/// Constructed once per stream at catalog registration time and immutable
/// thereafter; shared read-only by every projection call for that stream.
///
/// Invariant: every key with a child subtree is also a kept key. The only
/// way to attach a child is [`AllowList::nest`], which inserts the key into
/// the kept set itself, so the invariant holds by construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllowList {
    keys: BTreeSet<String>,
    children: BTreeMap<String, AllowList>,
}

impl AllowList {
    /// Create an empty allow-list node
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep a single field at this level
    #[must_use]
    pub fn keep(mut self, key: impl Into<String>) -> Self {
        self.keys.insert(key.into());
        self
    }

    /// Keep several fields at this level
    #[must_use]
    pub fn keep_all<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for key in keys {
            self.keys.insert(key.into());
        }
        self
    }

    /// Keep a field and attach an allow-list subtree for its object value
    #[must_use]
    pub fn nest(mut self, key: impl Into<String>, child: AllowList) -> Self {
        let key = key.into();
        self.keys.insert(key.clone());
        self.children.insert(key, child);
        self
    }

    /// Whether a field survives projection at this level
    pub fn keeps(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    /// The allow-list subtree for a nested object field, if declared
    pub fn child(&self, key: &str) -> Option<&AllowList> {
        self.children.get(key)
    }

    /// Iterate over the kept keys at this level
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }

    /// Whether this node keeps nothing
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Dotted paths of every leaf in the tree.
    ///
    /// A kept key without a subtree is a leaf; a kept key with a subtree
    /// contributes its subtree's leaves prefixed with its own name. Used as
    /// the server-side field-selection list for endpoints that accept one,
    /// so the selection can never drift from the allow-list.
    pub fn leaf_paths(&self) -> Vec<String> {
        let mut paths = Vec::new();
        self.collect_leaf_paths(None, &mut paths);
        paths
    }

    fn collect_leaf_paths(&self, prefix: Option<&str>, out: &mut Vec<String>) {
        for key in &self.keys {
            let path = match prefix {
                Some(prefix) => format!("{prefix}.{key}"),
                None => key.clone(),
            };
            match self.children.get(key) {
                Some(child) if !child.is_empty() => {
                    child.collect_leaf_paths(Some(&path), out);
                }
                _ => out.push(path),
            }
        }
    }
}
