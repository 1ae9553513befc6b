//! Extracted key data and the merge rule that combines it.
//!
//! An [`ExtractionResult`] maps a context to the keys found in it. Results from
//! different call sites or files are combined with [`ExtractionResult::merge`],
//! which ORs the plural flag and unions the parameter sets. The merge is
//! commutative and associative, so files can be folded in any order.

use std::collections::{BTreeMap, BTreeSet, btree_map};

/// Context used when a call does not name one.
pub const DEFAULT_CONTEXT: &str = "default";

/// Placeholder that replaces every interpolation in a template literal key.
pub const TEMPLATE_PLACEHOLDER: &str = "${}";

/// What is known about a key across all of its call sites.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyMetadata {
    /// Whether any call site passed `count`, requiring plural forms.
    pub plural: bool,
    /// Option names observed at any call site.
    pub params: BTreeSet<String>,
}

impl KeyMetadata {
    pub fn new(plural: bool, params: impl IntoIterator<Item = String>) -> Self {
        Self {
            plural,
            params: params.into_iter().collect(),
        }
    }

    pub fn merge(&mut self, other: KeyMetadata) {
        self.plural |= other.plural;
        self.params.extend(other.params);
    }
}

/// Keys of a single context.
pub type ContextKeys = BTreeMap<String, KeyMetadata>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractionResult {
    contexts: BTreeMap<String, ContextKeys>,
}

impl ExtractionResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key, merging with what is already known about it.
    pub fn insert(&mut self, context: &str, key: impl Into<String>, metadata: KeyMetadata) {
        let keys = self.contexts.entry(context.to_string()).or_default();
        match keys.entry(key.into()) {
            btree_map::Entry::Vacant(entry) => {
                entry.insert(metadata);
            }
            btree_map::Entry::Occupied(mut entry) => entry.get_mut().merge(metadata),
        }
    }

    /// Fold another result into this one.
    pub fn merge(&mut self, other: ExtractionResult) {
        for (context, keys) in other.contexts {
            for (key, metadata) in keys {
                self.insert(&context, key, metadata);
            }
        }
    }

    /// Merge any number of results into a fresh accumulator.
    pub fn merged(results: impl IntoIterator<Item = ExtractionResult>) -> Self {
        results.into_iter().fold(Self::new(), |mut acc, result| {
            acc.merge(result);
            acc
        })
    }

    pub fn get(&self, context: &str, key: &str) -> Option<&KeyMetadata> {
        self.contexts.get(context).and_then(|keys| keys.get(key))
    }

    pub fn contexts(&self) -> impl Iterator<Item = (&str, &ContextKeys)> {
        self.contexts.iter().map(|(ctx, keys)| (ctx.as_str(), keys))
    }

    pub fn context_keys(&self, context: &str) -> Option<&ContextKeys> {
        self.contexts.get(context)
    }

    /// Total number of (context, key) pairs.
    pub fn key_count(&self) -> usize {
        self.contexts.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.key_count() == 0
    }
}
