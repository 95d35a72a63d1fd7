//! Insertion-ordered dependency mapping.

use std::collections::hash_map::Entry;

use tforder_core::types::collections::{FxHashMap, ReferenceSet};

/// Maps each module to the set of module names whose remote state it reads.
///
/// Keys keep first-seen order; that order seeds the resolver's traversal, so
/// it must not come from hashing. Reference sets are ordered by name.
/// Modules and references are only ever added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyGraph {
    order: Vec<String>,
    references: FxHashMap<String, ReferenceSet>,
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `module` references `references`.
    ///
    /// A module seen for the first time is appended to the key order; later
    /// calls for the same module union into its set. A module may be split
    /// across many files, each contributing one call.
    pub fn register<I, S>(&mut self, module: impl Into<String>, references: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let set = match self.references.entry(module.into()) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                self.order.push(entry.key().clone());
                entry.insert(ReferenceSet::new())
            }
        };
        set.extend(references.into_iter().map(Into::into));
    }

    /// Module names in first-seen order.
    pub fn modules(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.order.iter().map(String::as_str)
    }

    /// `(module, references)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ReferenceSet)> + '_ {
        self.order
            .iter()
            .filter_map(|m| self.references.get(m).map(|refs| (m.as_str(), refs)))
    }

    /// `None` when `module` was never registered, i.e. it is terminal.
    pub fn references(&self, module: &str) -> Option<&ReferenceSet> {
        self.references.get(module)
    }

    pub fn contains(&self, module: &str) -> bool {
        self.references.contains_key(module)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Total number of (module, reference) pairs.
    pub fn edge_count(&self) -> usize {
        self.references.values().map(|refs| refs.len()).sum()
    }

    /// Referenced names that are not modules of this graph, sorted.
    pub fn external_references(&self) -> Vec<String> {
        let external: ReferenceSet = self
            .references
            .values()
            .flatten()
            .filter(|name| !self.contains(name))
            .cloned()
            .collect();
        external.into_iter().collect()
    }
}

impl<M, I, S> FromIterator<(M, I)> for DependencyGraph
where
    M: Into<String>,
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (M, I)>>(iter: T) -> Self {
        let mut graph = Self::new();
        for (module, references) in iter {
            graph.register(module, references);
        }
        graph
    }
}
