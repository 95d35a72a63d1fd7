//! Re-exports of the collection types used across the workspace.

pub use rustc_hash::{FxHashMap, FxHashSet};
pub use std::collections::BTreeSet;

/// Set of referenced module names. Ordered so iteration is reproducible.
pub type ReferenceSet = BTreeSet<String>;
