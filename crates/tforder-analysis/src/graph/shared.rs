//! Thread-safe front for building a graph from parallel workers.

use std::sync::{Mutex, MutexGuard};

use super::DependencyGraph;

/// Serializes `register` calls behind one mutex.
///
/// Each call is atomic, but the key order follows lock acquisition, so
/// workers that race produce a run-dependent module order. Callers that need
/// a reproducible order should collect results and register sequentially.
#[derive(Debug, Default)]
pub struct SharedGraphBuilder {
    inner: Mutex<DependencyGraph>,
}

impl SharedGraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<I, S>(&self, module: impl Into<String>, references: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lock().register(module, references);
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn into_graph(self) -> DependencyGraph {
        self.inner
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    // `register` never leaves the graph half-updated, so a poisoned lock
    // still guards a consistent value.
    fn lock(&self) -> MutexGuard<'_, DependencyGraph> {
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rayon::prelude::*;

    #[test]
    fn test_parallel_registration_merges_everything() {
        let builder = SharedGraphBuilder::new();
        (0..64).into_par_iter().for_each(|i| {
            builder.register(format!("m{}", i % 8), [format!("dep{i}")]);
        });

        let graph = builder.into_graph();
        assert_eq!(graph.len(), 8);
        assert_eq!(graph.edge_count(), 64);
        for i in 0..8 {
            assert_eq!(graph.references(&format!("m{i}")).unwrap().len(), 8);
        }
    }
}
