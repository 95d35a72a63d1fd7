//! Resolution output.

use serde::{Deserialize, Serialize};

use crate::graph::DependencyGraph;

/// A complete apply order plus the terminal names it relied on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleOrder {
    /// Every registered module exactly once, dependencies first.
    pub chain: Vec<String>,
    /// Referenced names that are not registered modules, sorted.
    pub external: Vec<String>,
}

impl ModuleOrder {
    pub fn new(chain: Vec<String>, graph: &DependencyGraph) -> Self {
        Self {
            chain,
            external: graph.external_references(),
        }
    }

    /// Position of `module` in the apply order.
    pub fn position(&self, module: &str) -> Option<usize> {
        self.chain.iter().position(|m| m == module)
    }

    pub fn len(&self) -> usize {
        self.chain.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }
}
