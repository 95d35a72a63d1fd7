//! Conversion to a `petgraph` graph for rendering.

use petgraph::graph::{DiGraph, NodeIndex};
use rustc_hash::FxHashMap;

use super::DependencyGraph;

/// Node payload of an exported graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleNode {
    pub name: String,
    /// Referenced but never registered.
    pub external: bool,
}

impl std::fmt::Display for ModuleNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

impl DependencyGraph {
    /// Build a directed graph with an edge from each module to every module
    /// whose state it reads. Registered modules come first in key order,
    /// followed by external names in order of first reference.
    pub fn to_petgraph(&self) -> DiGraph<ModuleNode, ()> {
        let mut graph = DiGraph::with_capacity(self.len(), self.edge_count());
        let mut index: FxHashMap<&str, NodeIndex> = FxHashMap::default();

        for module in self.modules() {
            let node = graph.add_node(ModuleNode {
                name: module.to_string(),
                external: false,
            });
            index.insert(module, node);
        }
        for (module, references) in self.iter() {
            let from = index[module];
            for reference in references {
                if !self.contains(reference) && !index.contains_key(reference.as_str()) {
                    let node = graph.add_node(ModuleNode {
                        name: reference.clone(),
                        external: true,
                    });
                    index.insert(reference.as_str(), node);
                }
            }
            for reference in references {
                graph.add_edge(from, index[reference.as_str()], ());
            }
        }
        graph
    }
}
