//! Graphviz DOT reporter.

use std::fmt::Write;

use petgraph::visit::EdgeRef;

use super::Reporter;
use crate::graph::DependencyGraph;
use crate::order::ModuleOrder;

/// Renders the dependency graph as a `digraph`. Edges point from a module to
/// the module whose state it reads; external modules are dashed.
pub struct DotReporter;

impl Reporter for DotReporter {
    fn name(&self) -> &'static str {
        "dot"
    }

    fn generate(&self, graph: &DependencyGraph, _order: &ModuleOrder) -> Result<String, String> {
        let exported = graph.to_petgraph();
        let mut out = String::from("digraph modules {\n    rankdir=BT;\n");

        for index in exported.node_indices() {
            let node = &exported[index];
            let style = if node.external { " style=dashed" } else { "" };
            writeln!(out, "    n{} [label=\"{}\"{}];", index.index(), escape(&node.name), style)
                .map_err(|e| e.to_string())?;
        }
        for edge in exported.edge_references() {
            writeln!(out, "    n{} -> n{};", edge.source().index(), edge.target().index())
                .map_err(|e| e.to_string())?;
        }
        out.push_str("}\n");
        Ok(out)
    }
}

fn escape(label: &str) -> String {
    label.replace('\\', "\\\\").replace('"', "\\\"")
}
