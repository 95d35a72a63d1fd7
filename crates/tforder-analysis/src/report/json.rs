//! JSON reporter: structured, machine-readable output.

use serde_json::json;

use super::Reporter;
use crate::graph::DependencyGraph;
use crate::order::ModuleOrder;

/// Emits the apply order, each module's references, and the external names.
pub struct JsonReporter;

impl Reporter for JsonReporter {
    fn name(&self) -> &'static str {
        "json"
    }

    fn generate(&self, graph: &DependencyGraph, order: &ModuleOrder) -> Result<String, String> {
        let modules: Vec<serde_json::Value> = graph
            .iter()
            .map(|(module, references)| {
                json!({
                    "name": module,
                    "position": order.position(module),
                    "references": references,
                })
            })
            .collect();

        let output = json!({
            "order": order.chain,
            "module_count": graph.len(),
            "modules": modules,
            "external": order.external,
        });

        serde_json::to_string_pretty(&output).map_err(|e| e.to_string())
    }
}
