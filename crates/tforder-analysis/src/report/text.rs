//! Plain-text chains.

use super::Reporter;
use crate::graph::DependencyGraph;
use crate::order::ModuleOrder;

/// Apply order from base to most derived: `vpc > db > app`.
pub fn format_chain<S: AsRef<str>>(chain: &[S]) -> String {
    join(chain, " > ")
}

/// Dependency trace, each entry depending on the next: `app < db < vpc`.
pub fn format_dep_chain<S: AsRef<str>>(chain: &[S]) -> String {
    join(chain, " < ")
}

fn join<S: AsRef<str>>(chain: &[S], separator: &str) -> String {
    chain
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<&str>>()
        .join(separator)
}

/// `base > ... > most-derived`
pub struct ChainReporter;

impl Reporter for ChainReporter {
    fn name(&self) -> &'static str {
        "chain"
    }

    fn generate(&self, _graph: &DependencyGraph, order: &ModuleOrder) -> Result<String, String> {
        Ok(format_chain(&order.chain))
    }
}

/// `most-derived < ... < base`
pub struct DepsReporter;

impl Reporter for DepsReporter {
    fn name(&self) -> &'static str {
        "deps"
    }

    fn generate(&self, _graph: &DependencyGraph, order: &ModuleOrder) -> Result<String, String> {
        let reversed: Vec<&str> = order.chain.iter().rev().map(String::as_str).collect();
        Ok(format_dep_chain(&reversed))
    }
}
