//! Reporters: output formats for a resolved apply order.

pub mod dot;
pub mod json;
pub mod text;

use tforder_core::config::OutputFormat;

use crate::graph::DependencyGraph;
use crate::order::ModuleOrder;

pub use text::{format_chain, format_dep_chain};

/// Trait for report generation.
pub trait Reporter: Send + Sync {
    fn name(&self) -> &'static str;
    fn generate(&self, graph: &DependencyGraph, order: &ModuleOrder) -> Result<String, String>;
}

/// Create the reporter for `format`.
pub fn create_reporter(format: OutputFormat) -> Box<dyn Reporter> {
    match format {
        OutputFormat::Chain => Box::new(text::ChainReporter),
        OutputFormat::Deps => Box::new(text::DepsReporter),
        OutputFormat::Json => Box::new(json::JsonReporter),
        OutputFormat::Dot => Box::new(dot::DotReporter),
    }
}
