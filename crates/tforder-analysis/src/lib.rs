//! tforder-analysis: finds Terraform modules that read each other's remote
//! state and computes the order in which they must be applied.
//!
//! - Scanner: walks a tree of module directories, skipping excluded ones
//! - Extractor: pulls `terraform_remote_state` names out of module sources
//! - Graph: folds per-file observations into one ordered dependency mapping
//! - Order: depth-first resolution into an apply order, with cycle reporting
//! - Report: renders the order as text, JSON, or Graphviz DOT

pub mod extractor;
pub mod graph;
pub mod order;
pub mod pipeline;
pub mod report;
pub mod scanner;

pub use graph::{DependencyGraph, SharedGraphBuilder};
pub use order::{resolve_order, ModuleOrder};
pub use pipeline::{analyze, Analysis, AnalysisStats};
