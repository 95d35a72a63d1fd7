//! Dependency graph: module name → remote-state names it reads.

pub mod dependency_graph;
pub mod export;
pub mod shared;

pub use dependency_graph::DependencyGraph;
pub use shared::SharedGraphBuilder;
