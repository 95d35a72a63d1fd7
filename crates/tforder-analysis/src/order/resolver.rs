//! Depth-first, post-order resolution of the apply order.
//!
//! Every registered module is used as a traversal root in key order. A module
//! is emitted only after all of its registered dependencies, and is emitted
//! once no matter how many paths reach it. Names that are not registered are
//! terminal: they satisfy the reference and emit nothing.
//!
//! The traversal keeps its own stack instead of recursing, so arbitrarily
//! long dependency chains cannot exhaust the native stack. The stack doubles
//! as the current path: a module found on it again closes a cycle.

use std::collections::btree_set;

use rustc_hash::FxHashSet;
use tforder_core::errors::ResolveError;
use tracing::{debug, instrument, trace};

use crate::graph::DependencyGraph;

/// A module being expanded, with the references still to visit.
struct Frame<'g> {
    module: &'g str,
    pending: btree_set::Iter<'g, String>,
}

/// Traversal state for a single resolution.
struct Resolver<'g> {
    graph: &'g DependencyGraph,
    /// Current path, root first.
    path: Vec<Frame<'g>>,
    on_path: FxHashSet<&'g str>,
    /// Modules already emitted.
    done: FxHashSet<&'g str>,
    chain: Vec<String>,
}

impl<'g> Resolver<'g> {
    fn new(graph: &'g DependencyGraph) -> Self {
        Self {
            graph,
            path: Vec::new(),
            on_path: FxHashSet::default(),
            done: FxHashSet::default(),
            chain: Vec::with_capacity(graph.len()),
        }
    }

    fn run(mut self) -> Result<Vec<String>, ResolveError> {
        let graph = self.graph;
        for root in graph.modules() {
            self.visit(root)?;
            self.drain()?;
        }
        Ok(self.chain)
    }

    /// Step into `module`, pushing it on the path if it needs expanding.
    fn visit(&mut self, module: &'g str) -> Result<(), ResolveError> {
        if self.on_path.contains(module) {
            return Err(self.cycle_through(module));
        }
        if self.done.contains(module) {
            return Ok(());
        }
        let graph = self.graph;
        let Some(references) = graph.references(module) else {
            trace!(module, "terminal reference");
            return Ok(());
        };
        self.on_path.insert(module);
        self.path.push(Frame {
            module,
            pending: references.iter(),
        });
        Ok(())
    }

    /// Expand frames until the path is empty again.
    fn drain(&mut self) -> Result<(), ResolveError> {
        while let Some(frame) = self.path.last_mut() {
            match frame.pending.next() {
                Some(dependency) => self.visit(dependency)?,
                None => {
                    let module = frame.module;
                    self.path.pop();
                    self.on_path.remove(module);
                    self.done.insert(module);
                    trace!(module, position = self.chain.len(), "emitted");
                    self.chain.push(module.to_string());
                }
            }
        }
        Ok(())
    }

    /// `module` followed by the current path, most recent first. Each entry
    /// is referenced by the next; the entries up to the second occurrence of
    /// `module` form the cycle, the rest is the path that led into it.
    fn cycle_through(&self, module: &'g str) -> ResolveError {
        let chain = std::iter::once(module)
            .chain(self.path.iter().rev().map(|frame| frame.module))
            .map(str::to_string)
            .collect();
        ResolveError::CycleDetected { chain }
    }
}

/// Compute an apply order for every module in `graph`.
///
/// For every module M and every registered module D that M references, D
/// comes before M. Fails on the first cycle found, reporting the complete
/// chain of modules that form it.
#[instrument(skip_all, fields(modules = graph.len()))]
pub fn resolve_order(graph: &DependencyGraph) -> Result<Vec<String>, ResolveError> {
    let result = Resolver::new(graph).run();
    match &result {
        Ok(chain) => debug!(length = chain.len(), "apply order resolved"),
        Err(e) => debug!(error = %e, "resolution failed"),
    }
    result
}
