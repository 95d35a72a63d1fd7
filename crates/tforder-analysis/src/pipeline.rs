//! End-to-end analysis: discover module files, extract their remote-state
//! references, build the dependency graph, and resolve the apply order.

use std::path::Path;
use std::time::Instant;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tforder_core::config::TforderConfig;
use tforder_core::errors::{PipelineError, ScanError};
use tforder_core::tracing::metrics;
use tracing::{debug, info, info_span, instrument, warn};

use crate::extractor::{extract_file, FileReferences};
use crate::graph::DependencyGraph;
use crate::order::{resolve_order, ModuleOrder};
use crate::scanner::{module_name_for_dir, DiscoveredFile, Scanner};

/// Everything a run produced.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub graph: DependencyGraph,
    pub order: ModuleOrder,
    pub stats: AnalysisStats,
}

/// Aggregate statistics for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisStats {
    pub files_scanned: usize,
    pub dirs_excluded: usize,
    pub modules: usize,
    pub edges: usize,
    pub external: usize,
    pub discovery_ms: u64,
    pub extraction_ms: u64,
    pub resolve_ms: u64,
}

/// Run the full analysis below `root`.
///
/// Fails on the first unreadable file, the first directory without a module
/// name, or a dependency cycle. There is no partial result.
#[instrument(skip_all, fields(root = %root.display()))]
pub fn analyze(root: &Path, config: &TforderConfig) -> Result<Analysis, PipelineError> {
    let scanner = Scanner::new(config.scan.clone());
    let (files, discovery) = scanner.discover(root)?;
    info!(
        { metrics::FILES_DISCOVERED } = files.len(),
        { metrics::DISCOVERY_DURATION } = discovery.discovery_ms,
        "module files discovered"
    );

    let extraction_start = Instant::now();
    let observations = extract_all(&files, config.scan.effective_threads())?;
    let extraction_ms = extraction_start.elapsed().as_millis() as u64;

    let graph = build_graph(observations);
    let external = graph.external_references();
    info!(
        { metrics::MODULE_COUNT } = graph.len(),
        { metrics::EDGE_COUNT } = graph.edge_count(),
        { metrics::EXTERNAL_COUNT } = external.len(),
        { metrics::EXTRACTION_DURATION } = extraction_ms,
        "dependency graph built"
    );
    if config.analysis.effective_warn_unresolved() {
        for name in &external {
            warn!(module = %name, "referenced module not found under start path, treating as external");
        }
    }

    let resolve_start = Instant::now();
    let chain = resolve_order(&graph)?;
    let resolve_ms = resolve_start.elapsed().as_millis() as u64;
    debug!({ metrics::RESOLVE_DURATION } = resolve_ms, "order resolved");

    let stats = AnalysisStats {
        files_scanned: files.len(),
        dirs_excluded: discovery.dirs_excluded,
        modules: graph.len(),
        edges: graph.edge_count(),
        external: external.len(),
        discovery_ms: discovery.discovery_ms,
        extraction_ms,
        resolve_ms,
    };
    let order = ModuleOrder { chain, external };

    Ok(Analysis {
        graph,
        order,
        stats,
    })
}

/// Name every file's module, then read and scan the files in parallel.
///
/// Module names are checked up front so a naming failure is reported before
/// any file is read. Results keep discovery order.
pub fn extract_all(
    files: &[DiscoveredFile],
    threads: usize,
) -> Result<Vec<FileReferences>, ScanError> {
    let named: Vec<(String, &DiscoveredFile)> = files
        .iter()
        .map(|file| module_name_for_dir(&file.module_dir).map(|module| (module, file)))
        .collect::<Result<_, _>>()?;

    let _span = info_span!("extract", files = named.len()).entered();
    let work = || {
        named
            .par_iter()
            .map(|(module, file)| {
                extract_file(&file.path).map(|references| FileReferences {
                    module: module.clone(),
                    path: file.path.clone(),
                    references,
                })
            })
            .collect::<Result<Vec<_>, _>>()
    };

    if threads == 0 {
        return work();
    }
    match rayon::ThreadPoolBuilder::new().num_threads(threads).build() {
        Ok(pool) => pool.install(work),
        Err(e) => {
            warn!(error = %e, threads, "could not build thread pool, using the global pool");
            work()
        }
    }
}

/// Fold observations into a graph in the order given.
pub fn build_graph<I>(observations: I) -> DependencyGraph
where
    I: IntoIterator<Item = FileReferences>,
{
    let mut graph = DependencyGraph::new();
    for observation in observations {
        debug!(
            module = %observation.module,
            path = %observation.path.display(),
            references = observation.references.len(),
            "registering file"
        );
        graph.register(observation.module, observation.references);
    }
    graph
}
