//! Module file discovery.
//!
//! Walks the start path with the `ignore` crate, pruning excluded directory
//! names at any depth, and yields every module source file together with the
//! directory it lives in. A file belongs to a module when its name ends in
//! `.<extension>`, so a file named just `.tf` counts. Entries are visited in
//! file-name order so the discovery order (and therefore the module order) is
//! reproducible.

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Instant;

use ignore::WalkBuilder;
use rustc_hash::FxHashSet;
use tforder_core::config::ScanConfig;
use tforder_core::errors::ScanError;
use tracing::{debug, instrument, warn};

use super::types::{DiscoveredFile, DiscoveryStats};

/// Discovers module source files below a start path.
#[derive(Debug, Clone, Default)]
pub struct Scanner {
    config: ScanConfig,
}

impl Scanner {
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    /// Walk `root` and return the module files in discovery order.
    ///
    /// A module file over `scan.max_file_size` fails the walk: skipping it
    /// would silently drop its module or its references from the order.
    #[instrument(skip_all, fields(root = %root.display()))]
    pub fn discover(&self, root: &Path) -> Result<(Vec<DiscoveredFile>, DiscoveryStats), ScanError> {
        let start = Instant::now();

        let metadata = std::fs::metadata(root).map_err(|source| ScanError::Io {
            path: root.to_path_buf(),
            source,
        })?;
        if !metadata.is_dir() {
            return Err(ScanError::Io {
                path: root.to_path_buf(),
                source: std::io::Error::new(std::io::ErrorKind::InvalidInput, "not a directory"),
            });
        }

        let excluded: FxHashSet<String> = self.config.effective_exclude().into_iter().collect();
        let dirs_excluded = Arc::new(AtomicUsize::new(0));
        let suffix = format!(".{}", self.config.effective_extension());
        let max_file_size = self.config.effective_max_file_size();
        let respect_gitignore = self.config.effective_respect_gitignore();

        let mut builder = WalkBuilder::new(root);
        builder
            .standard_filters(respect_gitignore)
            .follow_links(self.config.effective_follow_symlinks())
            .sort_by_file_name(|a, b| a.cmp(b));
        if respect_gitignore {
            builder.require_git(false);
        }
        {
            let dirs_excluded = Arc::clone(&dirs_excluded);
            builder.filter_entry(move |entry| {
                let is_dir = entry.file_type().is_some_and(|t| t.is_dir());
                if is_dir && entry.depth() > 0 {
                    let name = entry.file_name().to_string_lossy();
                    if excluded.contains(name.as_ref()) {
                        dirs_excluded.fetch_add(1, Ordering::Relaxed);
                        return false;
                    }
                }
                true
            });
        }

        let mut files = Vec::new();

        for result in builder.build() {
            let entry = match result {
                Ok(entry) => entry,
                Err(e) => {
                    warn!(error = %e, "skipping unreadable entry");
                    continue;
                }
            };
            if !entry.file_type().is_some_and(|t| t.is_file()) {
                continue;
            }
            let path = entry.path();
            if !entry.file_name().to_string_lossy().ends_with(&suffix) {
                continue;
            }

            let size = entry
                .metadata()
                .map(|m| m.len())
                .map_err(|e| ScanError::Walk {
                    message: format!("{}: {e}", path.display()),
                })?;
            if size > max_file_size {
                return Err(ScanError::FileTooLarge {
                    path: path.to_path_buf(),
                    size,
                    max: max_file_size,
                });
            }

            let Some(module_dir) = path.parent() else {
                continue;
            };
            debug!(path = %path.display(), "discovered module file");
            files.push(DiscoveredFile {
                module_dir: module_dir.to_path_buf(),
                path: path.to_path_buf(),
            });
        }

        let stats = DiscoveryStats {
            files_found: files.len(),
            dirs_excluded: dirs_excluded.load(Ordering::Relaxed),
            discovery_ms: start.elapsed().as_millis() as u64,
        };
        debug!(?stats, "discovery finished");
        Ok((files, stats))
    }
}
