//! Scanner configuration.

use serde::{Deserialize, Serialize};

/// Directory names skipped when no exclusion list is configured.
pub const DEFAULT_EXCLUDED_DIRS: &[&str] = &[".git", ".terraform"];

/// Configuration for module file discovery.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ScanConfig {
    /// Directory names never descended into, matched at any depth.
    /// Default: `.git`, `.terraform`. An explicit empty list disables exclusion.
    pub exclude: Option<Vec<String>>,
    /// File extension of module sources, without the dot. Default: `tf`.
    pub extension: Option<String>,
    /// A module file larger than this fails the scan. Default: 10 MiB.
    pub max_file_size: Option<u64>,
    /// Worker threads for reading files (0 = auto). Default: 0.
    pub threads: Option<usize>,
    /// Follow symbolic links while walking. Default: false.
    pub follow_symlinks: Option<bool>,
    /// Honor `.gitignore` and skip hidden entries. Default: false.
    pub respect_gitignore: Option<bool>,
}

impl ScanConfig {
    pub fn effective_exclude(&self) -> Vec<String> {
        match &self.exclude {
            Some(dirs) => dirs.clone(),
            None => DEFAULT_EXCLUDED_DIRS.iter().map(|d| d.to_string()).collect(),
        }
    }

    pub fn effective_extension(&self) -> &str {
        self.extension.as_deref().unwrap_or("tf")
    }

    pub fn effective_max_file_size(&self) -> u64 {
        self.max_file_size.unwrap_or(10 * 1024 * 1024)
    }

    pub fn effective_threads(&self) -> usize {
        self.threads.unwrap_or(0)
    }

    pub fn effective_follow_symlinks(&self) -> bool {
        self.follow_symlinks.unwrap_or(false)
    }

    pub fn effective_respect_gitignore(&self) -> bool {
        self.respect_gitignore.unwrap_or(false)
    }
}
