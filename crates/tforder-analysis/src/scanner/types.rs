//! Scanner data types.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A module source file and the directory that defines its module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscoveredFile {
    pub module_dir: PathBuf,
    pub path: PathBuf,
}

/// Counters gathered while walking.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscoveryStats {
    pub files_found: usize,
    pub dirs_excluded: usize,
    pub discovery_ms: u64,
}
