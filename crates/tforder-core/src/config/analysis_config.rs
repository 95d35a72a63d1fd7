//! Analysis configuration.

use serde::{Deserialize, Serialize};

/// Configuration for graph building and order resolution.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Log a warning for every referenced module that was not found locally.
    /// Such modules are still treated as terminal. Default: false.
    pub warn_unresolved: Option<bool>,
}

impl AnalysisConfig {
    pub fn effective_warn_unresolved(&self) -> bool {
        self.warn_unresolved.unwrap_or(false)
    }
}
