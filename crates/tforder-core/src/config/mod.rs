//! Configuration system for tforder.
//! TOML-based, layered resolution: CLI > env > project > user > defaults.

pub mod analysis_config;
pub mod output_config;
pub mod scan_config;
pub mod tforder_config;

pub use analysis_config::AnalysisConfig;
pub use output_config::{OutputConfig, OutputFormat};
pub use scan_config::ScanConfig;
pub use tforder_config::{CliOverrides, TforderConfig};
