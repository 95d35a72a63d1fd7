//! Top-level tforder configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{AnalysisConfig, OutputConfig, OutputFormat, ScanConfig};
use crate::errors::ConfigError;

/// File name of the project-level config, looked up in the start path.
pub const PROJECT_CONFIG_FILE: &str = "tforder.toml";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`TFORDER_*`)
/// 3. Project config (`tforder.toml` in the start path, or an explicit file)
/// 4. User config (`~/.tforder/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TforderConfig {
    pub scan: ScanConfig,
    pub analysis: AnalysisConfig,
    pub output: OutputConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub exclude: Option<Vec<String>>,
    pub threads: Option<usize>,
    pub format: Option<OutputFormat>,
    pub warn_unresolved: Option<bool>,
}

impl TforderConfig {
    /// Load configuration with layered resolution.
    ///
    /// `explicit_config` replaces the project config lookup and must exist.
    pub fn load(
        root: &Path,
        explicit_config: Option<&Path>,
        cli_overrides: Option<&CliOverrides>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // User config: a broken file is fatal, a missing one is not.
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                Self::merge_toml_file(&mut config, &user_config_path)?;
            }
        }

        match explicit_config {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::FileNotFound {
                        path: path.display().to_string(),
                    });
                }
                Self::merge_toml_file(&mut config, path)?;
            }
            None => {
                let project_config_path = root.join(PROJECT_CONFIG_FILE);
                if project_config_path.is_file() {
                    Self::merge_toml_file(&mut config, &project_config_path)?;
                }
            }
        }

        Self::apply_env_overrides(&mut config);

        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        ::tracing::debug!(?config, "configuration resolved");
        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &TforderConfig) -> Result<(), ConfigError> {
        if let Some(ref extension) = config.scan.extension {
            if extension.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "scan.extension".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
            if extension.starts_with('.') {
                return Err(ConfigError::ValidationFailed {
                    field: "scan.extension".to_string(),
                    message: "must not start with '.'".to_string(),
                });
            }
        }
        if config.scan.max_file_size == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "scan.max_file_size".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if let Some(ref exclude) = config.scan.exclude {
            if let Some(bad) = exclude.iter().find(|d| d.is_empty() || d.contains('/')) {
                return Err(ConfigError::ValidationFailed {
                    field: "scan.exclude".to_string(),
                    message: format!("'{bad}' is not a directory name"),
                });
            }
        }
        Ok(())
    }

    /// Returns the user config path: `~/.tforder/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(".tforder").join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    fn merge_toml_file(config: &mut TforderConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: TforderConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins wherever it has a value.
    fn merge(base: &mut TforderConfig, other: &TforderConfig) {
        // Scan
        if other.scan.exclude.is_some() {
            base.scan.exclude = other.scan.exclude.clone();
        }
        if other.scan.extension.is_some() {
            base.scan.extension = other.scan.extension.clone();
        }
        if other.scan.max_file_size.is_some() {
            base.scan.max_file_size = other.scan.max_file_size;
        }
        if other.scan.threads.is_some() {
            base.scan.threads = other.scan.threads;
        }
        if other.scan.follow_symlinks.is_some() {
            base.scan.follow_symlinks = other.scan.follow_symlinks;
        }
        if other.scan.respect_gitignore.is_some() {
            base.scan.respect_gitignore = other.scan.respect_gitignore;
        }

        // Analysis
        if other.analysis.warn_unresolved.is_some() {
            base.analysis.warn_unresolved = other.analysis.warn_unresolved;
        }

        // Output
        if other.output.format.is_some() {
            base.output.format = other.output.format;
        }
    }

    /// Apply environment variable overrides.
    /// Unparseable values are ignored with a warning.
    fn apply_env_overrides(config: &mut TforderConfig) {
        if let Ok(val) = std::env::var("TFORDER_SCAN_EXCLUDE") {
            config.scan.exclude = Some(split_list(&val));
        }
        if let Ok(val) = std::env::var("TFORDER_SCAN_EXTENSION") {
            config.scan.extension = Some(val);
        }
        if let Ok(val) = std::env::var("TFORDER_SCAN_THREADS") {
            match val.parse::<usize>() {
                Ok(v) => config.scan.threads = Some(v),
                Err(_) => ::tracing::warn!(value = %val, "ignoring invalid TFORDER_SCAN_THREADS"),
            }
        }
        if let Ok(val) = std::env::var("TFORDER_ANALYSIS_WARN_UNRESOLVED") {
            match val.parse::<bool>() {
                Ok(v) => config.analysis.warn_unresolved = Some(v),
                Err(_) => ::tracing::warn!(
                    value = %val,
                    "ignoring invalid TFORDER_ANALYSIS_WARN_UNRESOLVED"
                ),
            }
        }
        if let Ok(val) = std::env::var("TFORDER_OUTPUT_FORMAT") {
            match val.parse::<OutputFormat>() {
                Ok(v) => config.output.format = Some(v),
                Err(e) => ::tracing::warn!(error = %e, "ignoring invalid TFORDER_OUTPUT_FORMAT"),
            }
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut TforderConfig, cli: &CliOverrides) {
        if let Some(ref v) = cli.exclude {
            config.scan.exclude = Some(v.clone());
        }
        if let Some(v) = cli.threads {
            config.scan.threads = Some(v);
        }
        if let Some(v) = cli.format {
            config.output.format = Some(v);
        }
        if let Some(v) = cli.warn_unresolved {
            config.analysis.warn_unresolved = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Split a comma-delimited list, dropping blank entries.
pub fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
