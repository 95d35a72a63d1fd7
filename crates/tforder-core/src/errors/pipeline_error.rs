//! Pipeline errors.

use super::error_code::TforderErrorCode;
use super::{ConfigError, ResolveError, ScanError};

/// Errors that can occur during a full analysis run.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error(transparent)]
    Scan(#[from] ScanError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl TforderErrorCode for PipelineError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Scan(e) => e.error_code(),
            Self::Resolve(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}
