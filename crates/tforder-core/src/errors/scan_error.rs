//! Scanner errors.

use std::path::PathBuf;

use super::error_code::{self, TforderErrorCode};

/// Errors that can occur while discovering and reading module files.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("IO error scanning {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Unable to extract module name from directory {dir}")]
    ModuleNameUnresolvable { dir: PathBuf },

    #[error("File {path} is {size} bytes, over the scan.max_file_size limit of {max}")]
    FileTooLarge { path: PathBuf, size: u64, max: u64 },

    #[error("Directory walk failed: {message}")]
    Walk { message: String },
}

impl TforderErrorCode for ScanError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::ModuleNameUnresolvable { .. } => error_code::MODULE_NAME_UNRESOLVABLE,
            _ => error_code::SCAN_ERROR,
        }
    }
}
