//! Error handling for tforder.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod error_code;
pub mod pipeline_error;
pub mod resolve_error;
pub mod scan_error;

pub use config_error::ConfigError;
pub use error_code::TforderErrorCode;
pub use pipeline_error::PipelineError;
pub use resolve_error::ResolveError;
pub use scan_error::ScanError;
