//! Stable error codes for machine-readable output.

/// Every error enum implements this to expose a stable code string that
/// survives changes to the human-readable message.
pub trait TforderErrorCode {
    /// Returns the error code string (e.g., "SCAN_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const SCAN_ERROR: &str = "SCAN_ERROR";
pub const MODULE_NAME_UNRESOLVABLE: &str = "MODULE_NAME_UNRESOLVABLE";
pub const CYCLIC_DEPENDENCY: &str = "CYCLIC_DEPENDENCY";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
