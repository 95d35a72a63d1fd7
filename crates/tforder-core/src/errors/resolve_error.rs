//! Order resolution errors.

use super::error_code::{self, TforderErrorCode};

/// Errors raised while computing the apply order.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    /// Each module in `chain` has its remote state read by the next one.
    /// It starts with the repeated module and runs back along the traversal
    /// path, so the cycle closes where that module appears again.
    #[error("Found cyclic dependencies: {}", chain.join(" < "))]
    CycleDetected { chain: Vec<String> },
}

impl ResolveError {
    /// The offending chain of a cycle error.
    pub fn chain(&self) -> &[String] {
        match self {
            Self::CycleDetected { chain } => chain,
        }
    }
}

impl TforderErrorCode for ResolveError {
    fn error_code(&self) -> &'static str {
        error_code::CYCLIC_DEPENDENCY
    }
}
