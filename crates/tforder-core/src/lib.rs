//! tforder-core: errors, configuration, tracing setup, and shared collection
//! types used by every crate in the tforder workspace.

pub mod config;
pub mod errors;
pub mod tracing;
pub mod types;
