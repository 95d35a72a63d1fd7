//! Observability for tforder.
//! `tracing` crate with `EnvFilter`, per-subsystem log levels.

pub mod metrics;
pub mod setup;

pub use setup::{build_filter, init_tracing, init_tracing_with_default};
