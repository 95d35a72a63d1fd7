//! Structured span field names shared across subsystems, so log queries can
//! rely on one spelling.

/// Scanner: number of module files discovered.
pub const FILES_DISCOVERED: &str = "files_discovered";

/// Scanner: file discovery phase duration in milliseconds.
pub const DISCOVERY_DURATION: &str = "discovery_duration_ms";

/// Extractor: reading and pattern extraction duration in milliseconds.
pub const EXTRACTION_DURATION: &str = "extraction_duration_ms";

/// Graph: number of modules registered.
pub const MODULE_COUNT: &str = "module_count";

/// Graph: number of remote-state references across all modules.
pub const EDGE_COUNT: &str = "edge_count";

/// Graph: number of referenced modules that are not defined locally.
pub const EXTERNAL_COUNT: &str = "external_count";

/// Resolver: order resolution duration in milliseconds.
pub const RESOLVE_DURATION: &str = "resolve_duration_ms";
