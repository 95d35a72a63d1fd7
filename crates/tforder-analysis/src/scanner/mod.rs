//! Scanner subsystem: module file discovery and module naming.

pub mod module_name;
pub mod types;
pub mod walker;

pub use module_name::module_name_for_dir;
pub use types::{DiscoveredFile, DiscoveryStats};
pub use walker::Scanner;
