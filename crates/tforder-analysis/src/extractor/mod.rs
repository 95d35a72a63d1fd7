//! Remote-state reference extraction.

pub mod remote_state;

pub use remote_state::{extract_file, extract_remote_states, FileReferences};
