//! Finds `terraform_remote_state` data sources in module sources.
//!
//! Only the data source label is read: `data "terraform_remote_state" "vpc"`
//! means the module reads the state of module `vpc`. No HCL parsing happens,
//! so a declaration inside a comment still counts.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tforder_core::errors::ScanError;
use tforder_core::types::collections::ReferenceSet;

static REMOTE_STATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"data "terraform_remote_state" "(\w+)""#)
        .expect("remote state pattern is valid")
});

/// References found in one file, attributed to its module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileReferences {
    pub module: String,
    pub path: PathBuf,
    pub references: ReferenceSet,
}

/// Every remote-state name declared in `content`, de-duplicated.
pub fn extract_remote_states(content: &str) -> ReferenceSet {
    REMOTE_STATE_RE
        .captures_iter(content)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Read `path` and extract its remote-state names.
pub fn extract_file(path: &Path) -> Result<ReferenceSet, ScanError> {
    let content = std::fs::read_to_string(path).map_err(|source| ScanError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(extract_remote_states(&content))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_all_declarations() {
        let content = r#"
data "terraform_remote_state" "vpc" {
  backend = "s3"
}

data "terraform_remote_state" "iam_roles" {
  backend = "s3"
}

data "aws_caller_identity" "current" {}
"#;
        let refs = extract_remote_states(content);
        assert_eq!(
            refs.into_iter().collect::<Vec<_>>(),
            vec!["iam_roles".to_string(), "vpc".to_string()]
        );
    }

    #[test]
    fn test_duplicates_collapse() {
        let content = "data \"terraform_remote_state\" \"dns\" {}\ndata \"terraform_remote_state\" \"dns\" {}\n";
        assert_eq!(extract_remote_states(content).len(), 1);
    }

    #[test]
    fn test_spacing_must_match_exactly() {
        let content = "data  \"terraform_remote_state\" \"vpc\" {}\ndata \"terraform_remote_state\"\t\"db\" {}";
        assert!(extract_remote_states(content).is_empty());
    }

    #[test]
    fn test_label_stops_at_non_word_character() {
        let content = "data \"terraform_remote_state\" \"net-core\" {}";
        assert!(extract_remote_states(content).is_empty());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = extract_file(Path::new("/definitely/not/here.tf")).unwrap_err();
        assert!(matches!(err, ScanError::Io { .. }));
    }
}
