//! Tests for the tforder error types.

use std::collections::HashSet;
use std::path::PathBuf;

use tforder_core::errors::error_code::{self, TforderErrorCode};
use tforder_core::errors::*;

fn cycle(names: &[&str]) -> ResolveError {
    ResolveError::CycleDetected {
        chain: names.iter().map(|n| n.to_string()).collect(),
    }
}

#[test]
fn test_cycle_message_renders_dependency_chain() {
    let err = cycle(&["a", "b", "c", "a"]);
    assert_eq!(err.to_string(), "Found cyclic dependencies: a < b < c < a");
    assert_eq!(err.chain(), ["a", "b", "c", "a"]);
}

#[test]
fn test_self_cycle_message() {
    let err = cycle(&["vpc", "vpc"]);
    assert_eq!(err.to_string(), "Found cyclic dependencies: vpc < vpc");
}

#[test]
fn test_module_name_error_names_directory() {
    let err = ScanError::ModuleNameUnresolvable {
        dir: PathBuf::from("infra"),
    };
    assert_eq!(
        err.to_string(),
        "Unable to extract module name from directory infra"
    );
    assert_eq!(err.error_code(), error_code::MODULE_NAME_UNRESOLVABLE);
}

#[test]
fn test_all_errors_have_error_code() {
    let scan = ScanError::Walk {
        message: "loop".into(),
    };
    assert!(!scan.error_code().is_empty());

    let resolve = cycle(&["a", "a"]);
    assert!(!resolve.error_code().is_empty());

    let config = ConfigError::FileNotFound {
        path: "/tmp/x.toml".into(),
    };
    assert!(!config.error_code().is_empty());
}

#[test]
fn test_from_conversions() {
    let pipeline: PipelineError = cycle(&["a", "a"]).into();
    assert!(matches!(pipeline, PipelineError::Resolve(_)));
    assert_eq!(pipeline.error_code(), error_code::CYCLIC_DEPENDENCY);

    let pipeline: PipelineError = ScanError::Io {
        path: PathBuf::from("main.tf"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
    }
    .into();
    assert!(matches!(pipeline, PipelineError::Scan(_)));
    assert_eq!(pipeline.error_code(), error_code::SCAN_ERROR);

    let pipeline: PipelineError = ConfigError::ValidationFailed {
        field: "scan.extension".into(),
        message: "must not be empty".into(),
    }
    .into();
    assert!(matches!(pipeline, PipelineError::Config(_)));
    assert_eq!(pipeline.error_code(), error_code::CONFIG_ERROR);
}

#[test]
fn test_oversized_file_error() {
    let err = ScanError::FileTooLarge {
        path: PathBuf::from("live/app/main.tf"),
        size: 241,
        max: 100,
    };
    assert_eq!(
        err.coded_string(),
        "[SCAN_ERROR] File live/app/main.tf is 241 bytes, over the scan.max_file_size limit of 100"
    );
}

#[test]
fn test_pipeline_error_is_transparent() {
    let inner = cycle(&["a", "b", "a"]);
    let message = inner.to_string();
    let pipeline: PipelineError = inner.into();
    assert_eq!(pipeline.to_string(), message);
}

#[test]
fn test_coded_string_format() {
    let err = cycle(&["x", "x"]);
    assert_eq!(
        err.coded_string(),
        "[CYCLIC_DEPENDENCY] Found cyclic dependencies: x < x"
    );
}

#[test]
fn test_error_codes_unique() {
    let codes: HashSet<&str> = [
        error_code::SCAN_ERROR,
        error_code::MODULE_NAME_UNRESOLVABLE,
        error_code::CYCLIC_DEPENDENCY,
        error_code::CONFIG_ERROR,
    ]
    .into_iter()
    .collect();
    assert_eq!(codes.len(), 4);
}
