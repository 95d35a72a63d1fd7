//! Module naming: a module is named after the last component of the
//! directory that holds its sources.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tforder_core::errors::ScanError;

static MODULE_DIR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r".+/(\w+)").expect("module directory pattern is valid"));

/// Derive the module name for `dir`.
///
/// The name is the first `\w+` run after the last `/` that has at least one
/// character before it, so `./network/vpc` yields `vpc` and `envs/prod-eu`
/// yields `prod`. A directory with no such separator (for example a bare
/// start path like `infra`) has no name.
pub fn module_name_for_dir(dir: &Path) -> Result<String, ScanError> {
    let display = dir.to_string_lossy().replace('\\', "/");
    MODULE_DIR_RE
        .captures(&display)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| ScanError::ModuleNameUnresolvable {
            dir: dir.to_path_buf(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(dir: &str) -> Option<String> {
        module_name_for_dir(Path::new(dir)).ok()
    }

    #[test]
    fn test_last_component_is_the_name() {
        assert_eq!(name("./vpc").as_deref(), Some("vpc"));
        assert_eq!(name("./network/vpc").as_deref(), Some("vpc"));
        assert_eq!(name("/abs/path/to/eks_cluster").as_deref(), Some("eks_cluster"));
    }

    #[test]
    fn test_name_stops_at_non_word_character() {
        assert_eq!(name("envs/prod-eu").as_deref(), Some("prod"));
    }

    #[test]
    fn test_windows_separators_are_normalized() {
        assert_eq!(name(r"infra\dns").as_deref(), Some("dns"));
    }

    #[test]
    fn test_unnamed_directories() {
        assert_eq!(name("infra"), None);
        assert_eq!(name("./"), None);
        assert_eq!(name("/"), None);
    }

    #[test]
    fn test_error_carries_directory() {
        match module_name_for_dir(Path::new("infra")) {
            Err(ScanError::ModuleNameUnresolvable { dir }) => assert_eq!(dir, Path::new("infra")),
            other => panic!("expected ModuleNameUnresolvable, got {other:?}"),
        }
    }
}
