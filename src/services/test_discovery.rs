use crate::utils::{contains_marker, list_directory_entries};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// File names containing this substring are test headers
pub const TEST_HEADER_MARKER: &str = "test.hpp";

/// Pure predicate: is `path` a test header by name?
pub fn is_test_header(path: &Path) -> bool {
    contains_marker(path, TEST_HEADER_MARKER)
}

/// List the test headers directly inside `location`.
///
/// Only regular files whose name contains [`TEST_HEADER_MARKER`] are kept.
/// Paths are made absolute against the current directory without resolving
/// symlinks, and come back in enumeration order.
pub fn locate_tests<P: AsRef<Path>>(location: P) -> Result<Vec<PathBuf>> {
    let location = location.as_ref();
    info!("Locating test headers in {}", location.display());

    let headers = list_directory_entries(location)?
        .into_iter()
        .filter(|path| path.is_file() && is_test_header(path))
        .map(|path| {
            std::path::absolute(&path)
                .with_context(|| format!("Failed to make path absolute: {:?}", path))
        })
        .collect::<Result<Vec<PathBuf>>>()?;

    for header in &headers {
        debug!("Found test header {}", header.display());
    }
    info!("Found {} test headers", headers.len());

    Ok(headers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::HeaderSyncError;
    use std::fs;
    use tempfile::TempDir;

    fn names(paths: &[PathBuf]) -> Vec<String> {
        let mut names: Vec<String> = paths
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_is_test_header() {
        assert!(is_test_header(Path::new("avl.test.hpp")));
        assert!(is_test_header(Path::new("foo_test.hpp")));
        assert!(!is_test_header(Path::new("test.cpp")));
        assert!(!is_test_header(Path::new("avl.hpp")));
    }

    #[test]
    fn test_locate_tests_substring_match() {
        let dir = TempDir::new().unwrap();
        for name in ["foo_test.hpp", "bar.cpp", "baz_test.hpp.bak"] {
            fs::write(dir.path().join(name), name).unwrap();
        }

        let found = locate_tests(dir.path()).unwrap();

        assert_eq!(names(&found), vec!["baz_test.hpp.bak", "foo_test.hpp"]);
        assert!(found.iter().all(|p| p.is_absolute()));
    }

    #[test]
    fn test_locate_tests_skips_directories_and_nested_files() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("dir.test.hpp")).unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested").join("deep.test.hpp"), "").unwrap();
        fs::write(dir.path().join("top.test.hpp"), "").unwrap();

        let found = locate_tests(dir.path()).unwrap();

        assert_eq!(names(&found), vec!["top.test.hpp"]);
    }

    #[test]
    fn test_locate_tests_empty_directory() {
        let dir = TempDir::new().unwrap();
        assert!(locate_tests(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn test_locate_tests_missing_directory() {
        let dir = TempDir::new().unwrap();
        let err = locate_tests(dir.path().join("nope")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<HeaderSyncError>(),
            Some(HeaderSyncError::DirectoryNotFound(_))
        ));
    }
}
