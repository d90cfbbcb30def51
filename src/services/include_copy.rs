use crate::errors::HeaderSyncError;
use crate::models::{CopiedFile, IncludeCopyReport};
use crate::utils::{ensure_directory, list_directory_entries, read_text, write_text};
use anyhow::Result;
use chrono::Utc;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Target root used when a caller names only the library
pub const DEFAULT_TARGET_ROOT: &str = "lib";

/// Library checkout copied by the stock `include` invocation
pub const DEFAULT_LIBRARY_PATH: &str = "../ts";

/// Target root of the stock `include` invocation
pub const DEFAULT_INCLUDE_TARGET: &str = "test/lib";

const INCLUDE_DIR: &str = "include";

/// Configuration for include copy operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncludeConfig {
    pub library_path: PathBuf,
    pub target_root: PathBuf,
}

impl IncludeConfig {
    /// Copy `library_path` into the default target root
    pub fn new<P: Into<PathBuf>>(library_path: P) -> Self {
        Self {
            library_path: library_path.into(),
            target_root: PathBuf::from(DEFAULT_TARGET_ROOT),
        }
    }
}

impl Default for IncludeConfig {
    fn default() -> Self {
        Self {
            library_path: PathBuf::from(DEFAULT_LIBRARY_PATH),
            target_root: PathBuf::from(DEFAULT_INCLUDE_TARGET),
        }
    }
}

/// Derive the destination directory name from the library root.
/// Pure function: the final path segment with its extension removed.
pub fn library_name(library_path: &Path) -> Result<String> {
    library_path
        .file_stem()
        .map(|stem| stem.to_string_lossy().to_string())
        .ok_or_else(|| HeaderSyncError::MissingLibraryName(library_path.to_path_buf()).into())
}

/// Copy every entry of `<library_path>/include` into `<target_root>/<library name>`.
///
/// The destination directory is created (one level only) before anything is
/// written into it. Entries are copied in enumeration order as UTF-8 text,
/// overwriting files of the same name. The first failure aborts the run:
/// files copied so far stay in place, a directory inside `include` is
/// reported as [`HeaderSyncError::NotAFile`].
pub fn copy_include<P: AsRef<Path>, Q: AsRef<Path>>(
    library_path: P,
    target_root: Q,
) -> Result<IncludeCopyReport> {
    let started_at = Utc::now();
    let library_path = library_path.as_ref();
    let name = library_name(library_path)?;
    let include_dir = library_path.join(INCLUDE_DIR);
    let destination_dir = target_root.as_ref().join(&name);

    info!(
        "Copying includes of library '{}' from {} to {}",
        name,
        include_dir.display(),
        destination_dir.display()
    );

    let created_destination = ensure_directory(&destination_dir)?;
    if created_destination {
        debug!("Created destination directory {}", destination_dir.display());
    }

    let entries = list_directory_entries(&include_dir)?;
    let mut files = Vec::with_capacity(entries.len());

    for source in entries {
        let file_name = source
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        let destination = destination_dir.join(file_name);

        let content = read_text(&source)?;
        write_text(&destination, &content)?;

        debug!("Copied {} -> {}", source.display(), destination.display());
        files.push(CopiedFile::new(source, destination, &content));
    }

    let report = IncludeCopyReport {
        library_name: name,
        destination_dir,
        created_destination,
        files,
        started_at,
        finished_at: Utc::now(),
    };

    info!(
        "Include copy completed. Files: {}, Bytes: {}",
        report.files.len(),
        report.total_bytes()
    );

    Ok(report)
}
