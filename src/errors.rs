use std::path::PathBuf;

/// Failures detected by header-sync itself, as opposed to plain I/O errors
/// surfaced by the filesystem.
#[derive(Debug, thiserror::Error)]
pub enum HeaderSyncError {
    #[error("Directory not found: {0:?}")]
    DirectoryNotFound(PathBuf),

    #[error("Expected a file but found a directory: {0:?}")]
    NotAFile(PathBuf),

    #[error("Cannot derive a library name from path: {0:?}")]
    MissingLibraryName(PathBuf),
}
