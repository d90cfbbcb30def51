use crate::errors::HeaderSyncError;
use anyhow::{Context, Result};
use sha2::{Digest, Sha256};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// List the immediate entries of a directory, in enumeration order.
/// Subdirectories are returned as entries but never descended into.
pub fn list_directory_entries<P: AsRef<Path>>(directory: P) -> Result<Vec<PathBuf>> {
    let dir_path = directory.as_ref();

    if !dir_path.exists() {
        return Err(HeaderSyncError::DirectoryNotFound(dir_path.to_path_buf()).into());
    }

    let entries = fs::read_dir(dir_path)
        .with_context(|| format!("Failed to read directory: {:?}", dir_path))?;

    entries
        .map(|entry| {
            entry
                .map(|entry| entry.path())
                .with_context(|| format!("Failed to read entry in directory: {:?}", dir_path))
        })
        .collect()
}

/// Check whether the file name of `path` contains `marker` as a plain substring
/// Pure function
pub fn contains_marker(path: &Path, marker: &str) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().contains(marker))
        .unwrap_or(false)
}

/// Read the whole file as UTF-8 text.
pub fn read_text<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();

    if path.is_dir() {
        return Err(HeaderSyncError::NotAFile(path.to_path_buf()).into());
    }

    fs::read_to_string(path).with_context(|| format!("Failed to read file as text: {:?}", path))
}

/// Write `content` to `path`, creating or truncating it.
pub fn write_text<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, content).with_context(|| format!("Failed to write file: {:?}", path))
}

/// Create a single directory level if it does not exist yet.
/// Returns `true` when the directory was created by this call.
pub fn ensure_directory<P: AsRef<Path>>(path: P) -> Result<bool> {
    let path = path.as_ref();

    match fs::create_dir(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == ErrorKind::AlreadyExists && path.is_dir() => Ok(false),
        Err(e) => Err(e).with_context(|| format!("Failed to create directory: {:?}", path)),
    }
}

/// Lowercase hex SHA-256 of `bytes`
pub fn sha256_hex(bytes: &[u8]) -> String {
    format!("{:x}", Sha256::digest(bytes))
}
