use crate::utils::sha256_hex;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::PathBuf;

/// One file written by the include copier
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CopiedFile {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub bytes: u64,
    pub sha256: String,
}

impl CopiedFile {
    pub fn new(source: PathBuf, destination: PathBuf, content: &str) -> Self {
        Self {
            source,
            destination,
            bytes: content.len() as u64,
            sha256: sha256_hex(content.as_bytes()),
        }
    }
}

/// Summary of a single `copy_include` run
#[derive(Debug, Clone, Serialize)]
pub struct IncludeCopyReport {
    pub library_name: String,
    pub destination_dir: PathBuf,
    pub created_destination: bool,
    pub files: Vec<CopiedFile>,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl IncludeCopyReport {
    pub fn total_bytes(&self) -> u64 {
        self.files.iter().map(|f| f.bytes).sum()
    }
}

/// One input appended by the test header combiner.
/// `bytes` and `sha256` cover the header content only, not the trailing newline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CombinedHeader {
    pub path: PathBuf,
    pub bytes: u64,
    pub sha256: String,
}

impl CombinedHeader {
    pub fn new(path: PathBuf, content: &str) -> Self {
        Self {
            path,
            bytes: content.len() as u64,
            sha256: sha256_hex(content.as_bytes()),
        }
    }
}

/// Summary of a single `combine_tests` run; `total_bytes` and `sha256`
/// describe the output file as written.
#[derive(Debug, Clone, Serialize)]
pub struct CombineReport {
    pub outfile: PathBuf,
    pub headers: Vec<CombinedHeader>,
    pub total_bytes: u64,
    pub sha256: String,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}
