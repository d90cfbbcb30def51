use crate::models::{CombineReport, CombinedHeader};
use crate::utils::read_text;
use anyhow::{Context, Result};
use chrono::Utc;
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Name of the combined file written next to the test sources
pub const COMBINED_FILE_NAME: &str = "_tests.hpp";

/// Test source directory of the stock `combine-tests` invocation
pub const DEFAULT_TEST_SOURCE_DIR: &str = "test/src";

/// Configuration for test discovery and combining
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestsConfig {
    pub location: PathBuf,
    pub outfile: PathBuf,
}

impl TestsConfig {
    /// Scan `location` and write the combined file inside it
    pub fn new<P: Into<PathBuf>>(location: P) -> Self {
        let location = location.into();
        let outfile = location.join(COMBINED_FILE_NAME);
        Self { location, outfile }
    }
}

impl Default for TestsConfig {
    fn default() -> Self {
        Self::new(DEFAULT_TEST_SOURCE_DIR)
    }
}

/// Concatenate `headers` into `outfile`, in the given order, each followed by
/// a single `\n`.
///
/// `outfile` is created or truncated up front. A header that cannot be read
/// aborts the run and whatever was already written stays on disk.
pub fn combine_tests<P: AsRef<Path>, Q: AsRef<Path>>(
    headers: &[P],
    outfile: Q,
) -> Result<CombineReport> {
    let started_at = Utc::now();
    let outfile = outfile.as_ref();

    info!("Combining {} test headers into {}", headers.len(), outfile.display());

    let mut output = File::create(outfile)
        .with_context(|| format!("Failed to create output file: {:?}", outfile))?;
    let mut hasher = Sha256::new();
    let mut total_bytes = 0u64;
    let mut combined = Vec::with_capacity(headers.len());

    for header in headers {
        let header = header.as_ref();
        let content = read_text(header)?;

        for chunk in [content.as_bytes(), b"\n".as_slice()] {
            output
                .write_all(chunk)
                .with_context(|| format!("Failed to write output file: {:?}", outfile))?;
            hasher.update(chunk);
            total_bytes += chunk.len() as u64;
        }

        debug!("Appended {} ({} bytes)", header.display(), content.len());
        combined.push(CombinedHeader::new(header.to_path_buf(), &content));
    }

    output
        .flush()
        .with_context(|| format!("Failed to flush output file: {:?}", outfile))?;

    let report = CombineReport {
        outfile: outfile.to_path_buf(),
        headers: combined,
        total_bytes,
        sha256: format!("{:x}", hasher.finalize()),
        started_at,
        finished_at: Utc::now(),
    };

    info!(
        "Combine completed. Headers: {}, Bytes: {}",
        report.headers.len(),
        report.total_bytes
    );

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::sha256_hex;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_combine_tests_appends_newline_after_each() {
        let dir = TempDir::new().unwrap();
        let a = dir.path().join("a.test.hpp");
        let b = dir.path().join("b.test.hpp");
        fs::write(&a, "A").unwrap();
        fs::write(&b, "B").unwrap();
        let out = dir.path().join("out.txt");

        let report = combine_tests(&[&a, &b], &out).unwrap();

        assert_eq!(fs::read_to_string(&out).unwrap(), "A\nB\n");
        assert_eq!(report.total_bytes, 4);
        assert_eq!(report.sha256, sha256_hex(b"A\nB\n"));
        assert_eq!(report.headers[0].path, a);
        assert_eq!(report.headers[1].bytes, 1);
    }

    #[test]
    fn test_combine_tests_preserves_given_order() {
        let dir = TempDir::new().unwrap();
        let a = dir.path().join("a.test.hpp");
        let b = dir.path().join("b.test.hpp");
        fs::write(&a, "first\n").unwrap();
        fs::write(&b, "second").unwrap();
        let out = dir.path().join("out.hpp");

        combine_tests(&[&b, &a], &out).unwrap();

        assert_eq!(fs::read_to_string(&out).unwrap(), "second\nfirst\n\n");
    }

    #[test]
    fn test_combine_tests_truncates_existing_output() {
        let dir = TempDir::new().unwrap();
        let a = dir.path().join("a.test.hpp");
        fs::write(&a, "A").unwrap();
        let out = dir.path().join("out.hpp");
        fs::write(&out, "previous content that is longer").unwrap();

        combine_tests(&[&a], &out).unwrap();

        assert_eq!(fs::read_to_string(&out).unwrap(), "A\n");
    }

    #[test]
    fn test_combine_tests_with_no_headers_writes_empty_file() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("out.hpp");

        let report = combine_tests::<PathBuf, _>(&[], &out).unwrap();

        assert_eq!(fs::read(&out).unwrap(), Vec::<u8>::new());
        assert_eq!(report.total_bytes, 0);
    }

    #[test]
    fn test_combine_tests_leaves_partial_output_on_failure() {
        let dir = TempDir::new().unwrap();
        let a = dir.path().join("a.test.hpp");
        fs::write(&a, "A").unwrap();
        let missing = dir.path().join("missing.test.hpp");
        let out = dir.path().join("out.hpp");

        assert!(combine_tests(&[&a, &missing], &out).is_err());
        assert_eq!(fs::read_to_string(&out).unwrap(), "A\n");
        assert_eq!(fs::read_to_string(&a).unwrap(), "A");
    }

    #[test]
    fn test_tests_config_defaults() {
        let config = TestsConfig::default();
        assert_eq!(config.location, PathBuf::from("test/src"));
        assert_eq!(config.outfile, PathBuf::from("test/src/_tests.hpp"));
    }
}
