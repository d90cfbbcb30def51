pub mod errors;
pub mod models;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use errors::HeaderSyncError;
pub use models::{CombineReport, CombinedHeader, CopiedFile, IncludeCopyReport};
pub use services::{
    combine_tests, copy_include, is_test_header, library_name, locate_tests, IncludeConfig,
    TestsConfig, TEST_HEADER_MARKER,
};

// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub include: IncludeConfig,
    pub tests: TestsConfig,
    pub log_level: String,
    pub json: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            include: IncludeConfig::default(),
            tests: TestsConfig::default(),
            log_level: "info".to_string(),
            json: false,
        }
    }
}
