pub mod include_copy;
pub mod test_combine;
pub mod test_discovery;

pub use include_copy::{
    copy_include, library_name, IncludeConfig, DEFAULT_INCLUDE_TARGET, DEFAULT_LIBRARY_PATH,
    DEFAULT_TARGET_ROOT,
};
pub use test_combine::{combine_tests, TestsConfig, COMBINED_FILE_NAME, DEFAULT_TEST_SOURCE_DIR};
pub use test_discovery::{is_test_header, locate_tests, TEST_HEADER_MARKER};
