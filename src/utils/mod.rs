pub mod file_operations;

pub use file_operations::{
    contains_marker, ensure_directory, list_directory_entries, read_text, sha256_hex, write_text,
};
