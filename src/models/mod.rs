pub mod report;

pub use report::{CombineReport, CombinedHeader, CopiedFile, IncludeCopyReport};
