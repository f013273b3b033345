//! Aggregated enumeration results.

pub mod result;

pub use result::{FileListResult, FolderFiles};
