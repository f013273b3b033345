//! # filelist-entity
//!
//! Domain entities produced by a drive enumeration: the reconstructed folder
//! tree, file records, and the aggregated file list. Every struct derives
//! `Debug`, `Clone`, and `Serialize`.

pub mod file;
pub mod folder;
pub mod listing;

pub use file::FileRecord;
pub use folder::{FolderNode, FolderTree};
pub use listing::{FileListResult, FolderFiles};
