//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use filelist_core::config::traversal::TraversalConfig;
use filelist_drive::MemoryDrive;
use filelist_service::{FileListService, Paginator};

/// Service over a clone of `drive`; clones share call accounting.
pub fn service(drive: &MemoryDrive) -> FileListService {
    FileListService::new(Arc::new(drive.clone()), TraversalConfig::default())
}

/// Paginator over a clone of `drive` in the default scope.
pub fn paginator(drive: &MemoryDrive) -> Paginator {
    Paginator::new(Arc::new(drive.clone()))
}

/// ```text
/// root
/// ├── docs
/// │   ├── 2023
/// │   └── 2024
/// │       └── q1
/// ├── music
/// └── photos
///     ├── raw
///     └── old (trashed)
/// other
/// └── other-child
/// ```
pub fn archive_drive() -> MemoryDrive {
    let mut drive = MemoryDrive::new("root", "My Drive");
    drive
        .add_folder("docs", "docs", "root")
        .add_folder("music", "music", "root")
        .add_folder("photos", "photos", "root")
        .add_folder("d23", "2023", "docs")
        .add_folder("d24", "2024", "docs")
        .add_folder("q1", "q1", "d24")
        .add_folder("raw", "raw", "photos")
        .add_folder("old", "old", "photos")
        .add_detached_folder("other", "other")
        .add_folder("other-child", "other-child", "other");
    drive.trash("old");
    drive
}
