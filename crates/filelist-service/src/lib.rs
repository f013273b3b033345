//! # filelist-service
//!
//! Reconstructs folder hierarchies from a backend that only offers flat,
//! filtered, cursor-paginated listings, and enumerates the files inside
//! every folder of the hierarchy.
//!
//! Two traversal strategies share one tree-building loop: a single bulk
//! scan of every folder (for folders in the caller's own drive) and a
//! per-folder crawl (for shared folders, whose contents only show up when
//! queried by parent).

pub mod file;
pub mod folder;
pub mod paginator;
pub mod service;

pub use file::FileEnumerator;
pub use folder::{FolderCrawler, FolderIndex, TraversalStrategy, build_tree};
pub use paginator::Paginator;
pub use service::{FileListService, ListOptions};
