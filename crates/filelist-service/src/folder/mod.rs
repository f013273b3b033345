//! Folder discovery strategies and tree assembly.

pub mod crawler;
pub mod scanner;
pub mod tree;

pub use crawler::FolderCrawler;
pub use scanner::{FolderIndex, scan_all_folders};
pub use tree::{TraversalStrategy, build_tree};
