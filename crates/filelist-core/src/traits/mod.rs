//! Core traits defined in `filelist-core` and implemented by other crates.

pub mod drive;

pub use drive::DriveBackend;
