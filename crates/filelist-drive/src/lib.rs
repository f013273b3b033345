//! # filelist-drive
//!
//! Backend implementations of [`filelist_core::traits::DriveBackend`]. The
//! Google Drive provider talks to the v3 REST API; the in-memory provider
//! serves a fixed snapshot and records every call, which makes it the
//! synthetic store for tests.

pub mod providers;

#[cfg(feature = "google")]
pub use providers::GoogleDriveProvider;
#[cfg(feature = "memory")]
pub use providers::MemoryDrive;
