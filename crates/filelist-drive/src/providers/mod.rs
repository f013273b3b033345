//! Drive backend implementations.

#[cfg(feature = "google")]
pub mod google;
#[cfg(feature = "memory")]
pub mod memory;

#[cfg(feature = "google")]
pub use google::GoogleDriveProvider;
#[cfg(feature = "memory")]
pub use memory::MemoryDrive;
