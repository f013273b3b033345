//! # filelist-core
//!
//! Core crate for drive-filelist. Contains the backend trait, configuration
//! schemas, query filter and pagination types, and the unified error system.
//!
//! This crate has **no** internal dependencies on other drive-filelist crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
