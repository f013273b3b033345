//! Core type definitions used across the drive-filelist workspace.

pub mod fields;
pub mod filter;
pub mod item;
pub mod pagination;

pub use fields::FieldProjection;
pub use filter::{EntityKind, FOLDER_MIME_TYPE, QueryFilter};
pub use item::{DriveItem, FolderMetadata};
pub use pagination::{ListPage, ListRequest, PAGE_SIZE};
