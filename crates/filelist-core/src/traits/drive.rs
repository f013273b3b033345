//! Backend trait for hierarchical file stores that only offer flat,
//! filtered, paginated listing.

use async_trait::async_trait;

use crate::result::AppResult;
use crate::types::{FolderMetadata, ListPage, ListRequest};

/// Identifier the backend resolves to the caller's root container.
pub const ROOT_FOLDER_ALIAS: &str = "root";

/// Trait for remote file store backends.
///
/// Implementations exist for the Google Drive REST API and an in-memory
/// snapshot used by tests. Any error returned here is treated as fatal by
/// the traversal code.
#[async_trait]
pub trait DriveBackend: Send + Sync + std::fmt::Debug + 'static {
    /// Return the backend type name (e.g., "google-drive", "memory").
    fn backend_type(&self) -> &str;

    /// Fetch metadata for a single folder.
    async fn fetch_metadata(&self, folder_id: &str) -> AppResult<FolderMetadata>;

    /// Fetch one page of entities matching `request`.
    async fn list_page(&self, request: &ListRequest) -> AppResult<ListPage>;
}
