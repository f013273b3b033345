//! Entry points: folder tree and full file list for a folder.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use filelist_core::config::listing::ListingConfig;
use filelist_core::config::traversal::TraversalConfig;
use filelist_core::result::AppResult;
use filelist_core::traits::DriveBackend;
use filelist_core::traits::drive::ROOT_FOLDER_ALIAS;
use filelist_core::types::{FieldProjection, FolderMetadata};
use filelist_entity::folder::{FolderNode, FolderTree};
use filelist_entity::listing::FileListResult;

use crate::file::FileEnumerator;
use crate::folder::{TraversalStrategy, build_tree};
use crate::paginator::Paginator;

/// Options for a file listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListOptions {
    /// Custom field projection; the cursor field is appended when missing.
    pub fields: Option<String>,
    /// Content types to keep; empty keeps every file.
    pub mime_types: Vec<String>,
}

impl ListOptions {
    /// Set a custom field projection.
    pub fn with_fields(mut self, fields: impl Into<String>) -> Self {
        self.fields = Some(fields.into());
        self
    }

    /// Restrict the listing to the given content types.
    pub fn with_mime_types<I, S>(mut self, mime_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.mime_types = mime_types.into_iter().map(Into::into).collect();
        self
    }

    /// The projection actually sent with file queries.
    pub fn projection(&self) -> FieldProjection {
        FieldProjection::files(self.fields.as_deref())
    }
}

impl From<&ListingConfig> for ListOptions {
    fn from(config: &ListingConfig) -> Self {
        Self {
            fields: config.fields.clone(),
            mime_types: config.mime_types.clone(),
        }
    }
}

/// Reconstructs folder trees and file lists from a [`DriveBackend`].
#[derive(Debug, Clone)]
pub struct FileListService {
    /// Backend serving metadata and list calls.
    backend: Arc<dyn DriveBackend>,
    /// Fan-out settings.
    traversal: TraversalConfig,
}

impl FileListService {
    /// Creates a new file list service.
    pub fn new(backend: Arc<dyn DriveBackend>, traversal: TraversalConfig) -> Self {
        Self { backend, traversal }
    }

    /// Builds the folder tree under `folder_id`.
    pub async fn folder_tree(&self, folder_id: &str) -> AppResult<FolderTree> {
        let (_, tree, _) = self.resolve_tree(folder_id).await?;
        Ok(tree)
    }

    /// Builds the folder tree under the drive's root container.
    pub async fn root_folder_tree(&self) -> AppResult<FolderTree> {
        self.folder_tree(ROOT_FOLDER_ALIAS).await
    }

    /// Builds the folder tree under `folder_id` and lists the files of every
    /// folder in it.
    pub async fn file_list(
        &self,
        folder_id: &str,
        options: &ListOptions,
    ) -> AppResult<FileListResult> {
        let (searched_folder, tree, paginator) = self.resolve_tree(folder_id).await?;

        let enumerator = FileEnumerator::new(paginator, self.traversal.concurrency());
        let files = enumerator
            .enumerate(&tree, &options.projection(), &options.mime_types)
            .await?;

        let result = FileListResult::assemble(searched_folder, tree, files)?;
        info!(
            folder_id,
            total_folders = result.total_folders(),
            total_files = result.total_files(),
            "File list complete"
        );
        Ok(result)
    }

    /// Lists every file under the drive's root container.
    pub async fn root_file_list(&self, options: &ListOptions) -> AppResult<FileListResult> {
        self.file_list(ROOT_FOLDER_ALIAS, options).await
    }

    /// Fetch the root's metadata, pick a strategy, and build the tree. The
    /// returned paginator carries the root's drive scope.
    async fn resolve_tree(
        &self,
        folder_id: &str,
    ) -> AppResult<(FolderMetadata, FolderTree, Paginator)> {
        let metadata = self.backend.fetch_metadata(folder_id).await?;
        info!(
            folder_id = %metadata.id,
            name = %metadata.name,
            shared = metadata.shared,
            drive_id = metadata.drive_id.as_deref().unwrap_or("-"),
            "Resolved search folder"
        );

        let paginator =
            Paginator::new(Arc::clone(&self.backend)).with_drive_scope(metadata.drive_id.clone());
        let strategy =
            TraversalStrategy::select(&metadata, &paginator, self.traversal.concurrency()).await?;
        let tree = build_tree(FolderNode::root(&metadata), &strategy).await?;

        Ok((metadata, tree, paginator))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use filelist_core::types::fields::DEFAULT_FILE_FIELDS;

    #[test]
    fn test_projection_defaults() {
        assert_eq!(ListOptions::default().projection().as_str(), DEFAULT_FILE_FIELDS);
        assert_eq!(
            ListOptions::default()
                .with_fields("files(id,name)")
                .projection()
                .as_str(),
            "files(id,name),nextPageToken"
        );
    }

    #[test]
    fn test_options_from_config() {
        let config = ListingConfig {
            fields: None,
            mime_types: vec!["image/png".to_string()],
        };
        let options = ListOptions::from(&config);
        assert_eq!(options.mime_types, vec!["image/png"]);
        assert!(options.fields.is_none());
    }
}
