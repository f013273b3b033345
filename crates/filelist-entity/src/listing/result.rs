//! The file list produced by a full enumeration.

use chrono::{DateTime, Utc};
use serde::Serialize;

use filelist_core::error::AppError;
use filelist_core::types::FolderMetadata;

use crate::file::FileRecord;
use crate::folder::{FolderNode, FolderTree};

/// Files found directly inside one folder.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FolderFiles {
    /// The folder, with its position in the tree.
    pub folder: FolderNode,
    /// Files in name order.
    pub files: Vec<FileRecord>,
}

/// Point-in-time snapshot of a folder hierarchy and its files.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileListResult {
    searched_folder: FolderMetadata,
    folder_tree: FolderTree,
    file_list: Vec<FolderFiles>,
    total_folders: u64,
    total_files: u64,
    retrieved_at: DateTime<Utc>,
}

impl FileListResult {
    /// Assemble a result from a tree and one file batch per tree node, in
    /// tree order.
    pub fn assemble(
        searched_folder: FolderMetadata,
        folder_tree: FolderTree,
        files_per_folder: Vec<Vec<FileRecord>>,
    ) -> Result<Self, AppError> {
        if files_per_folder.len() != folder_tree.len() {
            return Err(AppError::internal(format!(
                "Expected file batches for {} folders, got {}",
                folder_tree.len(),
                files_per_folder.len()
            )));
        }

        let file_list: Vec<FolderFiles> = folder_tree
            .iter()
            .cloned()
            .zip(files_per_folder)
            .map(|(folder, files)| FolderFiles { folder, files })
            .collect();

        let total_files = file_list.iter().map(|f| f.files.len() as u64).sum();

        Ok(Self {
            searched_folder,
            total_folders: folder_tree.len() as u64,
            folder_tree,
            file_list,
            total_files,
            retrieved_at: Utc::now(),
        })
    }

    /// Metadata of the folder the enumeration started from.
    pub fn searched_folder(&self) -> &FolderMetadata {
        &self.searched_folder
    }

    /// The reconstructed folder tree.
    pub fn folder_tree(&self) -> &FolderTree {
        &self.folder_tree
    }

    /// Per-folder file lists, in tree order.
    pub fn file_list(&self) -> &[FolderFiles] {
        &self.file_list
    }

    /// Files of a single folder.
    pub fn files_in(&self, folder_id: &str) -> Option<&[FileRecord]> {
        self.file_list
            .iter()
            .find(|f| f.folder.id == folder_id)
            .map(|f| f.files.as_slice())
    }

    /// Number of folders, root included.
    pub fn total_folders(&self) -> u64 {
        self.total_folders
    }

    /// Number of files across all folders.
    pub fn total_files(&self) -> u64 {
        self.total_files
    }

    /// When the snapshot was taken.
    pub fn retrieved_at(&self) -> DateTime<Utc> {
        self.retrieved_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use filelist_core::types::DriveItem;

    fn file(id: &str) -> FileRecord {
        FileRecord::from(DriveItem {
            id: id.to_string(),
            name: id.to_string(),
            mime_type: "text/plain".to_string(),
            ..Default::default()
        })
    }

    fn tree() -> FolderTree {
        let root = FolderNode::root(&FolderMetadata {
            id: "r".to_string(),
            name: "Root".to_string(),
            ..Default::default()
        });
        let child = FolderNode::child_of(
            &root,
            &DriveItem {
                id: "c".to_string(),
                name: "C".to_string(),
                ..Default::default()
            },
        );
        FolderTree::new(root).with_level(vec![child])
    }

    #[test]
    fn test_totals() {
        let result = FileListResult::assemble(
            FolderMetadata::default(),
            tree(),
            vec![vec![file("a")], vec![file("b"), file("c")]],
        )
        .expect("assemble");
        assert_eq!(result.total_folders(), 2);
        assert_eq!(result.total_files(), 3);
        assert_eq!(result.files_in("c").map(|f| f.len()), Some(2));
        assert!(result.files_in("zzz").is_none());
    }

    #[test]
    fn test_batch_count_mismatch_is_rejected() {
        let err = FileListResult::assemble(FolderMetadata::default(), tree(), vec![vec![]])
            .unwrap_err();
        assert_eq!(err.kind, filelist_core::error::ErrorKind::Internal);
    }
}
