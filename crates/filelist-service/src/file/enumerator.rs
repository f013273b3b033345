//! Lists the files directly inside every folder of a tree.

use futures::{StreamExt, TryStreamExt, stream};
use tracing::{debug, info};

use filelist_core::result::AppResult;
use filelist_core::types::{FieldProjection, QueryFilter};
use filelist_entity::file::FileRecord;
use filelist_entity::folder::{FolderNode, FolderTree};

use crate::paginator::Paginator;

/// Runs one paginated file listing per folder.
#[derive(Debug, Clone)]
pub struct FileEnumerator {
    paginator: Paginator,
    concurrency: usize,
}

impl FileEnumerator {
    /// An enumerator issuing at most `concurrency` listings at once.
    pub fn new(paginator: Paginator, concurrency: usize) -> Self {
        Self {
            paginator,
            concurrency: concurrency.max(1),
        }
    }

    /// Files directly inside `folder`, optionally limited to `mime_types`.
    pub async fn files_in(
        &self,
        folder: &FolderNode,
        fields: &FieldProjection,
        mime_types: &[String],
    ) -> AppResult<Vec<FileRecord>> {
        let filter = QueryFilter::child_files(&folder.id, mime_types);
        let items = self.paginator.collect(&filter, fields).await?;
        debug!(folder_id = %folder.id, files = items.len(), "Listed folder files");
        Ok(items.into_iter().map(FileRecord::from).collect())
    }

    /// One file batch per tree node, in tree order.
    ///
    /// The first failing listing aborts the whole enumeration.
    pub async fn enumerate(
        &self,
        tree: &FolderTree,
        fields: &FieldProjection,
        mime_types: &[String],
    ) -> AppResult<Vec<Vec<FileRecord>>> {
        let mut batches: Vec<(usize, Vec<FileRecord>)> = stream::iter(tree.iter().enumerate())
            .map(|(index, folder)| async move {
                self.files_in(folder, fields, mime_types)
                    .await
                    .map(|files| (index, files))
            })
            .buffer_unordered(self.concurrency)
            .try_collect()
            .await?;

        batches.sort_by_key(|(index, _)| *index);
        let batches: Vec<Vec<FileRecord>> = batches.into_iter().map(|(_, files)| files).collect();

        info!(
            folders = tree.len(),
            files = batches.iter().map(Vec::len).sum::<usize>(),
            "File enumeration complete"
        );
        Ok(batches)
    }
}
