//! Per-folder crawl: one listing of direct child folders per frontier node.

use futures::{StreamExt, TryStreamExt, stream};
use tracing::debug;

use filelist_core::result::AppResult;
use filelist_core::types::{FieldProjection, QueryFilter};
use filelist_entity::folder::FolderNode;

use crate::paginator::Paginator;

/// Discovers child folders by querying each parent separately.
#[derive(Debug, Clone)]
pub struct FolderCrawler {
    paginator: Paginator,
    concurrency: usize,
}

impl FolderCrawler {
    /// A crawler issuing at most `concurrency` listings at once.
    pub fn new(paginator: Paginator, concurrency: usize) -> Self {
        Self {
            paginator,
            concurrency: concurrency.max(1),
        }
    }

    /// Child folders of one parent, positioned below it.
    pub async fn children_of(&self, parent: &FolderNode) -> AppResult<Vec<FolderNode>> {
        let items = self
            .paginator
            .collect(&QueryFilter::child_folders(&parent.id), &FieldProjection::folders())
            .await?;
        debug!(folder_id = %parent.id, children = items.len(), "Crawled folder");
        Ok(items
            .iter()
            .map(|item| FolderNode::child_of(parent, item))
            .collect())
    }

    /// The next level below `frontier`, in frontier order.
    ///
    /// Listings run concurrently; the first failure aborts the level and
    /// drops the listings still in flight.
    pub async fn expand(&self, frontier: &[FolderNode]) -> AppResult<Vec<FolderNode>> {
        let mut batches: Vec<(usize, Vec<FolderNode>)> = stream::iter(frontier.iter().enumerate())
            .map(|(index, parent)| async move {
                self.children_of(parent).await.map(|nodes| (index, nodes))
            })
            .buffer_unordered(self.concurrency)
            .try_collect()
            .await?;

        batches.sort_by_key(|(index, _)| *index);
        Ok(batches.into_iter().flat_map(|(_, nodes)| nodes).collect())
    }
}
