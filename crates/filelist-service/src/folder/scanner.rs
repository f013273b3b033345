//! Bulk folder scan: one listing of every folder in the store.

use std::collections::HashMap;

use tracing::info;

use filelist_core::result::AppResult;
use filelist_core::types::{DriveItem, FieldProjection, QueryFilter};
use filelist_entity::folder::FolderNode;

use crate::paginator::Paginator;

/// Fetch every non-trashed folder visible to the caller and index it by
/// parent. The listing is not limited to any subtree.
pub async fn scan_all_folders(paginator: &Paginator) -> AppResult<FolderIndex> {
    let items = paginator
        .collect(&QueryFilter::all_folders(), &FieldProjection::folders())
        .await?;
    info!(folders = items.len(), "Bulk folder scan complete");
    Ok(FolderIndex::from_items(items))
}

/// Flat folder listing viewed as an adjacency list keyed by parent id.
#[derive(Debug, Clone, Default)]
pub struct FolderIndex {
    children: HashMap<String, Vec<DriveItem>>,
    len: usize,
}

impl FolderIndex {
    /// Group `items` by their first parent, keeping listing order within
    /// each group. Items without a parent cannot be reached and are dropped.
    pub fn from_items(items: Vec<DriveItem>) -> Self {
        let mut children: HashMap<String, Vec<DriveItem>> = HashMap::new();
        let mut len = 0;
        for item in items {
            let Some(parent) = item.parent_id().map(str::to_string) else {
                continue;
            };
            children.entry(parent).or_default().push(item);
            len += 1;
        }
        Self { children, len }
    }

    /// Direct children of `parent_id`, in listing order.
    pub fn children(&self, parent_id: &str) -> &[DriveItem] {
        self.children
            .get(parent_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Number of indexed folders.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the scan found no folders with a parent.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The next level below `frontier`: every indexed child of every
    /// frontier node, positioned under its parent, in frontier order.
    pub fn expand(&self, frontier: &[FolderNode]) -> Vec<FolderNode> {
        frontier
            .iter()
            .flat_map(|parent| {
                self.children(&parent.id)
                    .iter()
                    .map(move |item| FolderNode::child_of(parent, item))
            })
            .collect()
    }
}
