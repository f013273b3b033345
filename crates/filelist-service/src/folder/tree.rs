//! Folder tree assembly by level-by-level frontier expansion.

use tracing::{debug, info};

use filelist_core::result::AppResult;
use filelist_core::types::FolderMetadata;
use filelist_entity::folder::{FolderNode, FolderTree};

use super::crawler::FolderCrawler;
use super::scanner::{FolderIndex, scan_all_folders};
use crate::paginator::Paginator;

/// How the levels below the root are discovered. Chosen once per run.
#[derive(Debug, Clone)]
pub enum TraversalStrategy {
    /// Expand from a complete, pre-fetched folder listing.
    Bulk(FolderIndex),
    /// Query the backend for each frontier folder's children.
    Crawl(FolderCrawler),
}

impl TraversalStrategy {
    /// Pick the strategy for `root`: shared folders are crawled, everything
    /// else is bulk scanned up front.
    pub async fn select(
        root: &FolderMetadata,
        paginator: &Paginator,
        concurrency: usize,
    ) -> AppResult<Self> {
        if root.shared {
            info!(folder_id = %root.id, "Shared folder, crawling folder by folder");
            Ok(Self::Crawl(FolderCrawler::new(paginator.clone(), concurrency)))
        } else {
            info!(folder_id = %root.id, "Scanning all folders");
            Ok(Self::Bulk(scan_all_folders(paginator).await?))
        }
    }

    /// Short name for logs and output.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Bulk(_) => "bulk",
            Self::Crawl(_) => "crawl",
        }
    }

    /// Discover the level directly below `frontier`.
    pub async fn expand(&self, frontier: &[FolderNode]) -> AppResult<Vec<FolderNode>> {
        match self {
            Self::Bulk(index) => Ok(index.expand(frontier)),
            Self::Crawl(crawler) => crawler.expand(frontier).await,
        }
    }
}

/// Build the tree under `root` by expanding one level at a time until a
/// level comes back empty.
///
/// Each level is appended after the previous ones, so the root comes first
/// and every parent precedes its children. A folder id seen before is not
/// expanded again.
pub async fn build_tree(root: FolderNode, strategy: &TraversalStrategy) -> AppResult<FolderTree> {
    let mut tree = FolderTree::new(root.clone());
    let mut frontier = vec![root];
    let mut depth = 0usize;

    while !frontier.is_empty() {
        let level = strategy.expand(&frontier).await?;
        let known = tree.len();
        tree = tree.with_level(level);
        frontier = tree.nodes()[known..].to_vec();
        depth += 1;
        debug!(depth, folders = frontier.len(), "Expanded folder level");
    }

    info!(
        strategy = strategy.name(),
        folders = tree.len(),
        "Folder tree built"
    );
    Ok(tree)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use filelist_core::types::DriveItem;
    use filelist_drive::MemoryDrive;

    fn folder(id: &str, parent: &str) -> DriveItem {
        DriveItem {
            id: id.to_string(),
            name: id.to_string(),
            parents: vec![parent.to_string()],
            ..Default::default()
        }
    }

    fn root_node(id: &str) -> FolderNode {
        FolderNode::root(&FolderMetadata {
            id: id.to_string(),
            name: id.to_string(),
            ..Default::default()
        })
    }

    #[tokio::test]
    async fn test_bulk_prunes_unreachable_folders() {
        let index = FolderIndex::from_items(vec![
            folder("a", "r"),
            folder("a1", "a"),
            folder("x", "elsewhere"),
            folder("x1", "x"),
        ]);
        let tree = build_tree(root_node("r"), &TraversalStrategy::Bulk(index))
            .await
            .unwrap();

        let ids: Vec<&str> = tree.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["r", "a", "a1"]);
        assert!(tree.is_well_formed());
    }

    #[tokio::test]
    async fn test_bulk_subtree_root() {
        let index = FolderIndex::from_items(vec![
            folder("a", "r"),
            folder("a1", "a"),
            folder("a11", "a1"),
            folder("b", "r"),
        ]);
        let tree = build_tree(root_node("a"), &TraversalStrategy::Bulk(index))
            .await
            .unwrap();
        assert_eq!(tree.len(), 3);
        assert_eq!(tree.root().id_path(), vec!["a"]);
        assert_eq!(tree.get("a11").unwrap().ancestors, vec!["a", "a1"]);
    }

    #[tokio::test]
    async fn test_cycle_terminates() {
        let index = FolderIndex::from_items(vec![folder("a", "r"), folder("r", "a")]);
        let tree = build_tree(root_node("r"), &TraversalStrategy::Bulk(index))
            .await
            .unwrap();
        assert_eq!(tree.len(), 2);
    }

    #[tokio::test]
    async fn test_select_uses_shared_flag() {
        let drive = MemoryDrive::new("r", "Root");
        let paginator = Paginator::new(Arc::new(drive.clone()));

        let mut meta = FolderMetadata {
            id: "r".to_string(),
            ..Default::default()
        };
        let strategy = TraversalStrategy::select(&meta, &paginator, 2).await.unwrap();
        assert_eq!(strategy.name(), "bulk");
        assert_eq!(drive.list_calls(), 1);

        meta.shared = true;
        let strategy = TraversalStrategy::select(&meta, &paginator, 2).await.unwrap();
        assert_eq!(strategy.name(), "crawl");
        assert_eq!(drive.list_calls(), 1);
    }
}
