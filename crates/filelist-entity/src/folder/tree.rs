//! Folder tree structures reconstructed from flat listings.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use filelist_core::types::{DriveItem, FolderMetadata};

/// A folder positioned in the tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FolderNode {
    /// Folder ID.
    pub id: String,
    /// Folder name.
    pub name: String,
    /// Parent folder ID (None for the tree root).
    pub parent_id: Option<String>,
    /// Ancestor IDs from the root down to, but not including, this folder.
    pub ancestors: Vec<String>,
}

impl FolderNode {
    /// The root node of a traversal.
    pub fn root(meta: &FolderMetadata) -> Self {
        Self {
            id: meta.id.clone(),
            name: meta.name.clone(),
            parent_id: None,
            ancestors: Vec::new(),
        }
    }

    /// A node for `item`, placed directly below `parent`.
    pub fn child_of(parent: &FolderNode, item: &DriveItem) -> Self {
        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            parent_id: Some(parent.id.clone()),
            ancestors: parent.id_path(),
        }
    }

    /// Full id chain from the root to this folder, inclusive.
    pub fn id_path(&self) -> Vec<String> {
        let mut path = Vec::with_capacity(self.ancestors.len() + 1);
        path.extend(self.ancestors.iter().cloned());
        path.push(self.id.clone());
        path
    }

    /// Depth below the root (0 for the root).
    pub fn depth(&self) -> usize {
        self.ancestors.len()
    }

    /// Whether this is the tree root.
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}

/// A folder tree in discovery order, root first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FolderTree {
    nodes: Vec<FolderNode>,
}

impl FolderTree {
    /// A tree holding only `root`.
    pub fn new(root: FolderNode) -> Self {
        Self { nodes: vec![root] }
    }

    /// A new tree with `level` appended after the existing nodes.
    ///
    /// Nodes whose id is already present are skipped so that an id never
    /// appears twice.
    pub fn with_level(self, level: Vec<FolderNode>) -> Self {
        let mut seen: HashSet<String> = self.nodes.iter().map(|n| n.id.clone()).collect();
        let mut nodes = self.nodes;
        nodes.extend(level.into_iter().filter(|n| seen.insert(n.id.clone())));
        Self { nodes }
    }

    /// The root node.
    pub fn root(&self) -> &FolderNode {
        &self.nodes[0]
    }

    /// All nodes, root first.
    pub fn nodes(&self) -> &[FolderNode] {
        &self.nodes
    }

    /// Iterate over all nodes, root first.
    pub fn iter(&self) -> std::slice::Iter<'_, FolderNode> {
        self.nodes.iter()
    }

    /// Total number of folders, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false; a tree contains at least its root.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Look a folder up by id.
    pub fn get(&self, id: &str) -> Option<&FolderNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Set of `(id, id_path)` pairs, independent of sibling order.
    pub fn path_set(&self) -> HashSet<(String, Vec<String>)> {
        self.nodes
            .iter()
            .map(|n| (n.id.clone(), n.id_path()))
            .collect()
    }

    /// Check the structural invariants: root first with an empty ancestor
    /// list, each node's ancestors equal its parent's path, parents appear
    /// earlier, and no id repeats.
    pub fn is_well_formed(&self) -> bool {
        let Some(root) = self.nodes.first() else {
            return false;
        };
        if !root.is_root() || !root.ancestors.is_empty() {
            return false;
        }

        let mut seen: HashSet<&str> = HashSet::new();
        seen.insert(root.id.as_str());
        for node in &self.nodes[1..] {
            let Some(parent_id) = node.parent_id.as_deref() else {
                return false;
            };
            let Some(parent) = self.get(parent_id) else {
                return false;
            };
            if !seen.contains(parent_id) || node.ancestors != parent.id_path() {
                return false;
            }
            if !seen.insert(node.id.as_str()) {
                return false;
            }
        }
        true
    }

    /// Indented display lines, children listed under their parent.
    pub fn render_lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.nodes.len());
        let mut stack = vec![self.root()];
        while let Some(node) = stack.pop() {
            lines.push(format!("{}{}/", "  ".repeat(node.depth()), node.name));
            let children: Vec<&FolderNode> = self
                .nodes
                .iter()
                .filter(|n| n.parent_id.as_deref() == Some(node.id.as_str()))
                .collect();
            stack.extend(children.into_iter().rev());
        }
        lines
    }
}

impl<'a> IntoIterator for &'a FolderTree {
    type Item = &'a FolderNode;
    type IntoIter = std::slice::Iter<'a, FolderNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}
