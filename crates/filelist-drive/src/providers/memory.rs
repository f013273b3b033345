//! In-memory drive backend.
//!
//! Serves a fixed snapshot of folders and files through the same flat,
//! filtered, cursor-paginated interface as the real API, and records every
//! list call so callers can assert on what went over the "wire".

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{Map, Value};

use filelist_core::error::AppError;
use filelist_core::result::AppResult;
use filelist_core::traits::DriveBackend;
use filelist_core::traits::drive::ROOT_FOLDER_ALIAS;
use filelist_core::types::{
    DriveItem, EntityKind, FOLDER_MIME_TYPE, FolderMetadata, ListPage, ListRequest, QueryFilter,
};

/// One stored entity plus the flags the listing logic looks at.
#[derive(Debug, Clone)]
struct Entry {
    item: DriveItem,
    trashed: bool,
    shared: bool,
    drive_id: Option<String>,
    /// Whether an unscoped (no parent predicate) listing returns this entry.
    bulk_visible: bool,
}

/// A drive snapshot held in memory.
#[derive(Debug, Clone)]
pub struct MemoryDrive {
    root_id: String,
    entries: Vec<Entry>,
    list_calls: Arc<AtomicUsize>,
    metadata_calls: Arc<AtomicUsize>,
    fail_on_list_call: Option<usize>,
    requests: Arc<Mutex<Vec<ListRequest>>>,
}

impl MemoryDrive {
    /// A drive whose root container is `root_id`.
    pub fn new(root_id: impl Into<String>, root_name: impl Into<String>) -> Self {
        let root_id = root_id.into();
        let root = Entry {
            item: DriveItem {
                id: root_id.clone(),
                name: root_name.into(),
                mime_type: FOLDER_MIME_TYPE.to_string(),
                ..Default::default()
            },
            trashed: false,
            shared: false,
            drive_id: None,
            bulk_visible: false,
        };
        Self {
            root_id,
            entries: vec![root],
            list_calls: Arc::new(AtomicUsize::new(0)),
            metadata_calls: Arc::new(AtomicUsize::new(0)),
            fail_on_list_call: None,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Add a folder below `parent_id`.
    pub fn add_folder(&mut self, id: &str, name: &str, parent_id: &str) -> &mut Self {
        self.push(id, name, FOLDER_MIME_TYPE, Some(parent_id), Map::new())
    }

    /// Add a folder that has no parent visible to the caller.
    pub fn add_detached_folder(&mut self, id: &str, name: &str) -> &mut Self {
        self.push(id, name, FOLDER_MIME_TYPE, None, Map::new())
    }

    /// Add a file below `parent_id`.
    pub fn add_file(&mut self, id: &str, name: &str, mime_type: &str, parent_id: &str) -> &mut Self {
        let mut attributes = Map::new();
        attributes.insert("size".to_string(), Value::String(name.len().to_string()));
        self.push(id, name, mime_type, Some(parent_id), attributes)
    }

    /// Mark an entity as trashed.
    pub fn trash(&mut self, id: &str) -> &mut Self {
        self.update(id, |e| e.trashed = true)
    }

    /// Mark a folder as shared with the caller, scoped to `drive_id` if given.
    ///
    /// The folder and everything below it is hidden from unscoped listings,
    /// which is what forces the per-folder crawl against the real API.
    pub fn share(&mut self, id: &str, drive_id: Option<&str>) -> &mut Self {
        self.update(id, |e| {
            e.shared = true;
            e.drive_id = drive_id.map(str::to_string);
        });
        let hidden = self.descendants_of(id);
        for entry in &mut self.entries {
            if entry.item.id == id || hidden.contains(&entry.item.id) {
                entry.bulk_visible = false;
            }
        }
        self
    }

    /// Make the `call`-th list call (1-based) fail with a transport error.
    pub fn fail_on_list_call(&mut self, call: usize) -> &mut Self {
        self.fail_on_list_call = Some(call);
        self
    }

    /// Number of list calls served so far.
    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    /// Number of metadata calls served so far.
    pub fn metadata_calls(&self) -> usize {
        self.metadata_calls.load(Ordering::SeqCst)
    }

    /// Every list request received, in arrival order.
    pub fn requests(&self) -> Vec<ListRequest> {
        self.requests
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }

    fn push(
        &mut self,
        id: &str,
        name: &str,
        mime_type: &str,
        parent_id: Option<&str>,
        attributes: Map<String, Value>,
    ) -> &mut Self {
        self.entries.push(Entry {
            item: DriveItem {
                id: id.to_string(),
                name: name.to_string(),
                mime_type: mime_type.to_string(),
                parents: parent_id.map(|p| vec![p.to_string()]).unwrap_or_default(),
                attributes,
            },
            trashed: false,
            shared: false,
            drive_id: None,
            bulk_visible: true,
        });
        self
    }

    fn update(&mut self, id: &str, f: impl FnOnce(&mut Entry)) -> &mut Self {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.item.id == id) {
            f(entry);
        }
        self
    }

    fn descendants_of(&self, id: &str) -> Vec<String> {
        let mut found = Vec::new();
        let mut stack = vec![id.to_string()];
        while let Some(current) = stack.pop() {
            for entry in &self.entries {
                if entry.item.parent_id() == Some(current.as_str()) && !found.contains(&entry.item.id)
                {
                    found.push(entry.item.id.clone());
                    stack.push(entry.item.id.clone());
                }
            }
        }
        found
    }

    fn matches(entry: &Entry, filter: &QueryFilter) -> bool {
        if entry.trashed {
            return false;
        }
        match &filter.parent {
            Some(parent) => {
                if entry.item.parent_id() != Some(parent.as_str()) {
                    return false;
                }
            }
            None => {
                if !entry.bulk_visible {
                    return false;
                }
            }
        }
        let kind_matches = match filter.kind {
            EntityKind::Folders => entry.item.is_folder(),
            EntityKind::Files => !entry.item.is_folder(),
        };
        kind_matches
            && (filter.mime_types.is_empty() || filter.mime_types.contains(&entry.item.mime_type))
    }
}

#[async_trait]
impl DriveBackend for MemoryDrive {
    fn backend_type(&self) -> &str {
        "memory"
    }

    async fn fetch_metadata(&self, folder_id: &str) -> AppResult<FolderMetadata> {
        self.metadata_calls.fetch_add(1, Ordering::SeqCst);
        let id = if folder_id == ROOT_FOLDER_ALIAS {
            self.root_id.as_str()
        } else {
            folder_id
        };
        let entry = self
            .entries
            .iter()
            .find(|e| e.item.id == id)
            .ok_or_else(|| AppError::external(format!("HTTP 404: File not found: {folder_id}.")))?;

        Ok(FolderMetadata {
            id: entry.item.id.clone(),
            name: entry.item.name.clone(),
            mime_type: entry.item.mime_type.clone(),
            shared: entry.shared,
            drive_id: entry.drive_id.clone(),
            parents: entry.item.parents.clone(),
            attributes: Map::new(),
        })
    }

    async fn list_page(&self, request: &ListRequest) -> AppResult<ListPage> {
        let call = self.list_calls.fetch_add(1, Ordering::SeqCst) + 1;
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request.clone());
        }
        if self.fail_on_list_call == Some(call) {
            return Err(AppError::external(format!(
                "HTTP 503: injected failure on list call {call}"
            )));
        }

        let mut matching: Vec<&DriveItem> = self
            .entries
            .iter()
            .filter(|e| Self::matches(e, &request.filter))
            .map(|e| &e.item)
            .collect();
        matching.sort_by(|a, b| a.name.cmp(&b.name));

        let offset = match request.page_token.as_deref() {
            Some(token) => token
                .parse::<usize>()
                .map_err(|_| AppError::malformed(format!("Unknown page token: {token}")))?,
            None => 0,
        };
        let page_size = request.page_size.max(1) as usize;
        let end = (offset + page_size).min(matching.len());

        let items = matching
            .get(offset..end)
            .unwrap_or_default()
            .iter()
            .map(|item| (*item).clone())
            .collect();
        let next_page_token = (end < matching.len()).then(|| end.to_string());

        Ok(ListPage {
            items,
            next_page_token,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use filelist_core::types::FieldProjection;

    fn drive() -> MemoryDrive {
        let mut drive = MemoryDrive::new("root", "My Drive");
        drive
            .add_folder("b", "Beta", "root")
            .add_folder("a", "Alpha", "root")
            .add_file("f1", "one.txt", "text/plain", "a")
            .add_file("f2", "two.png", "image/png", "a");
        drive
    }

    #[tokio::test]
    async fn test_children_in_name_order() {
        let drive = drive();
        let request = ListRequest::new(
            &QueryFilter::child_folders("root"),
            &FieldProjection::folders(),
            None,
        );
        let page = drive.list_page(&request).await.unwrap();
        let names: Vec<&str> = page.items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Alpha", "Beta"]);
        assert!(page.cursor().is_none());
        assert_eq!(drive.list_calls(), 1);
    }

    #[tokio::test]
    async fn test_trashed_and_filtered_types_excluded() {
        let mut drive = drive();
        drive.trash("f1");
        let request = ListRequest::new(
            &QueryFilter::child_files("a", &[]),
            &FieldProjection::default(),
            None,
        );
        let page = drive.list_page(&request).await.unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].id, "f2");
    }

    #[tokio::test]
    async fn test_shared_subtree_hidden_from_unscoped_listing() {
        let mut drive = drive();
        drive.add_folder("s", "Shared", "a").add_folder("s1", "Inner", "s");
        drive.share("s", None);

        let request = ListRequest::new(&QueryFilter::all_folders(), &FieldProjection::folders(), None);
        let page = drive.list_page(&request).await.unwrap();
        let ids: Vec<&str> = page.items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);

        let meta = drive.fetch_metadata("s").await.unwrap();
        assert!(meta.shared);
    }

    #[tokio::test]
    async fn test_root_alias_and_missing_folder() {
        let drive = drive();
        assert_eq!(drive.fetch_metadata("root").await.unwrap().name, "My Drive");
        let err = drive.fetch_metadata("nope").await.unwrap_err();
        assert!(err.is_backend_failure());
        assert_eq!(drive.metadata_calls(), 2);
    }

    #[tokio::test]
    async fn test_injected_failure() {
        let mut drive = drive();
        drive.fail_on_list_call(1);
        let request = ListRequest::new(&QueryFilter::all_folders(), &FieldProjection::folders(), None);
        assert!(drive.list_page(&request).await.is_err());
        assert!(drive.list_page(&request).await.is_ok());
        assert_eq!(drive.requests().len(), 2);
    }
}
