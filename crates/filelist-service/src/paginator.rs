//! Cursor-following list loop.

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use filelist_core::error::AppError;
use filelist_core::result::AppResult;
use filelist_core::traits::DriveBackend;
use filelist_core::types::{DriveItem, FieldProjection, ListRequest, QueryFilter};

/// Runs a filter to exhaustion, one page at a time.
///
/// The result is either every matching entity, in page order, or an error.
/// A failure on any page discards the pages already fetched.
#[derive(Clone)]
pub struct Paginator {
    backend: Arc<dyn DriveBackend>,
    drive_id: Option<String>,
}

impl Paginator {
    /// A paginator over `backend` in the caller's default scope.
    pub fn new(backend: Arc<dyn DriveBackend>) -> Self {
        Self {
            backend,
            drive_id: None,
        }
    }

    /// Scope every list call to a shared drive. `None` keeps the default
    /// personal scope.
    pub fn with_drive_scope(mut self, drive_id: Option<String>) -> Self {
        self.drive_id = drive_id;
        self
    }

    /// The shared-drive scope in use, if any.
    pub fn drive_scope(&self) -> Option<&str> {
        self.drive_id.as_deref()
    }

    /// Fetch every entity matching `filter`.
    pub async fn collect(
        &self,
        filter: &QueryFilter,
        fields: &FieldProjection,
    ) -> AppResult<Vec<DriveItem>> {
        let mut request = ListRequest::new(filter, fields, self.drive_id.as_deref());
        let mut items = Vec::new();
        let mut pages = 0usize;

        loop {
            let page = self.backend.list_page(&request).await?;
            pages += 1;

            let cursor = page.cursor().map(str::to_string);
            items.extend(page.items);

            match cursor {
                None => break,
                Some(cursor) if request.page_token.as_deref() == Some(cursor.as_str()) => {
                    return Err(AppError::malformed(format!(
                        "Backend returned the same page token twice ({cursor}) for query: {filter}"
                    )));
                }
                Some(cursor) => request = request.next_page(&cursor),
            }
        }

        debug!(query = %filter, pages, items = items.len(), "Listing complete");
        Ok(items)
    }
}

impl fmt::Debug for Paginator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Paginator")
            .field("backend", &self.backend.backend_type())
            .field("drive_id", &self.drive_id)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use filelist_core::error::ErrorKind;
    use filelist_core::types::{FolderMetadata, ListPage};
    use filelist_drive::MemoryDrive;

    fn drive_with_folders(count: usize) -> MemoryDrive {
        let mut drive = MemoryDrive::new("root", "My Drive");
        for i in 0..count {
            drive.add_folder(&format!("id-{i:05}"), &format!("folder-{i:05}"), "root");
        }
        drive
    }

    #[tokio::test]
    async fn test_collects_every_page() {
        let drive = drive_with_folders(2037);
        let paginator = Paginator::new(Arc::new(drive.clone()));

        let items = paginator
            .collect(&QueryFilter::all_folders(), &FieldProjection::folders())
            .await
            .unwrap();

        assert_eq!(items.len(), 2037);
        assert_eq!(drive.list_calls(), 3);
        assert_eq!(items[0].name, "folder-00000");
        assert_eq!(items[2036].name, "folder-02036");

        let tokens: Vec<Option<String>> =
            drive.requests().into_iter().map(|r| r.page_token).collect();
        assert_eq!(
            tokens,
            vec![None, Some("1000".to_string()), Some("2000".to_string())]
        );
    }

    #[tokio::test]
    async fn test_failure_on_second_page_returns_no_items() {
        let mut drive = drive_with_folders(2037);
        drive.fail_on_list_call(2);
        let paginator = Paginator::new(Arc::new(drive.clone()));

        let result = paginator
            .collect(&QueryFilter::all_folders(), &FieldProjection::folders())
            .await;

        let err = result.unwrap_err();
        assert_eq!(err.kind, ErrorKind::ExternalService);
        assert_eq!(drive.list_calls(), 2);
    }

    #[tokio::test]
    async fn test_empty_listing_is_single_call() {
        let drive = drive_with_folders(0);
        let paginator = Paginator::new(Arc::new(drive.clone()));
        let items = paginator
            .collect(&QueryFilter::child_folders("root"), &FieldProjection::folders())
            .await
            .unwrap();
        assert!(items.is_empty());
        assert_eq!(drive.list_calls(), 1);
    }

    #[tokio::test]
    async fn test_drive_scope_is_sent() {
        let drive = drive_with_folders(1);
        let paginator =
            Paginator::new(Arc::new(drive.clone())).with_drive_scope(Some("0AB".to_string()));
        paginator
            .collect(&QueryFilter::all_folders(), &FieldProjection::folders())
            .await
            .unwrap();
        assert_eq!(drive.requests()[0].drive_id.as_deref(), Some("0AB"));
        assert_eq!(paginator.drive_scope(), Some("0AB"));
    }

    #[tokio::test]
    async fn test_repeated_cursor_is_malformed() {
        let paginator = Paginator::new(Arc::new(LoopingBackend));
        let err = paginator
            .collect(&QueryFilter::all_folders(), &FieldProjection::folders())
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Serialization);
    }

    /// Always answers with the same cursor.
    #[derive(Debug)]
    struct LoopingBackend;

    #[async_trait]
    impl DriveBackend for LoopingBackend {
        fn backend_type(&self) -> &str {
            "looping"
        }

        async fn fetch_metadata(&self, _folder_id: &str) -> AppResult<FolderMetadata> {
            Err(AppError::external("unused"))
        }

        async fn list_page(&self, _request: &ListRequest) -> AppResult<ListPage> {
            Ok(ListPage {
                items: Vec::new(),
                next_page_token: Some("same".to_string()),
            })
        }
    }
}
