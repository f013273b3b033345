//! Cursor pagination types for list calls.

use serde::{Deserialize, Serialize};

use super::fields::FieldProjection;
use super::filter::QueryFilter;
use super::item::DriveItem;

/// Page size used for every list call; the backend's practical maximum.
pub const PAGE_SIZE: u32 = 1000;

/// Ordering requested from the backend.
pub const ORDER_BY_NAME: &str = "name";

/// A single list call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListRequest {
    /// Filter, rendered by the backend at the call boundary.
    pub filter: QueryFilter,
    /// Field projection, always including the cursor field.
    pub fields: FieldProjection,
    /// Maximum number of entities per page.
    pub page_size: u32,
    /// Ordering key.
    pub order_by: String,
    /// Continuation cursor from the previous page.
    pub page_token: Option<String>,
    /// Shared-drive scope; `None` means the caller's default scope.
    pub drive_id: Option<String>,
}

impl ListRequest {
    /// First-page request for `filter`.
    pub fn new(filter: &QueryFilter, fields: &FieldProjection, drive_id: Option<&str>) -> Self {
        Self {
            filter: filter.clone(),
            fields: fields.clone(),
            page_size: PAGE_SIZE,
            order_by: ORDER_BY_NAME.to_string(),
            page_token: None,
            drive_id: drive_id.map(str::to_string),
        }
    }

    /// The same request continued at `cursor`.
    pub fn next_page(&self, cursor: &str) -> Self {
        Self {
            page_token: Some(cursor.to_string()),
            ..self.clone()
        }
    }
}

/// One page of a list response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListPage {
    /// Entities on this page, ordered by name.
    #[serde(rename = "files", default)]
    pub items: Vec<DriveItem>,
    /// Continuation cursor; absent or empty on the last page.
    #[serde(
        rename = "nextPageToken",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub next_page_token: Option<String>,
}

impl ListPage {
    /// The cursor for the next page, if there is one.
    pub fn cursor(&self) -> Option<&str> {
        self.next_page_token.as_deref().filter(|t| !t.is_empty())
    }
}
