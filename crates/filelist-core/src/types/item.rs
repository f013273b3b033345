//! Entities as reported by the backend.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::filter::FOLDER_MIME_TYPE;

/// A file or folder entry from a list response.
///
/// Only the fields the traversal needs are typed; everything else the
/// projection asked for is kept verbatim in `attributes`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriveItem {
    /// Backend identifier.
    #[serde(default)]
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Content type.
    #[serde(default)]
    pub mime_type: String,
    /// Parent folder ids; the first entry is treated as the parent.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parents: Vec<String>,
    /// Remaining projected attributes (size, timestamps, owners, ...).
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl DriveItem {
    /// Whether this entry is a folder.
    pub fn is_folder(&self) -> bool {
        self.mime_type == FOLDER_MIME_TYPE
    }

    /// The primary parent id, if any.
    pub fn parent_id(&self) -> Option<&str> {
        self.parents.first().map(String::as_str)
    }
}

/// Metadata of the folder an enumeration starts from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderMetadata {
    /// Backend identifier.
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Content type.
    #[serde(default)]
    pub mime_type: String,
    /// Whether the folder is shared with the caller; selects the crawl strategy.
    #[serde(default)]
    pub shared: bool,
    /// Shared-drive id for multi-drive backends.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drive_id: Option<String>,
    /// Parent folder ids.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parents: Vec<String>,
    /// Remaining projected attributes.
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}
