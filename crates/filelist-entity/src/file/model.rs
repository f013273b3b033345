//! File record model.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use filelist_core::types::DriveItem;

/// A file found inside an enumerated folder.
///
/// The containing folder is implied by the [`FolderFiles`](crate::FolderFiles)
/// entry the record belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRecord {
    /// File ID.
    pub id: String,
    /// File name.
    pub name: String,
    /// Content type.
    pub mime_type: String,
    /// Projected attributes passed through from the backend.
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl FileRecord {
    /// Look up a projected attribute.
    pub fn attribute(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }

    /// Size in bytes, when projected. The backend reports it as a string.
    pub fn size_bytes(&self) -> Option<u64> {
        match self.attributes.get("size")? {
            Value::String(s) => s.parse().ok(),
            Value::Number(n) => n.as_u64(),
            _ => None,
        }
    }
}

impl From<DriveItem> for FileRecord {
    fn from(item: DriveItem) -> Self {
        let mut attributes = item.attributes;
        if !item.parents.is_empty() {
            attributes.insert(
                "parents".to_string(),
                Value::Array(item.parents.into_iter().map(Value::String).collect()),
            );
        }
        Self {
            id: item.id,
            name: item.name,
            mime_type: item.mime_type,
            attributes,
        }
    }
}
