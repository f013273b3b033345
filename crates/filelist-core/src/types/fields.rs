//! Field projections sent with list calls.

use serde::{Deserialize, Serialize};

/// Name of the continuation-token field in list responses.
pub const CURSOR_FIELD: &str = "nextPageToken";

/// Default projection for file queries.
pub const DEFAULT_FILE_FIELDS: &str = "files(createdTime,description,id,mimeType,modifiedTime,name,owners,parents,permissions,shared,size,webContentLink,webViewLink),nextPageToken";

/// Projection for folder queries; only what the tree needs.
pub const FOLDER_FIELDS: &str = "files(id,mimeType,name,parents,size),nextPageToken";

/// Projection for the searched folder's own metadata.
pub const METADATA_FIELDS: &str =
    "id,name,mimeType,parents,shared,driveId,createdTime,modifiedTime,owners,webViewLink";

/// A field projection that always requests the continuation token.
///
/// Without the cursor field the backend omits `nextPageToken` and pagination
/// would silently stop after the first page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldProjection(String);

impl FieldProjection {
    /// Build a projection, appending the cursor field if it is missing.
    pub fn new(fields: impl Into<String>) -> Self {
        let mut fields = fields.into();
        if !fields.contains(CURSOR_FIELD) {
            if !fields.is_empty() {
                fields.push(',');
            }
            fields.push_str(CURSOR_FIELD);
        }
        Self(fields)
    }

    /// Projection used when listing folders.
    pub fn folders() -> Self {
        Self(FOLDER_FIELDS.to_string())
    }

    /// A caller-supplied projection, or the default file projection when
    /// none (or an empty one) is given.
    pub fn files(custom: Option<&str>) -> Self {
        match custom.map(str::trim) {
            Some(fields) if !fields.is_empty() => Self::new(fields),
            _ => Self(DEFAULT_FILE_FIELDS.to_string()),
        }
    }

    /// The projection as sent on the wire.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for FieldProjection {
    fn default() -> Self {
        Self::files(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_field_appended() {
        let fields = FieldProjection::files(Some("files(id,name)"));
        assert_eq!(fields.as_str(), "files(id,name),nextPageToken");
    }

    #[test]
    fn test_cursor_field_not_duplicated() {
        let fields = FieldProjection::new("nextPageToken,files(id)");
        assert_eq!(fields.as_str(), "nextPageToken,files(id)");
    }

    #[test]
    fn test_blank_custom_falls_back_to_default() {
        assert_eq!(FieldProjection::files(Some("  ")).as_str(), DEFAULT_FILE_FIELDS);
        assert_eq!(FieldProjection::default().as_str(), DEFAULT_FILE_FIELDS);
    }

    #[test]
    fn test_builtin_projections_request_cursor() {
        assert!(FieldProjection::folders().as_str().contains(CURSOR_FIELD));
        assert!(DEFAULT_FILE_FIELDS.ends_with(CURSOR_FIELD));
    }
}
