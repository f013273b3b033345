//! File listing defaults.

use serde::{Deserialize, Serialize};

/// Defaults applied when enumerating files.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListingConfig {
    /// Custom field projection for file queries.
    #[serde(default)]
    pub fields: Option<String>,
    /// Content types to keep; empty keeps every file.
    #[serde(default)]
    pub mime_types: Vec<String>,
}
