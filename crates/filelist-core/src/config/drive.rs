//! Backend connection configuration.

use serde::{Deserialize, Serialize};

/// Base URL of the Google Drive v3 REST API.
pub const DEFAULT_API_BASE_URL: &str = "https://www.googleapis.com/drive/v3";

/// Settings for talking to the remote file store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriveConfig {
    /// API base URL (override for proxies or emulators).
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// Pre-obtained OAuth2 bearer token.
    #[serde(default)]
    pub access_token: String,
    /// Per-request timeout in seconds. Unset means no timeout.
    #[serde(default)]
    pub request_timeout_seconds: Option<u64>,
}

impl Default for DriveConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            access_token: String::new(),
            request_timeout_seconds: None,
        }
    }
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}
