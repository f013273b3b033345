//! Google Drive v3 REST backend.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use filelist_core::config::drive::DriveConfig;
use filelist_core::error::{AppError, ErrorKind};
use filelist_core::result::AppResult;
use filelist_core::traits::DriveBackend;
use filelist_core::types::fields::METADATA_FIELDS;
use filelist_core::types::{FolderMetadata, ListPage, ListRequest};

/// Drive backend that issues authenticated `files.get` / `files.list` calls.
#[derive(Debug, Clone)]
pub struct GoogleDriveProvider {
    client: reqwest::Client,
    base_url: String,
    access_token: String,
}

impl GoogleDriveProvider {
    /// Create a provider from the drive configuration section.
    pub fn new(config: &DriveConfig) -> AppResult<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.request_timeout_seconds {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().map_err(|e| {
            AppError::with_source(
                ErrorKind::Configuration,
                format!("Failed to build HTTP client: {e}"),
                e,
            )
        })?;

        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            access_token: config.access_token.clone(),
        })
    }

    /// URL for `files.get` on a single folder.
    fn metadata_url(&self, folder_id: &str) -> AppResult<Url> {
        let mut url = self.files_url()?;
        url.path_segments_mut()
            .map_err(|_| AppError::configuration(format!("Invalid API base URL: {}", self.base_url)))?
            .push(folder_id);
        url.query_pairs_mut()
            .append_pair("fields", METADATA_FIELDS)
            .append_pair("supportsAllDrives", "true");
        Ok(url)
    }

    /// URL for one `files.list` page.
    fn list_url(&self, request: &ListRequest) -> AppResult<Url> {
        let mut url = self.files_url()?;
        {
            let mut query = url.query_pairs_mut();
            query
                .append_pair("q", &request.filter.render())
                .append_pair("fields", request.fields.as_str())
                .append_pair("pageSize", &request.page_size.to_string())
                .append_pair("orderBy", &request.order_by);
            if let Some(token) = request.page_token.as_deref() {
                query.append_pair("pageToken", token);
            }
            if let Some(drive_id) = request.drive_id.as_deref() {
                query
                    .append_pair("corpora", "drive")
                    .append_pair("driveId", drive_id)
                    .append_pair("includeItemsFromAllDrives", "true")
                    .append_pair("supportsAllDrives", "true");
            }
        }
        Ok(url)
    }

    fn files_url(&self) -> AppResult<Url> {
        Url::parse(&format!("{}/files", self.base_url)).map_err(|e| {
            AppError::with_source(
                ErrorKind::Configuration,
                format!("Invalid API base URL '{}': {e}", self.base_url),
                e,
            )
        })
    }

    /// GET `url` and decode the JSON body, mapping failures to [`AppError`].
    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> AppResult<T> {
        let mut request = self.client.get(url);
        if !self.access_token.is_empty() {
            request = request.bearer_auth(&self.access_token);
        }

        let response = request.send().await.map_err(|e| {
            AppError::with_source(
                ErrorKind::ExternalService,
                format!("Drive request failed: {e}"),
                e,
            )
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            AppError::with_source(
                ErrorKind::ExternalService,
                format!("Failed to read Drive response: {e}"),
                e,
            )
        })?;

        if !status.is_success() {
            return Err(error_from_response(status, &body));
        }

        serde_json::from_str(&body).map_err(|e| {
            AppError::with_source(
                ErrorKind::Serialization,
                format!("Malformed Drive response: {e}"),
                e,
            )
        })
    }
}

#[async_trait]
impl DriveBackend for GoogleDriveProvider {
    fn backend_type(&self) -> &str {
        "google-drive"
    }

    async fn fetch_metadata(&self, folder_id: &str) -> AppResult<FolderMetadata> {
        let url = self.metadata_url(folder_id)?;
        debug!(folder_id, "Fetching folder metadata");
        self.get_json(url).await
    }

    async fn list_page(&self, request: &ListRequest) -> AppResult<ListPage> {
        let url = self.list_url(request)?;
        self.get_json(url).await
    }
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
    #[serde(default)]
    errors: Vec<ErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    #[serde(default)]
    reason: String,
}

/// Map a non-success response to an error, keeping the backend's message.
fn error_from_response(status: StatusCode, body: &str) -> AppError {
    let (message, reasons) = match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(env) => (
            env.error.message,
            env.error.errors.into_iter().map(|d| d.reason).collect::<Vec<_>>(),
        ),
        Err(_) => (body.trim().to_string(), Vec::new()),
    };
    let message = format!("HTTP {}: {message}", status.as_u16());

    let rate_limited = reasons
        .iter()
        .any(|r| r == "rateLimitExceeded" || r == "userRateLimitExceeded");

    match status {
        StatusCode::UNAUTHORIZED => AppError::authentication(message),
        StatusCode::TOO_MANY_REQUESTS => AppError::rate_limit(message),
        StatusCode::FORBIDDEN if rate_limited => AppError::rate_limit(message),
        StatusCode::FORBIDDEN => AppError::authorization(message),
        _ => AppError::external(message),
    }
}
