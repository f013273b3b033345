//! File list command.

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use filelist_core::config::AppConfig;
use filelist_core::error::AppError;
use filelist_entity::listing::FileListResult;
use filelist_service::ListOptions;

use crate::output::{self, OutputFormat};

/// Arguments for the files command
#[derive(Debug, Args)]
pub struct FilesArgs {
    /// Folder ID to start from (omit for the drive root)
    #[arg(long)]
    pub folder: Option<String>,

    /// Custom field projection, e.g. `files(id,name)`
    #[arg(long)]
    pub fields: Option<String>,

    /// Only list files of this content type (repeatable)
    #[arg(long = "mime-type")]
    pub mime_types: Vec<String>,

    /// Maximum number of list queries in flight
    #[arg(long)]
    pub concurrency: Option<usize>,
}

impl FilesArgs {
    /// Override listing and traversal settings given on the command line.
    pub fn apply_overrides(&self, config: &mut AppConfig) {
        if let Some(fields) = &self.fields {
            config.listing.fields = Some(fields.clone());
        }
        if !self.mime_types.is_empty() {
            config.listing.mime_types = self.mime_types.clone();
        }
        if let Some(concurrency) = self.concurrency {
            config.traversal.max_concurrency = concurrency;
        }
    }
}

/// File display row
#[derive(Debug, Serialize, Tabled)]
pub struct FileRow {
    /// Containing folder name
    pub folder: String,
    /// File ID
    pub id: String,
    /// Name
    pub name: String,
    /// Content type
    pub mime_type: String,
    /// Size in bytes, when projected
    pub size: String,
}

/// Flatten a result into display rows, in tree order.
pub fn rows(result: &FileListResult) -> Vec<FileRow> {
    result
        .file_list()
        .iter()
        .flat_map(|entry| {
            entry.files.iter().map(|file| FileRow {
                folder: entry.folder.name.clone(),
                id: file.id.clone(),
                name: file.name.clone(),
                mime_type: file.mime_type.clone(),
                size: file
                    .size_bytes()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "-".to_string()),
            })
        })
        .collect()
}

/// Execute the files command
pub async fn execute(
    args: &FilesArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let service = super::create_service(config)?;
    let options = ListOptions::from(&config.listing);
    let result = match &args.folder {
        Some(id) => service.file_list(id, &options).await?,
        None => service.root_file_list(&options).await?,
    };

    match format {
        OutputFormat::Json => output::print_json(&result),
        OutputFormat::Table => {
            output::print_list(&rows(&result), format);
            println!();
            output::print_kv("Searched folder", &result.searched_folder().name);
            output::print_kv("Total folders", &result.total_folders().to_string());
            output::print_kv("Total files", &result.total_files().to_string());
            output::print_kv("Retrieved at", &result.retrieved_at().to_rfc3339());
        }
    }

    Ok(())
}
