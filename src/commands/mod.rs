//! CLI command definitions and dispatch.

pub mod config;
pub mod files;
pub mod tree;

use std::sync::Arc;

use clap::{Parser, Subcommand};

use filelist_core::config::AppConfig;
use filelist_core::error::AppError;
use filelist_core::traits::DriveBackend;
use filelist_drive::GoogleDriveProvider;
use filelist_service::FileListService;

use crate::output::OutputFormat;

/// Environment variable naming the configuration overlay.
pub const CONFIG_ENV_VAR: &str = "GETFILELIST_ENV";

/// Retrieve folder trees and file lists from Google Drive
#[derive(Debug, Parser)]
#[command(name = "getfilelist", version, about, long_about = None)]
pub struct Cli {
    /// Configuration overlay to load from `config/<ENV>.toml`
    #[arg(short = 'e', long)]
    pub config_env: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the folder tree under a folder
    Tree(tree::TreeArgs),
    /// Print every file under a folder, grouped by folder
    Files(files::FilesArgs),
    /// Print the effective configuration
    Config,
}

impl Cli {
    /// Name of the configuration overlay: flag, then environment, then
    /// `development`.
    pub fn config_env(&self) -> String {
        self.config_env
            .clone()
            .or_else(|| std::env::var(CONFIG_ENV_VAR).ok())
            .unwrap_or_else(|| "development".to_string())
    }

    /// Apply command-line overrides on top of the loaded configuration.
    pub fn apply_overrides(&self, config: &mut AppConfig) {
        if let Commands::Files(args) = &self.command {
            args.apply_overrides(config);
        }
    }

    /// Execute the CLI command
    pub async fn execute(&self, config: &AppConfig) -> Result<(), AppError> {
        match &self.command {
            Commands::Tree(args) => tree::execute(args, config, self.format).await,
            Commands::Files(args) => files::execute(args, config, self.format).await,
            Commands::Config => config::execute(config, self.format),
        }
    }
}

/// Helper: build the service against the configured Drive API
pub fn create_service(config: &AppConfig) -> Result<FileListService, AppError> {
    if config.drive.access_token.is_empty() {
        return Err(AppError::configuration(
            "No access token configured (set drive.access_token or GETFILELIST__DRIVE__ACCESS_TOKEN)",
        ));
    }
    let backend: Arc<dyn DriveBackend> = Arc::new(GoogleDriveProvider::new(&config.drive)?);
    tracing::debug!(backend = backend.backend_type(), "Drive backend ready");
    Ok(FileListService::new(backend, config.traversal.clone()))
}
