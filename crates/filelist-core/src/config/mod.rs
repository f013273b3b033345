//! Application configuration schemas.
//!
//! All configuration structs are deserialized via the `config` crate from
//! optional TOML files and `GETFILELIST__`-prefixed environment variables.
//! Each sub-module represents a logical configuration section.

pub mod drive;
pub mod listing;
pub mod logging;
pub mod traversal;

use serde::{Deserialize, Serialize};

use self::drive::DriveConfig;
use self::listing::ListingConfig;
use self::logging::LoggingConfig;
use self::traversal::TraversalConfig;

use crate::error::AppError;

/// Environment variable prefix for configuration overrides.
pub const ENV_PREFIX: &str = "GETFILELIST";

/// Root application configuration.
///
/// Every section has defaults, so an empty configuration source yields a
/// usable value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Backend connection settings.
    #[serde(default)]
    pub drive: DriveConfig,
    /// Folder traversal settings.
    #[serde(default)]
    pub traversal: TraversalConfig,
    /// File listing defaults.
    #[serde(default)]
    pub listing: ListingConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from TOML files.
    ///
    /// Merges `config/default.toml` with an environment-specific overlay
    /// `config/{env}.toml` and environment variables prefixed with
    /// `GETFILELIST__` (for example `GETFILELIST__DRIVE__ACCESS_TOKEN`).
    pub fn load(env: &str) -> Result<Self, AppError> {
        let builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false));
        Self::from_builder(builder)
    }

    /// Load configuration from an explicit TOML file plus the environment.
    pub fn load_file(path: &str) -> Result<Self, AppError> {
        let builder = config::Config::builder()
            .add_source(config::File::with_name(path).required(true));
        Self::from_builder(builder)
    }

    fn from_builder(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<Self, AppError> {
        let config = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("listing.mime_types")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }

    /// Parse configuration from an in-memory TOML document.
    pub fn from_toml(source: &str) -> Result<Self, AppError> {
        config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
            .map_err(AppError::from)
    }

    /// Return a copy that is safe to print, with secrets masked.
    pub fn redacted(&self) -> Self {
        let mut copy = self.clone();
        if !copy.drive.access_token.is_empty() {
            copy.drive.access_token = "********".to_string();
        }
        copy
    }
}
