//! Configuration display command.

use filelist_core::config::AppConfig;
use filelist_core::error::AppError;

use crate::output::{self, OutputFormat};

/// Print the effective configuration with the access token masked
pub fn execute(config: &AppConfig, format: OutputFormat) -> Result<(), AppError> {
    let config = config.redacted();

    match format {
        OutputFormat::Json => output::print_json(&config),
        OutputFormat::Table => {
            output::print_section("drive");
            output::print_kv("api_base_url", &config.drive.api_base_url);
            output::print_kv("access_token", or_unset(&config.drive.access_token));
            output::print_kv(
                "request_timeout_seconds",
                &config
                    .drive
                    .request_timeout_seconds
                    .map_or_else(|| "none".to_string(), |s| s.to_string()),
            );

            output::print_section("traversal");
            output::print_kv("max_concurrency", &config.traversal.concurrency().to_string());

            output::print_section("listing");
            output::print_kv(
                "fields",
                config.listing.fields.as_deref().unwrap_or("(default)"),
            );
            output::print_kv("mime_types", &config.listing.mime_types.join(", "));

            output::print_section("logging");
            output::print_kv("level", &config.logging.level);
            output::print_kv("format", &config.logging.format);
        }
    }

    Ok(())
}

fn or_unset(value: &str) -> &str {
    if value.is_empty() { "(unset)" } else { value }
}
