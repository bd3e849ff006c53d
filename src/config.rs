use config::{Config, ConfigError, File};
use serde::{Deserialize, Serialize};
use std::env;

/// Application configuration loaded from config.toml or environment variables
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub report: ReportConfig,
}

/// Report presentation settings
///
/// Only presentation is configurable; classification behaviour never is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Suite report output format ("console" or "json")
    pub format: String,
    /// Maximum payload bytes shown in hex previews
    pub preview_bytes: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            format: "console".to_string(),
            preview_bytes: 50,
        }
    }
}

impl AppConfig {
    /// Load configuration from config.toml file and environment variables
    /// Environment variables take precedence over file configuration
    pub fn load() -> Result<Self, ConfigError> {
        let defaults = ReportConfig::default();
        let config = Config::builder()
            // Start with default values
            .set_default("report.format", defaults.format)?
            .set_default("report.preview_bytes", defaults.preview_bytes as i64)?
            // Load from config.toml if it exists
            .add_source(File::with_name("config").required(false))
            // Override with environment variables
            .add_source(config::Environment::with_prefix("UPLOAD_GUARD"))
            .build()?;

        let mut app_config: AppConfig = config.try_deserialize()?;

        // Check for specific environment variables with custom names
        if let Ok(format) = env::var("UPLOAD_GUARD_REPORT_FORMAT") {
            app_config.report.format = format;
        }

        if let Ok(preview) = env::var("UPLOAD_GUARD_PREVIEW_BYTES") {
            app_config.report.preview_bytes = preview.parse().map_err(|_| {
                ConfigError::Message(format!(
                    "invalid UPLOAD_GUARD_PREVIEW_BYTES value: {}",
                    preview
                ))
            })?;
        }

        Ok(app_config)
    }

    /// Get default config values for CLI argument defaults
    pub fn get_defaults() -> Self {
        // Try to load config for defaults, but don't fail if not found
        match Self::load() {
            Ok(config) => config,
            Err(_) => Self {
                report: ReportConfig::default(),
            },
        }
    }
}
