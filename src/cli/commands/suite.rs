use crate::config::AppConfig;
use crate::errors::AppResult;
use crate::harness::fixtures::builtin_fixtures;
use crate::harness::report::{run_suite, OutputFormat, ReportFormatter};
use clap::Args;
use std::str::FromStr;
use tracing::{info, warn};

#[derive(Args, Default)]
#[command(author, version, about, long_about = None)]
pub struct SuiteCommand {
    /// Report output format: console or json (overrides config.toml)
    #[arg(long)]
    format: Option<String>,

    /// Payload bytes shown in hex previews (overrides config.toml)
    #[arg(long)]
    preview_bytes: Option<usize>,
}

impl SuiteCommand {
    pub fn run(&self) -> AppResult<i32> {
        info!("=== Upload Guard - Fixture Suite ===");

        // Load configuration from file/environment
        let app_config = match AppConfig::load() {
            Ok(config) => {
                info!("Configuration loaded successfully");
                config
            }
            Err(e) => {
                warn!("Failed to load configuration, using defaults: {}", e);
                AppConfig::get_defaults()
            }
        };

        // CLI arguments override config values
        let final_format = self
            .format
            .clone()
            .unwrap_or(app_config.report.format.clone());
        let final_preview_bytes = self
            .preview_bytes
            .unwrap_or(app_config.report.preview_bytes);

        let format = OutputFormat::from_str(&final_format)?;

        info!("Configuration:");
        info!("  Report format: {}", final_format);
        info!("  Preview bytes: {}", final_preview_bytes);

        let report = run_suite(&builtin_fixtures(), final_preview_bytes);
        print!(
            "{}",
            ReportFormatter::format_suite(&report, &format)?
        );

        Ok(report.exit_code())
    }
}
