use crate::config::AppConfig;
use crate::detection::{read_header_probe, sniff_header, PROBE_CAP};
use crate::errors::{AppError, AppResult};
use crate::harness::report::ReportFormatter;
use clap::Args;
use std::fs::File;
use std::path::PathBuf;
use tracing::info;

#[derive(Args)]
#[command(author, version, about, long_about = None)]
pub struct ClassifyCommand {
    /// File to classify by content
    path: PathBuf,

    /// Payload bytes shown in the hex preview (overrides config.toml)
    #[arg(long)]
    preview_bytes: Option<usize>,
}

impl ClassifyCommand {
    pub fn run(&self) -> AppResult<i32> {
        // Validate inputs
        if !self.path.exists() {
            return Err(AppError::Config(format!(
                "file does not exist: {}",
                self.path.display()
            )));
        }

        let app_config = AppConfig::get_defaults();
        let preview_bytes = self.preview_bytes.unwrap_or(app_config.report.preview_bytes);

        info!("Classifying {}", self.path.display());

        let mut file = File::open(&self.path)?;
        let header = read_header_probe(&mut file, PROBE_CAP)?;

        println!("File:   {}", self.path.display());
        println!(
            "Header: {} ({} bytes probed)",
            ReportFormatter::hex_preview(&header, preview_bytes),
            header.len()
        );

        match sniff_header(&header) {
            Ok(kind) => {
                println!("Detected: {} ({}, .{})", kind, kind.mime_type(), kind.extension());
                Ok(0)
            }
            Err(e) => {
                println!("Rejected: {}", e);
                Ok(1)
            }
        }
    }
}
