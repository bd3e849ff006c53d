use crate::errors::AppResult;
use clap::{Parser, Subcommand};
use tracing_subscriber;

pub mod commands;

/// Image Upload Content Validation Harness
#[derive(Parser)]
#[command(name = "upload-guard")]
#[command(about = "Image upload content validation harness")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Run the built-in fixture suite and print the validation report
    Suite(commands::suite::SuiteCommand),
    /// Classify a single file by its magic bytes
    Classify(commands::classify::ClassifyCommand),
}

pub fn run() -> AppResult<i32> {
    // Initialise tracing subscriber to capture info!() macros
    // Uses RUST_LOG environment variable (defaults to "error" if not set)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("error")),
        )
        .try_init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Suite(command)) => command.run(),
        Some(Commands::Classify(command)) => command.run(),
        // Bare invocation runs the full suite with configured defaults
        None => commands::suite::SuiteCommand::default().run(),
    }
}
