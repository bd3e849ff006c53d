//! Fixture suite for the signature classifier
//!
//! Byte-exact payloads with known-good expectations, a runner that checks
//! the classifier against them, and report formatting for console and JSON
//! output. For the malicious and irrelevant payloads, a rejection from the
//! classifier is the passing outcome.

pub mod fixtures;
pub mod report;

// Re-export for convenience
pub use fixtures::{builtin_fixtures, webshell_payload, Expectation, Fixture};
pub use report::{
    run_suite, OutputFormat, ReportFormatter, ScenarioOutcome, SuiteReport,
};
