//! Suite execution and report formatting
//!
//! Runs the fixture table through the classifier, records expected versus
//! observed outcomes, and renders the result as a sectioned console report
//! or as JSON for programmatic use.

use std::str::FromStr;

use serde::Serialize;
use tracing::debug;

use crate::detection::{validate_image_bytes, ImageKind};
use crate::errors::{AppError, AppResult};
use crate::harness::fixtures::{webshell_payload, Expectation, Fixture};

/// Output format options for suite reports
#[derive(Debug, Clone, Default)]
pub enum OutputFormat {
    /// Human-readable console output
    #[default]
    Console,
    /// JSON format for programmatic use
    Json,
}

impl FromStr for OutputFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "console" => Ok(OutputFormat::Console),
            "json" => Ok(OutputFormat::Json),
            other => Err(AppError::Config(format!(
                "unknown report format: {} (expected console or json)",
                other
            ))),
        }
    }
}

/// Result of classifying one fixture
#[derive(Debug, Clone, Serialize)]
pub struct FixtureOutcome {
    pub name: &'static str,
    pub description: &'static str,
    /// Kind the fixture must classify as; `None` when rejection is expected
    pub expected_kind: Option<ImageKind>,
    /// Kind the classifier returned; `None` when it rejected the payload
    pub observed_kind: Option<ImageKind>,
    /// Rejection message when the classifier rejected
    pub rejection: Option<String>,
    pub passed: bool,
}

/// Result of the simulated `shell.php` upload attempt
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioOutcome {
    pub filename: &'static str,
    /// Bounded hex preview of the payload's leading bytes
    pub payload_preview: String,
    pub rejected: bool,
    pub rejection: Option<String>,
}

/// Aggregate result of one suite run
#[derive(Debug, Clone, Serialize)]
pub struct SuiteReport {
    pub outcomes: Vec<FixtureOutcome>,
    pub scenario: ScenarioOutcome,
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
}

impl SuiteReport {
    pub fn all_passed(&self) -> bool {
        self.failed == 0 && self.scenario.rejected
    }

    /// Process exit code: 0 when every fixture and the scenario behaved
    pub fn exit_code(&self) -> i32 {
        if self.all_passed() {
            0
        } else {
            1
        }
    }
}

/// Classify one fixture payload and compare against its expectation.
///
/// A rejection on a `Reject` fixture is a pass; acceptance of any kind on a
/// `Reject` fixture is a failure, as is a kind mismatch on an `Accept` one.
pub fn evaluate_fixture(fixture: &Fixture) -> FixtureOutcome {
    let observed = validate_image_bytes(&fixture.payload);
    debug!(fixture = fixture.name, outcome = ?observed, "fixture evaluated");

    let passed = match (&fixture.expectation, &observed) {
        (Expectation::Accept(expected), Ok(observed)) => expected == observed,
        (Expectation::Reject, Err(_)) => true,
        _ => false,
    };

    FixtureOutcome {
        name: fixture.name,
        description: fixture.description,
        expected_kind: match fixture.expectation {
            Expectation::Accept(kind) => Some(kind),
            Expectation::Reject => None,
        },
        observed_kind: observed.as_ref().ok().copied(),
        rejection: observed.err().map(|e| e.to_string()),
        passed,
    }
}

/// Run the full suite: every fixture plus the webshell scenario.
pub fn run_suite(fixtures: &[Fixture], preview_bytes: usize) -> SuiteReport {
    let outcomes: Vec<FixtureOutcome> = fixtures.iter().map(evaluate_fixture).collect();
    let passed = outcomes.iter().filter(|o| o.passed).count();
    let failed = outcomes.len() - passed;

    let payload = webshell_payload();
    let observed = validate_image_bytes(&payload);
    let scenario = ScenarioOutcome {
        filename: "shell.php",
        payload_preview: ReportFormatter::hex_preview(&payload, preview_bytes),
        rejected: observed.is_err(),
        rejection: observed.err().map(|e| e.to_string()),
    };

    SuiteReport {
        total: outcomes.len(),
        passed,
        failed,
        outcomes,
        scenario,
    }
}

/// Report formatter for suite results
pub struct ReportFormatter;

impl ReportFormatter {
    /// Bounded hex preview of a payload's leading bytes
    pub fn hex_preview(data: &[u8], max: usize) -> String {
        let shown = data.len().min(max);
        let mut preview = hex::encode(&data[..shown]);
        if shown < data.len() {
            preview.push_str("...");
        }
        preview
    }

    /// Format a suite report for console or JSON output
    pub fn format_suite(report: &SuiteReport, format: &OutputFormat) -> AppResult<String> {
        match format {
            OutputFormat::Console => {
                let mut output = String::new();

                output.push_str("=== UPLOAD CONTENT VALIDATION SUITE ===\n\n");

                output.push_str("1. WHITELISTED IMAGE HEADERS:\n");
                output.push_str(&format!("{}\n", "-".repeat(70)));
                for outcome in report.outcomes.iter().filter(|o| o.expected_kind.is_some()) {
                    output.push_str(&Self::format_outcome_line(outcome));
                }

                output.push_str("\n2. MALICIOUS/IRRELEVANT PAYLOADS:\n");
                output.push_str(&format!("{}\n", "-".repeat(70)));
                for outcome in report.outcomes.iter().filter(|o| o.expected_kind.is_none()) {
                    output.push_str(&Self::format_outcome_line(outcome));
                }

                output.push_str(&Self::format_scenario(&report.scenario));

                output.push_str("\n=== SUMMARY ===\n");
                output.push_str(&format!("Total fixtures: {}\n", report.total));
                output.push_str(&format!("Passed:         {}\n", report.passed));
                output.push_str(&format!("Failed:         {}\n", report.failed));
                output.push_str(&format!(
                    "Scenario:       {}\n",
                    if report.scenario.rejected {
                        "rejected (as required)"
                    } else {
                        "ACCEPTED (must be rejected)"
                    }
                ));

                if report.all_passed() {
                    output.push_str(
                        "\nAll validations passed - content sniffing rejects disguised uploads\n",
                    );
                } else {
                    output.push_str(
                        "\nSome validations FAILED - review the classifier before deploying\n",
                    );
                }

                Ok(output)
            }
            OutputFormat::Json => Self::export_json(report),
        }
    }

    fn format_outcome_line(outcome: &FixtureOutcome) -> String {
        let marker = if outcome.passed { "PASS" } else { "FAIL" };
        let observed = match (&outcome.observed_kind, &outcome.rejection) {
            (Some(kind), _) => format!("detected as '{}'", kind),
            (None, Some(reason)) => format!("rejected - {}", reason),
            (None, None) => "no result".to_string(),
        };
        format!(
            "  {} - {} ({}): {}\n",
            marker,
            outcome.name.to_uppercase(),
            outcome.description,
            observed
        )
    }

    fn format_scenario(scenario: &ScenarioOutcome) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "\n3. SIMULATED UPLOAD ATTEMPT: {}\n",
            scenario.filename
        ));
        output.push_str(&format!("{}\n", "-".repeat(70)));
        output.push_str(&format!("  Payload (hex): {}\n", scenario.payload_preview));
        match (&scenario.rejected, &scenario.rejection) {
            (true, Some(reason)) => {
                output.push_str(&format!("  PASS - webshell rejected - {}\n", reason));
            }
            _ => {
                output.push_str("  FAIL - webshell was ACCEPTED as an image\n");
            }
        }
        output
    }

    /// Export data as JSON for programmatic use
    pub fn export_json<T: Serialize>(data: &T) -> AppResult<String> {
        serde_json::to_string_pretty(data)
            .map_err(|e| AppError::Config(format!("JSON export failed: {}", e)))
    }
}
