//! Suite report tests
//!
//! Run the built-in fixture suite end to end and verify the report, the
//! exit-code mapping, and both output formats.

use upload_guard::detection::ImageKind;
use upload_guard::harness::fixtures::{builtin_fixtures, Expectation, Fixture};
use upload_guard::harness::report::{run_suite, OutputFormat, ReportFormatter};

#[test]
fn builtin_suite_passes_in_full() {
    let report = run_suite(&builtin_fixtures(), 50);

    assert_eq!(report.total, 7);
    assert_eq!(report.passed, 7);
    assert_eq!(report.failed, 0);
    assert!(report.scenario.rejected);
    assert_eq!(report.exit_code(), 0);

    for outcome in &report.outcomes {
        assert!(outcome.passed, "fixture '{}' must pass", outcome.name);
    }
}

#[test]
fn reject_fixtures_pass_by_failing_to_classify() {
    let report = run_suite(&builtin_fixtures(), 50);

    for outcome in report.outcomes.iter().filter(|o| o.expected_kind.is_none()) {
        assert!(outcome.observed_kind.is_none());
        assert!(outcome.rejection.is_some());
        assert!(outcome.passed);
    }
}

#[test]
fn suite_failure_maps_to_exit_code_one() {
    // GIF must stay rejected; expecting acceptance has to fail the suite
    let sabotaged = vec![Fixture {
        name: "gif",
        description: "GIF header wrongly expected to pass",
        payload: b"GIF89a\x00\x00\x00\x00".to_vec(),
        expectation: Expectation::Accept(ImageKind::Png),
    }];

    let report = run_suite(&sabotaged, 50);
    assert_eq!(report.failed, 1);
    assert_eq!(report.exit_code(), 1);
}

#[test]
fn console_report_narrates_all_sections() {
    let report = run_suite(&builtin_fixtures(), 50);
    let text = ReportFormatter::format_suite(&report, &OutputFormat::Console).unwrap();

    assert!(text.contains("1. WHITELISTED IMAGE HEADERS"));
    assert!(text.contains("2. MALICIOUS/IRRELEVANT PAYLOADS"));
    assert!(text.contains("3. SIMULATED UPLOAD ATTEMPT: shell.php"));
    assert!(text.contains("Total fixtures: 7"));
    assert!(text.contains("All validations passed"));

    // Every fixture is mentioned by name
    for fixture in builtin_fixtures() {
        assert!(text.contains(&fixture.name.to_uppercase()));
    }
}

#[test]
fn json_report_is_machine_readable() {
    let report = run_suite(&builtin_fixtures(), 8);
    let json = ReportFormatter::format_suite(&report, &OutputFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["total"], 7);
    assert_eq!(value["passed"], 7);
    assert_eq!(value["scenario"]["filename"], "shell.php");
    assert_eq!(value["scenario"]["rejected"], true);

    // Preview is bounded by the configured byte count (hex doubles it)
    let preview = value["scenario"]["payload_preview"].as_str().unwrap();
    assert!(preview.starts_with(&hex::encode(b"<?php\n")));
    assert!(preview.ends_with("..."));
}
