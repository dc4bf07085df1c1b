//! Integration tests for the full comparison pipeline
//!
//! Loads the XLSX fixtures, runs both comparators, renders the document,
//! and drives the CLI flow end to end with a stubbed confirmation.

use std::path::{Path, PathBuf};

use cdiff::cli::confirm::{Confirm, OrderDecision};
use cdiff::cli::{self, Cli};
use cdiff::report::LoadError;
use cdiff::reporter::SourceLabel;
use cdiff::ui::{OutputMode, Printer};
use cdiff::{compare_resources, compare_titles, load_report, render};

struct StubConfirm(OrderDecision);

impl Confirm for StubConfirm {
    fn resolve_order(&self, _old: &Path, _new: &Path) -> anyhow::Result<OrderDecision> {
        Ok(self.0)
    }
}

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

#[test]
fn loads_fixture_reports() {
    let old = load_report(&fixture("old.xlsx"), None).unwrap();
    let new = load_report(&fixture("new.xlsx"), None).unwrap();

    assert_eq!(old.len(), 3);
    assert_eq!(new.len(), 3);
    assert_eq!(old.findings[0].title, "Open SSH Port");
    assert!(new.titles().contains("CloudTrail Enabled"));
}

#[test]
fn loads_named_worksheet() {
    let report = load_report(&fixture("old.xlsx"), Some("Findings")).unwrap();

    assert_eq!(report.len(), 3);
}

#[test]
fn unknown_worksheet_fails() {
    let err = load_report(&fixture("old.xlsx"), Some("Nope")).unwrap_err();

    match err {
        LoadError::Sheet { sheet, .. } => assert_eq!(sheet, "Nope"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn fixture_comparison_end_to_end() {
    let old = load_report(&fixture("old.xlsx"), None).unwrap();
    let new = load_report(&fixture("new.xlsx"), None).unwrap();

    let titles = compare_titles(&old, &new);
    assert_eq!(titles.added, vec!["CloudTrail Enabled"]);
    assert_eq!(titles.removed, vec!["Open SSH Port"]);
    assert_eq!(titles.common.len(), 2);

    let resources = compare_resources(&old, &new, &titles.common).unwrap();
    // "Root Account In Use" has identical blobs on both sides
    assert_eq!(resources.len(), 1);
    let diff = &resources["S3 Bucket All Users Policy"];
    assert_eq!(diff.removed, vec!["arn:aws:s3:::alpha (us-east-1)"]);
    assert_eq!(diff.added, vec!["arn:aws:s3:::gamma (us-west-2)"]);

    let sources = [
        SourceLabel::new("old.xlsx", "2024-01-01"),
        SourceLabel::new("new.xlsx", "2024-02-01"),
    ];
    let doc = render(&titles, &resources, &sources);

    assert!(doc.starts_with("# Cloudsploit Report Comparison\n"));
    assert!(doc.contains("### Removed findings\n1. Open SSH Port\n"));
    assert!(doc.contains("### Added findings\n1. CloudTrail Enabled\n"));
    assert!(doc.contains("### S3 Bucket All Users Policy\n"));
    assert!(doc.contains("#### Removed\n1. arn:aws:s3:::alpha (us-east-1)\n"));
    assert!(doc.contains("#### Added\n1. arn:aws:s3:::gamma (us-west-2)\n"));
}

#[test]
fn cli_run_writes_the_report_file() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("report.md");

    let args = Cli {
        old_report: fixture("old.xlsx"),
        new_report: fixture("new.xlsx"),
        output: Some(out.clone()),
        no_console: true,
        sheet: None,
        verbose: 0,
        quiet: true,
    };

    let printer = Printer::with_mode(OutputMode::Plain);
    cli::run(args, &StubConfirm(OrderDecision::Continue), &printer).unwrap();

    let doc = std::fs::read_to_string(&out).unwrap();
    assert!(doc.contains("1. old.xlsx - "));
    assert!(doc.contains("2. new.xlsx - "));
    assert!(doc.contains("## Title Differences:"));
    assert!(doc.contains("## Resource Differences:"));
}

#[test]
fn cli_run_swaps_files_when_asked() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("report.md");

    // Make the "old" argument the newer file so the confirmation runs
    let newer = dir.path().join("newer.xlsx");
    std::fs::copy(fixture("new.xlsx"), &newer).unwrap();

    let args = Cli {
        old_report: newer,
        new_report: fixture("old.xlsx"),
        output: Some(out.clone()),
        no_console: true,
        sheet: None,
        verbose: 0,
        quiet: true,
    };

    let printer = Printer::with_mode(OutputMode::Plain);
    cli::run(args, &StubConfirm(OrderDecision::Swap), &printer).unwrap();

    // After the swap the comparison runs old-then-new again
    let doc = std::fs::read_to_string(&out).unwrap();
    assert!(doc.contains("### Removed findings\n1. Open SSH Port\n"));
    assert!(doc.contains("### Added findings\n1. CloudTrail Enabled\n"));
}

#[test]
fn cli_run_exits_cleanly_when_user_aborts() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("report.md");

    let newer = dir.path().join("newer.xlsx");
    std::fs::copy(fixture("new.xlsx"), &newer).unwrap();

    let args = Cli {
        old_report: newer,
        new_report: fixture("old.xlsx"),
        output: Some(out.clone()),
        no_console: true,
        sheet: None,
        verbose: 0,
        quiet: true,
    };

    let printer = Printer::with_mode(OutputMode::Plain);
    let result = cli::run(args, &StubConfirm(OrderDecision::Exit), &printer);

    // A clean abort, not a failure
    assert!(result.is_ok());
    assert!(!out.exists());
}
