//! CLI module - Argument surface and top-level flow
//!
//! Thin I/O wrapper around the comparison core: parses arguments,
//! guards the old/new file ordering, loads both reports, runs the
//! comparators, and hands the rendered document to the writer.

pub mod confirm;
pub mod writer;

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use clap::Parser;
use tracing::info;

use crate::diff::{compare_resources, compare_titles};
use crate::errors::CdiffError;
use crate::report::load_report;
use crate::reporter::{render, SourceLabel};
use crate::ui::Printer;

use confirm::{Confirm, OrderDecision};
use writer::DocumentWriter;

pub use confirm::TerminalConfirm;

/// Take a diff of an old and updated Cloudsploit report to look for changes
#[derive(Debug, Parser)]
#[command(
    name = "cdiff",
    version,
    about = "Take a diff of an old and updated Cloudsploit report to look for changes"
)]
pub struct Cli {
    /// The older Cloudsploit report file, deduped in XLSX format
    pub old_report: PathBuf,

    /// The newer Cloudsploit report file, deduped in XLSX format
    pub new_report: PathBuf,

    /// Output filename. Output is in Markdown format, so the file should
    /// end with .md for maximum compatibility
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Skip output in stdout. Can only be used with --output
    #[arg(long)]
    pub no_console: bool,

    /// Worksheet to read from both files (defaults to the first sheet)
    #[arg(long)]
    pub sheet: Option<String>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress informational logging
    #[arg(short, long)]
    pub quiet: bool,
}

/// Run the full comparison flow.
///
/// Returns the process exit code on orderly completion; a user choosing
/// to abort at the file-order prompt is a clean exit, not a failure.
pub fn run(cli: Cli, confirm: &dyn Confirm, printer: &Printer) -> Result<ExitCode> {
    if cli.no_console && cli.output.is_none() {
        return Err(CdiffError::NoConsoleWithoutOutput.into());
    }

    let mut old_path = cli.old_report;
    let mut new_path = cli.new_report;

    if files_out_of_order(&old_path, &new_path)? {
        match confirm.resolve_order(&old_path, &new_path)? {
            OrderDecision::Continue => {}
            OrderDecision::Swap => std::mem::swap(&mut old_path, &mut new_path),
            OrderDecision::Exit => return Ok(ExitCode::SUCCESS),
        }
    }

    let sheet = cli.sheet.as_deref();
    let old_report = load_report(&old_path, sheet).map_err(|source| CdiffError::Load {
        path: old_path.display().to_string(),
        source,
    })?;
    let new_report = load_report(&new_path, sheet).map_err(|source| CdiffError::Load {
        path: new_path.display().to_string(),
        source,
    })?;

    info!(
        "comparing {} ({} findings) against {} ({} findings)",
        old_report.source,
        old_report.len(),
        new_report.source,
        new_report.len()
    );

    let title_diff = compare_titles(&old_report, &new_report);
    let resource_diffs = compare_resources(&old_report, &new_report, &title_diff.common)
        .map_err(|source| CdiffError::Comparison { source })?;

    info!(
        "{} title(s) added, {} removed, {} resource diff(s)",
        title_diff.added.len(),
        title_diff.removed.len(),
        resource_diffs.len()
    );

    let sources = [source_label(&old_path)?, source_label(&new_path)?];
    let document = render(&title_diff, &resource_diffs, &sources);

    DocumentWriter::new(cli.output, !cli.no_console).write(&document, printer);

    Ok(ExitCode::SUCCESS)
}

/// True when the first file was modified after the second.
///
/// The tool assumes chronological old-then-new ordering; a newer first
/// file usually means the arguments were swapped.
fn files_out_of_order(old: &Path, new: &Path) -> Result<bool> {
    let old_mtime = modified_time(old)?;
    let new_mtime = modified_time(new)?;
    Ok(old_mtime > new_mtime)
}

fn modified_time(path: &Path) -> Result<std::time::SystemTime> {
    fs::metadata(path)
        .and_then(|meta| meta.modified())
        .with_context(|| format!("cannot stat {}", path.display()))
}

/// Basename plus modification date, for the document's source list
fn source_label(path: &Path) -> Result<SourceLabel> {
    let modified: DateTime<Local> = modified_time(path)?.into();
    let display_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    Ok(SourceLabel::new(
        display_name,
        modified.format("%Y-%m-%d").to_string(),
    ))
}
