//! Table Loader - XLSX ingestion for report comparison
//!
//! Reads one worksheet into a `Report`, resolving the required columns
//! once at load time so comparison code never deals with raw cells.

use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};
use thiserror::Error;
use tracing::{debug, warn};

use super::{Finding, Report, RESOURCE_COLUMN, TITLE_COLUMN};

/// Errors raised while loading a report file
#[derive(Debug, Error)]
pub enum LoadError {
    /// File missing, unreadable, or not a spreadsheet
    #[error("cannot open {path}")]
    Open {
        path: String,
        #[source]
        source: calamine::Error,
    },

    /// Workbook contains no worksheets at all
    #[error("{path} contains no worksheets")]
    NoWorksheets { path: String },

    /// Requested worksheet missing or unreadable
    #[error("cannot read worksheet '{sheet}' from {path}")]
    Sheet {
        path: String,
        sheet: String,
        #[source]
        source: calamine::Error,
    },

    /// Worksheet has no header row
    #[error("worksheet in {path} is empty")]
    EmptySheet { path: String },

    /// Header row lacks a required column
    #[error("{path} is missing required column '{column}'")]
    MissingColumn { path: String, column: String },
}

/// Load a report from an XLSX file.
///
/// `sheet` selects a worksheet by name; the default is the first sheet
/// in the workbook. Duplicated titles are kept in the report but logged
/// at warning level, since only the first occurrence takes part in the
/// resource comparison.
pub fn load_report(path: &Path, sheet: Option<&str>) -> Result<Report, LoadError> {
    let path_display = path.display().to_string();

    let mut workbook = open_workbook_auto(path).map_err(|source| LoadError::Open {
        path: path_display.clone(),
        source,
    })?;

    let sheet_name = match sheet {
        Some(name) => name.to_string(),
        None => workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or_else(|| LoadError::NoWorksheets {
                path: path_display.clone(),
            })?,
    };

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|source| LoadError::Sheet {
            path: path_display.clone(),
            sheet: sheet_name.clone(),
            source,
        })?;

    debug!(
        "loaded worksheet '{}' from {} ({} rows)",
        sheet_name,
        path_display,
        range.height()
    );

    let rows: Vec<Vec<String>> = range
        .rows()
        .map(|row| row.iter().map(cell_text).collect())
        .collect();

    from_rows(path_display, rows)
}

/// Build a report from already-extracted rows (header first).
///
/// Split out from `load_report` so header resolution and row handling
/// stay testable without workbook files.
fn from_rows(source: String, rows: Vec<Vec<String>>) -> Result<Report, LoadError> {
    let mut rows = rows.into_iter();

    let header = rows.next().ok_or_else(|| LoadError::EmptySheet {
        path: source.clone(),
    })?;

    let title_idx = column_index(&header, TITLE_COLUMN).ok_or_else(|| LoadError::MissingColumn {
        path: source.clone(),
        column: TITLE_COLUMN.to_string(),
    })?;
    let resource_idx =
        column_index(&header, RESOURCE_COLUMN).ok_or_else(|| LoadError::MissingColumn {
            path: source.clone(),
            column: RESOURCE_COLUMN.to_string(),
        })?;

    let findings: Vec<Finding> = rows
        .map(|row| {
            Finding::new(
                row.get(title_idx).map(|t| t.trim()).unwrap_or_default(),
                row.get(resource_idx).cloned().unwrap_or_default(),
            )
        })
        .filter(|f| !f.title.is_empty())
        .collect();

    let report = Report::new(source, findings);

    for title in report.duplicate_titles() {
        warn!(
            "duplicate title '{}' in {}; only the first row's resources are compared",
            title, report.source
        );
    }

    Ok(report)
}

fn column_index(header: &[String], column: &str) -> Option<usize> {
    header.iter().position(|cell| cell.trim() == column)
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.clone(),
        Data::Empty => String::new(),
        other => other.to_string(),
    }
}
