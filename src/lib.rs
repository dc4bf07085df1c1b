//! cdiff - Cloudsploit Report Comparison
//!
//! Compares an older and a newer Cloudsploit XLSX export and renders the
//! differences as a Markdown document: finding titles that were added or
//! removed, and for titles present in both reports, the affected
//! resources/regions that were added or removed.
//!
//! # Modules
//!
//! - `report` - XLSX loading and the report data model
//! - `diff` - title and resource set comparators
//! - `reporter` - Markdown rendering of comparison results
//! - `cli` - argument surface, file-order confirmation, document writer
//!
//! # Example
//!
//! ```rust,ignore
//! use cdiff::{compare_resources, compare_titles, load_report, render};
//!
//! let old = load_report("old.xlsx".as_ref(), None)?;
//! let new = load_report("new.xlsx".as_ref(), None)?;
//!
//! let titles = compare_titles(&old, &new);
//! let resources = compare_resources(&old, &new, &titles.common)?;
//! println!("{}", render(&titles, &resources, &sources));
//! ```

pub mod cli;
pub mod diff;
pub mod errors;
pub mod report;
pub mod reporter;
pub mod ui;

// Re-export commonly used types
pub use diff::{compare_resources, compare_titles, ResourceDiff, TitleDiff};
pub use report::{load_report, Finding, Report};
pub use reporter::{render, SourceLabel};
