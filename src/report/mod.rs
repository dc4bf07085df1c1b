//! Report Module - Cloudsploit export data model and loading
//!
//! Provides the immutable in-memory representation of one report file
//! and the XLSX loader that constructs it with its required columns
//! resolved up front.

mod finding;
mod loader;

pub use finding::{Finding, Report, RESOURCE_COLUMN, TITLE_COLUMN};
pub use loader::{load_report, LoadError};
