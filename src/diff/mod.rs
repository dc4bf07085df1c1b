//! Diff Module - Set comparison between two reports
//!
//! Title comparison runs first and yields the common-title set; resource
//! comparison then runs over that set only. Both comparators are pure
//! and leave their inputs untouched.

mod resources;
mod titles;

pub use resources::{compare_resources, parse_entries, DiffError, ReportSide, ResourceDiff};
pub use titles::{compare_titles, TitleDiff};
