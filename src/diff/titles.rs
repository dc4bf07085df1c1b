//! Title Comparator - Added and removed finding titles
//!
//! Treats each report's titles as a set; duplicate rows collapse.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::report::Report;

/// Result of comparing the title sets of two reports
#[derive(Debug, Clone, Default, Serialize)]
pub struct TitleDiff {
    /// Titles only in the new report, sorted ascending
    pub added: Vec<String>,
    /// Titles only in the old report, sorted ascending
    pub removed: Vec<String>,
    /// Titles present in both reports
    pub common: BTreeSet<String>,
}

impl TitleDiff {
    /// True when no titles were added or removed
    pub fn is_unchanged(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

/// Compare the distinct titles of two reports.
///
/// `added` and `removed` come out sorted because the underlying sets are
/// ordered; empty reports yield empty diffs.
pub fn compare_titles(old: &Report, new: &Report) -> TitleDiff {
    let titles_old = old.titles();
    let titles_new = new.titles();

    TitleDiff {
        added: titles_new.difference(&titles_old).cloned().collect(),
        removed: titles_old.difference(&titles_new).cloned().collect(),
        common: titles_old.intersection(&titles_new).cloned().collect(),
    }
}
