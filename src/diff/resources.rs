//! Resource Comparator - Per-title added and removed resource entries
//!
//! Runs only over titles present in both reports. Blobs are compared
//! byte-for-byte first; identical blobs skip parsing entirely. When a
//! title repeats within one report, the first row's blob is used.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::report::Report;

/// Which input report a diagnostic refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportSide {
    Old,
    New,
}

impl fmt::Display for ReportSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportSide::Old => write!(f, "old"),
            ReportSide::New => write!(f, "new"),
        }
    }
}

/// Errors raised during resource comparison
#[derive(Debug, Error)]
pub enum DiffError {
    /// A title claimed to be common has no rows on one side. Indicates a
    /// broken contract with the title comparator, not a user error.
    #[error("title '{title}' has no rows in the {side} report")]
    MissingTitle { title: String, side: ReportSide },
}

/// Added and removed resource entries for one common title
#[derive(Debug, Clone, Default, Serialize)]
pub struct ResourceDiff {
    /// Entries only in the new report, sorted ascending
    pub added: Vec<String>,
    /// Entries only in the old report, sorted ascending
    pub removed: Vec<String>,
}

/// Compare resource entries for every common title.
///
/// Titles whose blobs are byte-identical, or whose parsed entry sets are
/// equal (separator whitespace or entry order differences), emit no map
/// entry. The result is keyed in lexicographic title order.
pub fn compare_resources(
    old: &Report,
    new: &Report,
    common_titles: &BTreeSet<String>,
) -> Result<BTreeMap<String, ResourceDiff>, DiffError> {
    let mut diffs = BTreeMap::new();

    for title in common_titles {
        let blob_old = old.first_blob(title).ok_or_else(|| DiffError::MissingTitle {
            title: title.clone(),
            side: ReportSide::Old,
        })?;
        let blob_new = new.first_blob(title).ok_or_else(|| DiffError::MissingTitle {
            title: title.clone(),
            side: ReportSide::New,
        })?;

        if blob_old == blob_new {
            continue;
        }

        let entries_old = parse_entries(blob_old);
        let entries_new = parse_entries(blob_new);

        let added: Vec<String> = entries_new.difference(&entries_old).cloned().collect();
        let removed: Vec<String> = entries_old.difference(&entries_new).cloned().collect();

        if added.is_empty() && removed.is_empty() {
            continue;
        }

        debug!(
            "'{}': {} resource(s) added, {} removed",
            title,
            added.len(),
            removed.len()
        );
        diffs.insert(title.clone(), ResourceDiff { added, removed });
    }

    Ok(diffs)
}

/// Split a resources/regions blob into its entry set.
///
/// Entries are separated by blank lines; each entry is trimmed and
/// whitespace-only entries are discarded.
pub fn parse_entries(blob: &str) -> BTreeSet<String> {
    blob.split("\n\n")
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}
