//! Finding - One row of a loaded Cloudsploit report
//!
//! A report is a flat list of findings in file order. Only the two
//! columns the comparison needs are kept: the finding title and the
//! resources/regions blob.

use std::collections::BTreeSet;

use serde::Serialize;

/// Column holding the finding title
pub const TITLE_COLUMN: &str = "Title";

/// Column holding the affected resources/regions blob
pub const RESOURCE_COLUMN: &str = "Resources and Regions";

/// One finding row from a report
#[derive(Debug, Clone, Serialize)]
pub struct Finding {
    /// Finding title, not necessarily unique within a report
    pub title: String,
    /// Raw resources/regions cell, entries separated by blank lines
    pub resource_blob: String,
}

impl Finding {
    pub fn new(title: impl Into<String>, resource_blob: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            resource_blob: resource_blob.into(),
        }
    }
}

/// All findings loaded from one report file, in file order
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// Where the report came from (path or label), for diagnostics
    pub source: String,
    /// Findings in the order they appear in the sheet
    pub findings: Vec<Finding>,
}

impl Report {
    pub fn new(source: impl Into<String>, findings: Vec<Finding>) -> Self {
        Self {
            source: source.into(),
            findings,
        }
    }

    /// Distinct titles in this report (duplicates collapse)
    pub fn titles(&self) -> BTreeSet<String> {
        self.findings.iter().map(|f| f.title.clone()).collect()
    }

    /// Resource blob of the first finding with the given title.
    ///
    /// When a title repeats within one report, the first occurrence wins
    /// and later rows are ignored.
    pub fn first_blob(&self, title: &str) -> Option<&str> {
        self.findings
            .iter()
            .find(|f| f.title == title)
            .map(|f| f.resource_blob.as_str())
    }

    /// Titles that appear on more than one row, sorted
    pub fn duplicate_titles(&self) -> Vec<&str> {
        let mut seen = BTreeSet::new();
        let mut duplicates = BTreeSet::new();
        for finding in &self.findings {
            if !seen.insert(finding.title.as_str()) {
                duplicates.insert(finding.title.as_str());
            }
        }
        duplicates.into_iter().collect()
    }

    pub fn len(&self) -> usize {
        self.findings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_report(rows: &[(&str, &str)]) -> Report {
        Report::new(
            "test.xlsx",
            rows.iter().map(|(t, r)| Finding::new(*t, *r)).collect(),
        )
    }

    #[test]
    fn titles_collapse_duplicates() {
        let report = make_report(&[("A", "r1"), ("B", "r2"), ("A", "r3")]);

        let titles = report.titles();
        assert_eq!(titles.len(), 2);
        assert!(titles.contains("A"));
        assert!(titles.contains("B"));
    }

    #[test]
    fn first_blob_takes_first_occurrence() {
        let report = make_report(&[("A", "first"), ("A", "second")]);

        assert_eq!(report.first_blob("A"), Some("first"));
        assert_eq!(report.first_blob("missing"), None);
    }

    #[test]
    fn duplicate_titles_reported_once() {
        let report = make_report(&[("A", ""), ("B", ""), ("A", ""), ("A", "")]);

        assert_eq!(report.duplicate_titles(), vec!["A"]);
    }

    #[test]
    fn empty_report() {
        let report = make_report(&[]);

        assert!(report.is_empty());
        assert!(report.titles().is_empty());
        assert!(report.duplicate_titles().is_empty());
    }
}
