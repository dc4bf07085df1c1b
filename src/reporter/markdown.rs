//! Markdown Renderer - Comparison results as a Markdown document
//!
//! Section structure is fixed: document title, numbered source list,
//! title differences, resource differences. Heading levels and numbered
//! lists are stable for downstream consumers.

use std::collections::BTreeMap;

use crate::diff::{ResourceDiff, TitleDiff};

/// Identifies one input report in the rendered document
#[derive(Debug, Clone)]
pub struct SourceLabel {
    /// Display name, usually the file basename
    pub display_name: String,
    /// Date label, usually the file's modification date
    pub date_label: String,
}

impl SourceLabel {
    pub fn new(display_name: impl Into<String>, date_label: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            date_label: date_label.into(),
        }
    }
}

/// Render the full comparison document.
///
/// `sources` is ordered old-then-new; `resource_diffs` iterates in title
/// order because it is keyed by a `BTreeMap`.
pub fn render(
    title_diff: &TitleDiff,
    resource_diffs: &BTreeMap<String, ResourceDiff>,
    sources: &[SourceLabel; 2],
) -> String {
    let mut doc = String::new();

    doc.push_str("# Cloudsploit Report Comparison\n");
    for (index, source) in sources.iter().enumerate() {
        doc.push_str(&format!(
            "{}. {} - {}\n",
            index + 1,
            source.display_name,
            source.date_label
        ));
    }

    doc.push_str("\n## Title Differences:\n");
    if !title_diff.removed.is_empty() {
        doc.push_str("### Removed findings\n");
        push_numbered(&mut doc, &title_diff.removed);
    }
    if !title_diff.added.is_empty() {
        doc.push_str("\n### Added findings\n");
        push_numbered(&mut doc, &title_diff.added);
    }

    doc.push_str("\n## Resource Differences:\n");
    for (title, diff) in resource_diffs {
        doc.push_str(&format!("### {}\n", title));
        if !diff.removed.is_empty() {
            doc.push_str("#### Removed\n");
            push_numbered(&mut doc, &diff.removed);
        }
        if !diff.added.is_empty() {
            doc.push_str("#### Added\n");
            push_numbered(&mut doc, &diff.added);
        }
    }

    doc
}

/// 1-based numbered list; numbering restarts for every list
fn push_numbered(doc: &mut String, items: &[String]) {
    for (index, item) in items.iter().enumerate() {
        doc.push_str(&format!("{}. {}\n", index + 1, item));
    }
}
