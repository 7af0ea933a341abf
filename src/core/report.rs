use crate::scanner::ScanTotals;
use serde::Serialize;
use std::path::Path;

/// Result of one scan invocation.
///
/// Field order is the JSON key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(test, derive(serde::Deserialize))]
pub struct Report {
    /// Resolved root that was analyzed
    pub path: String,
    /// Number of matching files
    #[serde(rename = "python_files")]
    pub file_count: usize,
    /// Sum of line counts over matching files
    pub total_lines: usize,
}

impl Report {
    pub fn new(root: &Path, totals: &ScanTotals) -> Self {
        Self {
            path: root.to_string_lossy().into_owned(),
            file_count: totals.file_count,
            total_lines: totals.total_lines,
        }
    }
}
