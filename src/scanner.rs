//! Directory scan: walk, count, accumulate.

use crate::config::ScanConfig;
use crate::core::Report;
use crate::io::walker::find_source_files;
use crate::metrics::{count_file, FileOutcome};
use std::path::Path;

/// Accumulated counts for one scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanTotals {
    pub file_count: usize,
    pub total_lines: usize,
    /// Matching files that could not be read. Not part of the report.
    pub skipped: usize,
}

impl ScanTotals {
    /// Fold one file outcome into the totals.
    pub fn record(mut self, outcome: &FileOutcome) -> Self {
        match outcome {
            FileOutcome::Counted(lines) => {
                self.file_count += 1;
                self.total_lines += lines;
            }
            FileOutcome::Skipped(_) => self.skipped += 1,
        }
        self
    }
}

/// Scan `root` and return (matched file count, total line count).
///
/// Unreadable files are skipped and never abort the scan.
pub fn scan(root: &Path, config: &ScanConfig) -> ScanTotals {
    scan_with(root, config, count_file)
}

/// Scan `root`, producing each matching file's outcome with `count`.
pub fn scan_with<F>(root: &Path, config: &ScanConfig, mut count: F) -> ScanTotals
where
    F: FnMut(&Path) -> FileOutcome,
{
    let totals = find_source_files(root, config)
        .iter()
        .map(|path| count(path.as_path()))
        .fold(ScanTotals::default(), |totals, outcome| totals.record(&outcome));

    if totals.skipped > 0 {
        log::info!("Skipped {} unreadable file(s)", totals.skipped);
    }
    log::debug!(
        "Scanned {}: {} file(s), {} line(s)",
        root.display(),
        totals.file_count,
        totals.total_lines
    );
    totals
}

/// Scan `root` and build its report. `root` should already be resolved.
pub fn build_report(root: &Path, config: &ScanConfig) -> Report {
    Report::new(root, &scan(root, config))
}
