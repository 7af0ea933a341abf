//! Metrics calculation module
//!
//! Per-file line counting used by the scanner.

pub mod line_counter;

pub use line_counter::{count_file, count_lines, count_reader, FileOutcome};
