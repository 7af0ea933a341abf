// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod errors;
pub mod io;
pub mod metrics;
pub mod scanner;

// Re-export commonly used types
pub use crate::config::ScanConfig;
pub use crate::core::Report;
pub use crate::errors::DevtoolError;
pub use crate::io::output::{create_writer, render, OutputFormat, OutputWriter};
pub use crate::metrics::{count_file, count_lines, count_reader, FileOutcome};
pub use crate::scanner::{build_report, scan, scan_with, ScanTotals};
