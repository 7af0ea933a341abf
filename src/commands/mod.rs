//! CLI command implementations.
//!
//! - **analyze**: scan a project directory and report file and line counts

pub mod analyze;

pub use analyze::{handle_analyze, run_analyze, AnalyzeConfig};
