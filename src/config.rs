//! Scan configuration.
//!
//! There is no configuration file: the scan is configured in code and the
//! defaults describe a Python project.

use std::ffi::OsStr;

/// Extension matched by the default configuration.
pub const DEFAULT_EXTENSION: &str = ".py";

/// Directory names whose subtrees are never scanned by default.
pub const DEFAULT_EXCLUDED_DIRS: &[&str] = &[".venv", "__pycache__"];

/// Label used for the file count in text reports.
pub const DEFAULT_LABEL: &str = "Python files";

/// What to match and what to skip during a scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    /// File-name suffix a file must end with to be counted, including the dot.
    pub extension: String,
    /// Path components that exclude everything beneath them.
    pub excluded_dirs: Vec<String>,
    /// Text-report label for the file count.
    pub label: String,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            extension: DEFAULT_EXTENSION.to_string(),
            excluded_dirs: DEFAULT_EXCLUDED_DIRS
                .iter()
                .map(|d| d.to_string())
                .collect(),
            label: DEFAULT_LABEL.to_string(),
        }
    }
}

impl ScanConfig {
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    pub fn with_excluded_dirs(mut self, dirs: Vec<String>) -> Self {
        self.excluded_dirs = dirs;
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Whether a file name ends with the configured extension.
    pub fn matches_name(&self, name: &OsStr) -> bool {
        name.to_string_lossy().ends_with(self.extension.as_str())
    }

    /// Whether a single path component is an excluded directory name.
    pub fn is_excluded_name(&self, name: &OsStr) -> bool {
        self.excluded_dirs.iter().any(|d| OsStr::new(d) == name)
    }
}
