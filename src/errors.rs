//! Error types for devtool operations.

use std::path::PathBuf;
use thiserror::Error;

/// Exit code for a path that fails validation.
pub const EXIT_INVALID_PATH: u8 = 2;

/// Exit code for any other failure.
pub const EXIT_FAILURE: u8 = 1;

#[derive(Debug, Error)]
pub enum DevtoolError {
    /// The analyzed path does not exist
    #[error("path does not exist: {}", .0.display())]
    PathNotFound(PathBuf),

    /// The analyzed path exists but is not a directory
    #[error("path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// The report could not be written to the requested file
    #[error("failed to write report to {}", .path.display())]
    WriteReport {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl DevtoolError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::PathNotFound(_) | Self::NotADirectory(_) => EXIT_INVALID_PATH,
            Self::WriteReport { .. } => EXIT_FAILURE,
        }
    }

    /// Validation failures are reported on stdout rather than stderr.
    pub fn is_validation(&self) -> bool {
        self.exit_code() == EXIT_INVALID_PATH
    }
}

pub type Result<T> = std::result::Result<T, DevtoolError>;
