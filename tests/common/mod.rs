// Shared fixtures for devtool integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Temporary project tree that lives as long as the value.
pub struct TestProject {
    dir: TempDir,
}

impl TestProject {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Canonical root, as it appears in reports.
    pub fn resolved(&self) -> PathBuf {
        self.dir.path().canonicalize().expect("canonicalize root")
    }

    pub fn write(&self, rel: &str, content: impl AsRef<[u8]>) -> &Self {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent dirs");
        }
        fs::write(path, content).expect("write fixture file");
        self
    }

    /// `a.py` with 3 lines and no trailing newline, empty `b.py`, and a
    /// 100-line file under an excluded directory.
    pub fn worked_example() -> Self {
        let project = Self::new();
        project
            .write("a.py", "import os\nimport sys\nprint(os, sys)")
            .write("b.py", "")
            .write("skip/.venv/c.py", "pass\n".repeat(100));
        project
    }
}

/// `n` newline-terminated lines.
pub fn lines(n: usize) -> String {
    "x = 1\n".repeat(n)
}
