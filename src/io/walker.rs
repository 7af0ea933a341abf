use crate::config::ScanConfig;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Recursive directory traversal with extension matching and excluded
/// directory pruning.
///
/// Directory symlinks are not followed. A matching symlink that points at a
/// regular file is yielded; broken links are not.
pub struct FileWalker {
    root: PathBuf,
    config: ScanConfig,
}

impl FileWalker {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            config: ScanConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ScanConfig) -> Self {
        self.config = config;
        self
    }

    /// Collect matching files in file-name order.
    pub fn walk(&self) -> Vec<PathBuf> {
        if self.has_excluded_component(&self.root) {
            log::debug!(
                "Root {} lies inside an excluded directory",
                self.root.display()
            );
            return Vec::new();
        }

        let walker = WalkDir::new(&self.root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| !self.is_pruned(entry));

        let mut files = Vec::new();
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    log::warn!("Skipping unreadable entry: {}", err);
                    continue;
                }
            };

            if self.should_process(&entry) {
                files.push(entry.into_path());
            }
        }

        log::debug!(
            "Found {} {} file(s) under {}",
            files.len(),
            self.config.extension,
            self.root.display()
        );
        files
    }

    fn is_pruned(&self, entry: &DirEntry) -> bool {
        entry.depth() > 0 && self.config.is_excluded_name(entry.file_name())
    }

    fn should_process(&self, entry: &DirEntry) -> bool {
        // `Path::is_file` follows symlinks, `DirEntry::file_type` does not
        self.config.matches_name(entry.file_name()) && entry.path().is_file()
    }

    fn has_excluded_component(&self, path: &Path) -> bool {
        path.components()
            .any(|c| self.config.is_excluded_name(c.as_os_str()))
    }
}

pub fn find_source_files(root: &Path, config: &ScanConfig) -> Vec<PathBuf> {
    FileWalker::new(root.to_path_buf())
        .with_config(config.clone())
        .walk()
}
