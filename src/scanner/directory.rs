use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::{FileFilter, FileScanner};
use crate::error::{LineCheckerError, Result};

/// Discovers files under a root path.
///
/// By default only the root's immediate entries are listed. Subdirectories
/// are offered to the filter like any other entry; their `directory` tag
/// never matches a file tag, so they are skipped rather than entered.
pub struct DirectoryScanner<F: FileFilter> {
    filter: F,
    recursive: bool,
}

impl<F: FileFilter> DirectoryScanner<F> {
    #[must_use]
    pub const fn new(filter: F) -> Self {
        Self {
            filter,
            recursive: false,
        }
    }

    #[must_use]
    pub const fn with_recursive(filter: F, recursive: bool) -> Self {
        Self { filter, recursive }
    }

    fn scan_file(&self, path: &Path) -> Result<Vec<PathBuf>> {
        if self.filter.should_include(path)? {
            tracing::debug!(path = %path.display(), "selected");
            Ok(vec![path.to_path_buf()])
        } else {
            tracing::debug!(path = %path.display(), "skipped: no matching tag");
            Ok(Vec::new())
        }
    }

    fn scan_directory(&self, root: &Path) -> Result<Vec<PathBuf>> {
        let walker = WalkDir::new(root).min_depth(1);
        let walker = if self.recursive {
            walker
        } else {
            walker.max_depth(1)
        };

        let mut files = Vec::new();
        let entries = walker.into_iter().filter_entry(|e| {
            e.depth() == 0 || !e.file_type().is_dir() || self.filter.should_descend(e.path())
        });

        for entry in entries {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(root).to_path_buf();
                tracing::debug!(path = %path.display(), error = %e, "directory listing failed");
                LineCheckerError::Discovery {
                    path,
                    source: e.into(),
                }
            })?;

            if self.filter.should_include(entry.path())? {
                tracing::debug!(path = %entry.path().display(), "selected");
                files.push(entry.into_path());
            } else {
                tracing::trace!(path = %entry.path().display(), "skipped");
            }
        }

        Ok(files)
    }
}

impl<F: FileFilter> FileScanner for DirectoryScanner<F> {
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>> {
        let metadata = fs::metadata(root).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                LineCheckerError::InvalidPath {
                    path: root.to_path_buf(),
                }
            } else {
                LineCheckerError::Io(e)
            }
        })?;

        if metadata.is_dir() {
            self.scan_directory(root)
        } else {
            self.scan_file(root)
        }
    }
}

#[cfg(test)]
#[path = "directory_tests.rs"]
mod tests;
