mod directory;
mod filter;
mod types;

pub use directory::DirectoryScanner;
pub use filter::{FileFilter, TagFilter};
pub use types::ScanTarget;

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::tags::TagClassifier;

/// Trait for resolving a root path into the files to check.
pub trait FileScanner {
    /// Scan a file or directory and return all matching file paths.
    ///
    /// # Errors
    /// Returns `LineCheckerError::InvalidPath` if `root` does not exist, or
    /// `LineCheckerError::Discovery` if a directory cannot be listed.
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>>;
}

/// Resolve a scan target into the files whose tags intersect the target's.
///
/// Only the immediate entries of a directory are considered, in the order
/// the filesystem returns them.
///
/// # Errors
/// Returns `LineCheckerError::InvalidPath` if the target path does not
/// exist, or a classification error for an entry that vanished mid-scan.
pub fn discover<C: TagClassifier>(target: &ScanTarget, classifier: C) -> Result<Vec<PathBuf>> {
    let filter = TagFilter::new(classifier, target.tags.clone(), &[])?;
    DirectoryScanner::new(filter).scan(&target.path)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
