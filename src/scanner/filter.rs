use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::error::{LineCheckerError, Result};
use crate::tags::{TagClassifier, Tags};

pub trait FileFilter {
    /// Whether a discovered path should be checked.
    ///
    /// # Errors
    /// Returns an error if the path cannot be classified.
    fn should_include(&self, path: &Path) -> Result<bool>;

    /// Whether a recursive walk should enter this directory.
    fn should_descend(&self, _dir: &Path) -> bool {
        true
    }
}

/// Selects paths whose tags intersect a wanted set, minus excluded globs.
pub struct TagFilter<C: TagClassifier> {
    classifier: C,
    tags: Tags,
    exclude_patterns: GlobSet,
}

impl<C: TagClassifier> TagFilter<C> {
    /// Create a new filter with the given wanted tags and exclude patterns.
    ///
    /// # Errors
    /// Returns an error if any exclude pattern is invalid.
    pub fn new(classifier: C, tags: Tags, exclude_patterns: &[String]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in exclude_patterns {
            let glob = Glob::new(pattern).map_err(|e| LineCheckerError::InvalidPattern {
                pattern: pattern.clone(),
                source: e,
            })?;
            builder.add(glob);
        }
        let exclude_patterns = builder
            .build()
            .map_err(|e| LineCheckerError::InvalidPattern {
                pattern: "combined patterns".to_string(),
                source: e,
            })?;

        Ok(Self {
            classifier,
            tags,
            exclude_patterns,
        })
    }

    fn has_wanted_tag(&self, path: &Path) -> Result<bool> {
        let tags = self.classifier.classify(path)?;
        Ok(!tags.is_disjoint(&self.tags))
    }

    fn is_excluded(&self, path: &Path) -> bool {
        let file_name = path.file_name().unwrap_or_default();
        self.exclude_patterns.is_match(file_name) || self.exclude_patterns.is_match(path)
    }
}

impl<C: TagClassifier> FileFilter for TagFilter<C> {
    fn should_include(&self, path: &Path) -> Result<bool> {
        if self.is_excluded(path) {
            return Ok(false);
        }
        self.has_wanted_tag(path)
    }

    fn should_descend(&self, dir: &Path) -> bool {
        !self.is_excluded(dir)
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
