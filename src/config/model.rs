use std::collections::BTreeSet;

use serde::Serialize;

use crate::error::{LineCheckerError, Result};

/// Maximum permitted line length when none is given.
pub const DEFAULT_MAX_LENGTH: usize = 80;

/// Tag selected for checking when none is given.
pub const DEFAULT_TAG: &str = "python";

/// Settings for one check run.
///
/// Built once by the CLI layer and passed by reference into discovery and
/// checking. There is no configuration file; every field comes from flags.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CheckConfig {
    /// Lines longer than this (strictly) are violations.
    pub max_length: usize,

    /// Files are checked when their tags intersect this set.
    pub tags: BTreeSet<String>,

    /// Descend into subdirectories during discovery.
    pub recursive: bool,

    /// Glob patterns for paths to skip entirely.
    pub exclude: Vec<String>,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            max_length: DEFAULT_MAX_LENGTH,
            tags: BTreeSet::from([DEFAULT_TAG.to_string()]),
            recursive: false,
            exclude: Vec::new(),
        }
    }
}

impl CheckConfig {
    #[must_use]
    pub const fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub const fn with_recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    #[must_use]
    pub fn with_exclude(mut self, exclude: Vec<String>) -> Self {
        self.exclude = exclude;
        self
    }

    /// Reject settings the checker cannot honour.
    ///
    /// # Errors
    /// Returns `LineCheckerError::Config` when the maximum length is zero or
    /// no tag (after trimming blanks) was selected.
    pub fn validate(&self) -> Result<()> {
        if self.max_length == 0 {
            return Err(LineCheckerError::Config(
                "max line length must be a positive integer".to_string(),
            ));
        }
        if self.tags.iter().all(|t| t.trim().is_empty()) {
            return Err(LineCheckerError::Config(
                "at least one tag to check must be given".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
