use std::path::{Path, PathBuf};

/// A single line longer than the configured maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Violation {
    /// Zero-based position of the line in its file.
    pub line_index: usize,
    /// Character count of the line.
    pub line_length: usize,
}

impl Violation {
    #[must_use]
    pub const fn new(line_index: usize, line_length: usize) -> Self {
        Self {
            line_index,
            line_length,
        }
    }

    /// One-based line number, as shown to users.
    #[must_use]
    pub const fn line_number(&self) -> usize {
        self.line_index + 1
    }
}

impl From<(usize, usize)> for Violation {
    fn from((line_index, line_length): (usize, usize)) -> Self {
        Self::new(line_index, line_length)
    }
}

/// Outcome of checking one file. No violations means the file passed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileResult {
    path: PathBuf,
    violations: Vec<Violation>,
}

impl FileResult {
    #[must_use]
    pub const fn new(path: PathBuf, violations: Vec<Violation>) -> Self {
        Self { path, violations }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    #[must_use]
    pub fn is_passed(&self) -> bool {
        self.violations.is_empty()
    }

    #[must_use]
    pub fn is_failed(&self) -> bool {
        !self.is_passed()
    }
}
