use super::FileResult;

/// Aggregate outcome of one run, handed from the checker to reporting.
///
/// Passing files are only counted. Failing files are kept in check order,
/// so `num_failed() <= num_checked()` holds by construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    num_checked: usize,
    failures: Vec<FileResult>,
}

impl RunSummary {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a checked file, keeping it only if it failed.
    pub fn record(&mut self, result: FileResult) {
        self.num_checked += 1;
        if result.is_failed() {
            self.failures.push(result);
        }
    }

    #[must_use]
    pub const fn num_checked(&self) -> usize {
        self.num_checked
    }

    #[must_use]
    pub fn num_failed(&self) -> usize {
        self.failures.len()
    }

    #[must_use]
    pub fn num_passed(&self) -> usize {
        self.num_checked - self.failures.len()
    }

    #[must_use]
    pub fn failures(&self) -> &[FileResult] {
        &self.failures
    }

    #[must_use]
    pub fn is_all_passed(&self) -> bool {
        self.failures.is_empty()
    }
}

impl FromIterator<FileResult> for RunSummary {
    fn from_iter<I: IntoIterator<Item = FileResult>>(iter: I) -> Self {
        let mut summary = Self::new();
        for result in iter {
            summary.record(result);
        }
        summary
    }
}

#[cfg(test)]
#[path = "summary_tests.rs"]
mod tests;
