use std::path::Path;

use super::{Checker, FileResult, Violation};

/// Flags lines whose character count is strictly greater than `max_length`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineLengthChecker {
    max_length: usize,
}

impl LineLengthChecker {
    #[must_use]
    pub const fn new(max_length: usize) -> Self {
        Self { max_length }
    }

    #[must_use]
    pub const fn max_length(&self) -> usize {
        self.max_length
    }
}

impl Checker for LineLengthChecker {
    fn check(&self, path: &Path, lines: &[String]) -> FileResult {
        FileResult::new(path.to_path_buf(), check_lines(lines, self.max_length))
    }
}

/// Scan lines for ones longer than `max_length`.
///
/// Length is counted in Unicode scalar values; a line of exactly
/// `max_length` characters passes. Violations come back in input order.
#[must_use]
pub fn check_lines<S: AsRef<str>>(lines: &[S], max_length: usize) -> Vec<Violation> {
    lines
        .iter()
        .enumerate()
        .filter_map(|(line_index, line)| {
            let line_length = line.as_ref().chars().count();
            (line_length > max_length).then_some(Violation {
                line_index,
                line_length,
            })
        })
        .collect()
}

#[cfg(test)]
#[path = "line_length_tests.rs"]
mod tests;
