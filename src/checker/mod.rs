mod line_length;
mod result;
mod summary;

pub use line_length::{LineLengthChecker, check_lines};
pub use result::{FileResult, Violation};
pub use summary::RunSummary;

use std::path::Path;

pub trait Checker {
    /// Check one file's lines and report every violation, in line order.
    fn check(&self, path: &Path, lines: &[String]) -> FileResult;
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
