use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};

use time::OffsetDateTime;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

use crate::checker::RunSummary;
use crate::error::Result;

const FILE_PREFIX: &str = "line_checker_out";

/// Plain-text result file named after the moment it was written.
#[derive(Debug, Clone)]
pub struct ReportFile {
    dir: PathBuf,
}

impl ReportFile {
    /// Reports are written into `dir`.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File name for a report written at `now`, e.g.
    /// `line_checker_out2024-03-09-141502`.
    ///
    /// # Errors
    /// Returns an error if the timestamp cannot be formatted.
    pub fn file_name(now: OffsetDateTime) -> Result<String> {
        const NAME_FORMAT: &[BorrowedFormatItem<'_>] =
            format_description!("[year]-[month]-[day]-[hour][minute][second]");
        let stamp = now.format(NAME_FORMAT)?;
        Ok(format!("{FILE_PREFIX}{stamp}"))
    }

    #[must_use]
    pub fn render(summary: &RunSummary) -> String {
        let mut data = String::from("line checker\n");
        let checked = summary.num_checked();

        if summary.is_all_passed() {
            let _ = writeln!(data, "{checked} file checked: passed");
        } else {
            let _ = writeln!(data, "{checked} file checked: failed");
            for result in summary.failures() {
                let _ = writeln!(data, "{}", result.path().display());
                for violation in result.violations() {
                    let _ = writeln!(
                        data,
                        "  line {} - length: {}",
                        violation.line_number(),
                        violation.line_length
                    );
                }
            }
        }

        data
    }

    /// Write the report stamped with the current local time (UTC if the
    /// local offset is unavailable). Returns the written path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be written.
    pub fn write(&self, summary: &RunSummary) -> Result<PathBuf> {
        self.write_at(summary, now_local_or_utc())
    }

    /// Write the report stamped with `now`.
    ///
    /// # Errors
    /// Returns an error if the file cannot be written.
    pub fn write_at(&self, summary: &RunSummary, now: OffsetDateTime) -> Result<PathBuf> {
        let path = self.dir.join(Self::file_name(now)?);
        fs::write(&path, Self::render(summary))?;
        tracing::info!(path = %path.display(), "saved results");
        Ok(path)
    }
}

fn now_local_or_utc() -> OffsetDateTime {
    OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
}

#[cfg(test)]
#[path = "report_file_tests.rs"]
mod tests;
