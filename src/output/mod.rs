mod elapsed;
mod json;
mod progress;
mod report_file;
mod text;

pub use elapsed::ElapsedTimer;
pub use json::JsonFormatter;
pub use progress::CheckProgress;
pub use report_file::ReportFile;
pub use text::{ColorMode, TextFormatter};

use crate::checker::RunSummary;
use crate::error::Result;

/// Trait for rendering a run summary into an output format.
pub trait OutputFormatter {
    /// Format the run summary into a string.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, summary: &RunSummary) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
