use serde::Serialize;

use crate::checker::{FileResult, RunSummary};
use crate::config::CheckConfig;
use crate::error::Result;

use super::OutputFormatter;

#[derive(Default)]
pub struct JsonFormatter {
    settings: Option<CheckConfig>,
    elapsed: Option<f64>,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    settings: Option<&'a CheckConfig>,
    summary: Summary,
    failures: Vec<JsonFile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    elapsed_seconds: Option<f64>,
}

#[derive(Serialize)]
struct Summary {
    files_checked: usize,
    passed: usize,
    failed: usize,
}

#[derive(Serialize)]
struct JsonFile {
    path: String,
    violations: Vec<JsonViolation>,
}

#[derive(Serialize)]
struct JsonViolation {
    line: usize,
    index: usize,
    length: usize,
}

impl JsonFormatter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Echo the effective settings alongside the results.
    #[must_use]
    pub fn with_settings(mut self, settings: CheckConfig) -> Self {
        self.settings = Some(settings);
        self
    }

    #[must_use]
    pub const fn with_elapsed(mut self, elapsed: Option<f64>) -> Self {
        self.elapsed = elapsed;
        self
    }
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, summary: &RunSummary) -> Result<String> {
        let output = JsonOutput {
            settings: self.settings.as_ref(),
            summary: Summary {
                files_checked: summary.num_checked(),
                passed: summary.num_passed(),
                failed: summary.num_failed(),
            },
            failures: summary.failures().iter().map(convert_result).collect(),
            elapsed_seconds: self.elapsed,
        };

        let mut json = serde_json::to_string_pretty(&output)?;
        json.push('\n');
        Ok(json)
    }
}

fn convert_result(result: &FileResult) -> JsonFile {
    JsonFile {
        path: result.path().display().to_string(),
        violations: result
            .violations()
            .iter()
            .map(|v| JsonViolation {
                line: v.line_number(),
                index: v.line_index,
                length: v.line_length,
            })
            .collect(),
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
