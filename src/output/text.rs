use std::fmt::Write;

use crate::checker::{FileResult, RunSummary};
use crate::error::{LineCheckerError, Result};

use super::OutputFormatter;

/// Banner printed at the start of a text-mode run.
pub const BANNER: &str = "Line Checker";

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// ANSI color codes
mod ansi {
    pub const BOLD_RED: &str = "\x1b[1;31m";
    pub const BOLD_GREEN: &str = "\x1b[1;32m";
    pub const RESET: &str = "\x1b[0m";
}

/// Human-readable report: a one-line summary followed by every failing
/// file and its long lines.
pub struct TextFormatter {
    use_colors: bool,
    quiet: bool,
    elapsed: Option<f64>,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
            quiet: false,
            elapsed: None,
        }
    }

    /// Quiet mode prints nothing for a run without failures.
    #[must_use]
    pub const fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Append the elapsed time, in seconds, to the summary line.
    #[must_use]
    pub const fn with_elapsed(mut self, elapsed: Option<f64>) -> Self {
        self.elapsed = elapsed;
        self
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                // Respect NO_COLOR environment variable
                if std::env::var_os("NO_COLOR").is_some() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        format!("{color}{text}{}", ansi::RESET)
    }

    /// The run banner, or nothing in quiet mode.
    #[must_use]
    pub fn banner(&self) -> Option<&'static str> {
        (!self.quiet).then_some(BANNER)
    }

    /// Render an error for the terminal, with a hint when one applies.
    #[must_use]
    pub fn format_error(&self, error: &LineCheckerError) -> String {
        let mut output = self.colorize(&format!("Error: {error}"), ansi::BOLD_RED);
        if let Some(hint) = error.suggestion() {
            let _ = write!(output, "\n  hint: {hint}");
        }
        output
    }

    fn format_summary(&self, summary: &RunSummary) -> String {
        let checked = summary.num_checked();
        let failed = summary.num_failed();
        let passed_str = self.colorize("Passed", ansi::BOLD_GREEN);
        let failed_str = self.colorize("Failed", ansi::BOLD_RED);

        let state = match (checked, failed) {
            (0, _) => String::new(),
            (_, 0) => format!(": {passed_str}"),
            (c, f) if c == f => format!(": {failed_str}"),
            _ => format!(
                ": {} {passed_str}, {failed} {failed_str}",
                summary.num_passed()
            ),
        };

        let mut line = format!("{checked} files checked{state}");

        if let Some(secs) = self.elapsed {
            let _ = write!(line, "  in {secs:.2}s");
        }

        line
    }

    fn format_failure(result: &FileResult, output: &mut String) {
        let _ = writeln!(output, "{}", result.path().display());
        for violation in result.violations() {
            let _ = writeln!(
                output,
                "  line: {}  -  length: {}",
                violation.line_number(),
                violation.line_length
            );
        }
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, summary: &RunSummary) -> Result<String> {
        if self.quiet && summary.is_all_passed() {
            return Ok(String::new());
        }

        let mut output = self.format_summary(summary);
        output.push('\n');

        for result in summary.failures() {
            Self::format_failure(result, &mut output);
        }

        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
