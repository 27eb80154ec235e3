use std::fs;
use std::path::{Path, PathBuf};

use crate::checker::RunSummary;
use crate::cli::{ColorChoice, Cli};
use crate::config::CheckConfig;
use crate::error::Result;
use crate::output::{
    ColorMode, JsonFormatter, OutputFormat, OutputFormatter, TextFormatter,
};
use crate::scanner::{DirectoryScanner, FileScanner, ScanTarget, TagFilter};
use crate::tags::{FsTagClassifier, TagClassifier};

/// Dependencies for one check run.
///
/// The classifier is injected so callers (and tests) can supply their own
/// tagging rules in place of the filesystem-backed default.
pub struct CheckContext<C: TagClassifier = FsTagClassifier> {
    pub config: CheckConfig,
    pub classifier: C,
    /// Hide the progress bar.
    pub quiet: bool,
}

impl CheckContext<FsTagClassifier> {
    #[must_use]
    pub fn from_cli(cli: &Cli) -> Self {
        let config = CheckConfig::default()
            .with_max_length(cli.line_length)
            .with_tags(cli.tags.iter().map(|t| t.trim().to_string()))
            .with_recursive(cli.recursive)
            .with_exclude(cli.exclude.clone());

        Self {
            config,
            classifier: FsTagClassifier::default(),
            quiet: cli.quiet,
        }
    }
}

impl<C: TagClassifier> CheckContext<C> {
    #[must_use]
    pub const fn new(config: CheckConfig, classifier: C) -> Self {
        Self {
            config,
            classifier,
            quiet: true,
        }
    }

    /// The scan target for `path` using the configured tags.
    #[must_use]
    pub fn target(&self, path: impl Into<PathBuf>) -> ScanTarget {
        ScanTarget {
            path: path.into(),
            tags: self.config.tags.clone(),
        }
    }

    /// Resolve a target into files, honouring `recursive` and `exclude`.
    ///
    /// # Errors
    /// Returns an error if an exclude pattern is invalid or the target path
    /// does not exist.
    pub fn discover(&self, target: &ScanTarget) -> Result<Vec<PathBuf>> {
        let filter = TagFilter::new(&self.classifier, target.tags.clone(), &self.config.exclude)?;
        DirectoryScanner::with_recursive(filter, self.config.recursive).scan(&target.path)
    }
}

pub const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

/// Text formatter configured from the command line (color and quiet).
pub(crate) fn text_formatter(cli: &Cli) -> TextFormatter {
    TextFormatter::new(color_choice_to_mode(cli.effective_color())).with_quiet(cli.quiet)
}

pub(crate) fn format_output(
    cli: &Cli,
    config: &CheckConfig,
    summary: &RunSummary,
    elapsed: Option<f64>,
) -> Result<String> {
    match cli.format {
        OutputFormat::Text => text_formatter(cli).with_elapsed(elapsed).format(summary),
        OutputFormat::Json => JsonFormatter::new()
            .with_settings(config.clone())
            .with_elapsed(elapsed)
            .format(summary),
    }
}

/// Write to `output_path` if given, else print to stdout.
///
/// # Errors
/// Returns an error if the output file cannot be written.
pub fn write_output(output_path: Option<&Path>, content: &str) -> Result<()> {
    if let Some(path) = output_path {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
    } else {
        print!("{content}");
    }
    Ok(())
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
