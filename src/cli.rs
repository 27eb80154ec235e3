use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};

use crate::config::{DEFAULT_MAX_LENGTH, DEFAULT_TAG};
use crate::output::OutputFormat;

/// Color output control
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "line-checker")]
#[command(author, version, about = "Line length checker - flag lines longer than a limit")]
#[command(long_about = "Checks every file under PATH whose tags match --tag and reports \
    lines longer than --line-length characters.\n\n\
    Exit codes:\n  \
    0 - Check completed (long lines are reported, not an error)\n  \
    1 - Invalid path, unreadable file, or invalid option")]
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// File or directory to check
    pub path: PathBuf,

    /// Maximum line length
    #[arg(
        short = 'l',
        long = "line-length",
        visible_alias = "line_length",
        default_value_t = DEFAULT_MAX_LENGTH
    )]
    pub line_length: usize,

    /// File tags to check (comma-separated or repeated, e.g. python,rust)
    #[arg(short = 't', long = "tag", value_delimiter = ',', default_value = DEFAULT_TAG)]
    pub tags: Vec<String>,

    /// Descend into subdirectories
    #[arg(short, long)]
    pub recursive: bool,

    /// Exclude patterns (glob syntax, can be specified multiple times)
    #[arg(long, short = 'x')]
    pub exclude: Vec<String>,

    /// Show the elapsed time of the check in seconds
    #[arg(short = 'E', long = "elapsed-time", visible_alias = "elapse_time")]
    pub elapsed_time: bool,

    /// Quiet mode: no output unless a file fails or an error occurs
    #[arg(short, long)]
    pub quiet: bool,

    /// Save results to a timestamped file in the current directory
    #[arg(short = 'S', long)]
    pub save: bool,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorChoice,

    /// Turn off color output (same as --color never)
    #[arg(long, visible_alias = "no_color", conflicts_with = "color")]
    pub no_color: bool,

    /// Increase log verbosity on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// The color choice after applying `--no-color`.
    #[must_use]
    pub const fn effective_color(&self) -> ColorChoice {
        if self.no_color {
            ColorChoice::Never
        } else {
            self.color
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
