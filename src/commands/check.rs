use std::path::{Path, PathBuf};

use crate::checker::{Checker, FileResult, LineLengthChecker, RunSummary};
use crate::cli::Cli;
use crate::error::{LineCheckerError, Result};
use crate::output::{CheckProgress, ElapsedTimer, OutputFormat, OutputFormatter, ReportFile};
use crate::scanner::ScanTarget;
use crate::source::load_lines;
use crate::tags::TagClassifier;
use crate::{EXIT_ERROR, EXIT_SUCCESS};

use super::context::{CheckContext, format_output, text_formatter, write_output};

/// Run the check described by the command line and return the exit code.
#[must_use]
pub fn run_check(cli: &Cli) -> i32 {
    let mut timer = ElapsedTimer::new();
    timer.start();

    match run_check_impl(cli, &mut timer) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            report_error(cli, &e, &mut timer);
            EXIT_ERROR
        }
    }
}

fn run_check_impl(cli: &Cli, timer: &mut ElapsedTimer) -> Result<i32> {
    // 1. Build and validate settings
    let ctx = CheckContext::from_cli(cli);
    ctx.config.validate()?;

    // 2. Banner
    if prints_text_to_stdout(cli)
        && let Some(banner) = text_formatter(cli).banner()
    {
        println!("{banner}");
    }

    // 3. Discover and check
    let target = ctx.target(&cli.path);
    let summary = run_check_with_context(&target, &ctx)?;
    timer.stop();

    // 4. Report
    let elapsed = cli.elapsed_time.then(|| timer.elapsed_secs());
    let output = format_output(cli, &ctx.config, &summary, elapsed)?;
    let suppressed = cli.quiet && summary.is_all_passed() && cli.output.is_none();
    if !suppressed {
        write_output(cli.output.as_deref(), &output)?;
    }

    // 5. Persist
    if cli.save {
        ReportFile::new(".").write(&summary)?;
    }

    Ok(EXIT_SUCCESS)
}

const fn prints_text_to_stdout(cli: &Cli) -> bool {
    matches!(cli.format, OutputFormat::Text) && cli.output.is_none()
}

/// Print an error to stderr. A bad root path is followed by an empty
/// summary, so the run still ends with its usual closing line.
fn report_error(cli: &Cli, error: &LineCheckerError, timer: &mut ElapsedTimer) {
    let formatter = text_formatter(cli);
    eprintln!("{}", formatter.format_error(error));

    if matches!(error, LineCheckerError::InvalidPath { .. }) && prints_text_to_stdout(cli) {
        timer.stop();
        let elapsed = cli.elapsed_time.then(|| timer.elapsed_secs());
        if let Ok(summary) = formatter
            .with_elapsed(elapsed)
            .format(&RunSummary::new())
        {
            print!("{summary}");
        }
    }
}

/// Discover the target's files, then load and check each one in order.
///
/// The first directory that cannot be listed or file that cannot be loaded
/// aborts the run; its error is returned and nothing tallied so far is
/// reported.
///
/// # Errors
/// Returns `LineCheckerError::InvalidPath` if the target does not exist,
/// `LineCheckerError::Discovery` if a directory cannot be listed,
/// `LineCheckerError::FileLoad` if a discovered file cannot be read, or
/// `LineCheckerError::InvalidPattern` for a bad exclude glob.
pub fn run_check_with_context<C: TagClassifier>(
    target: &ScanTarget,
    ctx: &CheckContext<C>,
) -> Result<RunSummary> {
    let files = ctx.discover(target)?;
    tracing::info!(
        root = %target.path.display(),
        count = files.len(),
        "discovered files"
    );

    let checker = LineLengthChecker::new(ctx.config.max_length);
    let progress = CheckProgress::new(u64::try_from(files.len()).unwrap_or(u64::MAX), ctx.quiet);
    let result = check_files(&files, &checker, &progress);
    progress.finish();

    result
}

fn check_files(
    files: &[PathBuf],
    checker: &impl Checker,
    progress: &CheckProgress,
) -> Result<RunSummary> {
    let mut summary = RunSummary::new();

    for path in files {
        progress.start_file(path);
        let result = check_file(path, checker)?;
        summary.record(result);
        progress.inc();
    }

    Ok(summary)
}

fn check_file(path: &Path, checker: &impl Checker) -> Result<FileResult> {
    let lines = load_lines(path)?;
    let result = checker.check(path, &lines);
    tracing::debug!(
        path = %path.display(),
        lines = lines.len(),
        violations = result.violations().len(),
        "checked"
    );
    Ok(result)
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
