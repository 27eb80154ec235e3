use std::fs;

use clap::Parser;
use tempfile::TempDir;

use super::*;
use crate::checker::Violation;
use crate::config::CheckConfig;
use crate::tags::{FsTagClassifier, Tags};

/// Tags every existing path `python`, directories included.
struct EverythingIsPython;

impl TagClassifier for EverythingIsPython {
    fn classify(&self, path: &Path) -> Result<Tags> {
        if !path.exists() {
            return Err(LineCheckerError::InvalidPath {
                path: path.to_path_buf(),
            });
        }
        Ok(Tags::from(["python".to_string()]))
    }
}

fn default_ctx() -> CheckContext {
    CheckContext::new(CheckConfig::default(), FsTagClassifier::default())
}

#[test]
fn directory_with_one_long_python_file() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("foo.py"), "a".repeat(100)).unwrap();
    fs::write(temp_dir.path().join("bar.txt"), "b".repeat(200)).unwrap();

    let ctx = default_ctx();
    let summary = run_check_with_context(&ctx.target(temp_dir.path()), &ctx).unwrap();

    assert_eq!(summary.num_checked(), 1);
    assert_eq!(summary.num_failed(), 1);
    let failure = &summary.failures()[0];
    assert!(failure.path().ends_with("foo.py"));
    assert_eq!(failure.violations(), &[Violation::new(0, 100)]);
}

#[test]
fn passing_files_are_counted_not_kept() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("a.py"), "x = 1\n").unwrap();
    fs::write(temp_dir.path().join("b.py"), format!("{}\n", "y".repeat(80))).unwrap();

    let ctx = default_ctx();
    let summary = run_check_with_context(&ctx.target(temp_dir.path()), &ctx).unwrap();

    assert_eq!(summary.num_checked(), 2);
    assert_eq!(summary.num_failed(), 0);
    assert!(summary.failures().is_empty());
}

#[test]
fn max_length_comes_from_config() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("a.py");
    fs::write(&path, "short\nlonger line\n").unwrap();

    let ctx = CheckContext::new(
        CheckConfig::default().with_max_length(5),
        FsTagClassifier::default(),
    );
    let summary = run_check_with_context(&ctx.target(&path), &ctx).unwrap();

    assert_eq!(summary.failures()[0].violations(), &[Violation::new(1, 11)]);
}

#[test]
fn missing_root_is_invalid_path() {
    let ctx = default_ctx();
    let result = run_check_with_context(&ctx.target("/tmp/does-not-exist-xyz"), &ctx);

    assert!(matches!(result, Err(LineCheckerError::InvalidPath { .. })));
}

#[test]
fn empty_directory_checks_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let ctx = default_ctx();

    let summary = run_check_with_context(&ctx.target(temp_dir.path()), &ctx).unwrap();
    assert_eq!(summary.num_checked(), 0);
}

#[test]
fn load_failure_aborts_run_without_partial_summary() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("good.py"), "a".repeat(100)).unwrap();
    // Tagged python but unreadable as a file
    fs::create_dir(temp_dir.path().join("pkg")).unwrap();

    let ctx = CheckContext::new(CheckConfig::default(), EverythingIsPython);
    let result = run_check_with_context(&ctx.target(temp_dir.path()), &ctx);

    match result {
        Err(LineCheckerError::FileLoad { path, .. }) => assert!(path.ends_with("pkg")),
        other => panic!("expected FileLoad error, got {other:?}"),
    }
}

#[test]
fn run_check_exit_code_success_even_with_failures() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("foo.py"), "a".repeat(100)).unwrap();
    let out = temp_dir.path().join("report.txt");

    let cli = Cli::parse_from([
        "line-checker",
        temp_dir.path().to_str().unwrap(),
        "-o",
        out.to_str().unwrap(),
        "--no-color",
    ]);

    assert_eq!(run_check(&cli), EXIT_SUCCESS);
    let report = fs::read_to_string(&out).unwrap();
    assert!(report.contains("1 files checked: Failed"));
    assert!(report.contains("line: 1  -  length: 100"));
}

#[test]
fn run_check_exit_code_error_for_missing_path() {
    let cli = Cli::parse_from(["line-checker", "/tmp/does-not-exist-xyz", "-q"]);
    assert_eq!(run_check(&cli), EXIT_ERROR);
}

#[test]
fn run_check_exit_code_error_for_zero_length() {
    let temp_dir = TempDir::new().unwrap();
    let cli = Cli::parse_from([
        "line-checker",
        temp_dir.path().to_str().unwrap(),
        "-l",
        "0",
        "-q",
    ]);
    assert_eq!(run_check(&cli), EXIT_ERROR);
}

#[cfg(unix)]
#[test]
fn unreadable_root_exits_error() {
    use std::os::unix::fs::PermissionsExt;

    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("locked");
    fs::create_dir(&root).unwrap();
    fs::write(root.join("foo.py"), "a".repeat(100)).unwrap();
    fs::set_permissions(&root, fs::Permissions::from_mode(0o000)).unwrap();
    let listable = fs::read_dir(&root).is_ok();

    let cli = Cli::parse_from(["line-checker", root.to_str().unwrap(), "-q"]);
    let code = run_check(&cli);
    fs::set_permissions(&root, fs::Permissions::from_mode(0o755)).unwrap();

    // Permission bits do not stop root from listing the directory
    if !listable {
        assert_eq!(code, EXIT_ERROR);
    }
}
