use std::path::PathBuf;

use super::*;
use crate::checker::Violation;

fn make_failed_result(path: &str, violations: &[(usize, usize)]) -> FileResult {
    FileResult::new(
        PathBuf::from(path),
        violations.iter().copied().map(Violation::from).collect(),
    )
}

fn make_passed_result(path: &str) -> FileResult {
    FileResult::new(PathBuf::from(path), Vec::new())
}

fn summary_of(results: Vec<FileResult>) -> RunSummary {
    results.into_iter().collect()
}

#[test]
fn summary_zero_checked() {
    let formatter = TextFormatter::new(ColorMode::Never);
    let output = formatter.format(&RunSummary::new()).unwrap();
    assert_eq!(output, "0 files checked\n");
}

#[test]
fn summary_one_checked_zero_failed() {
    let formatter = TextFormatter::new(ColorMode::Never);
    let output = formatter
        .format(&summary_of(vec![make_passed_result("a.py")]))
        .unwrap();
    assert_eq!(output, "1 files checked: Passed\n");
}

#[test]
fn summary_one_checked_one_failed() {
    let formatter = TextFormatter::new(ColorMode::Never);
    let output = formatter
        .format(&summary_of(vec![make_failed_result("foo.py", &[(0, 100)])]))
        .unwrap();
    assert_eq!(
        output,
        "1 files checked: Failed\nfoo.py\n  line: 1  -  length: 100\n"
    );
}

#[test]
fn summary_two_checked_one_failed() {
    let formatter = TextFormatter::new(ColorMode::Never);
    let output = formatter
        .format(&summary_of(vec![
            make_passed_result("a.py"),
            make_failed_result("b.py", &[(4, 81)]),
        ]))
        .unwrap();
    assert!(output.starts_with("2 files checked: 1 Passed, 1 Failed\n"));
}

#[test]
fn failed_details_use_one_based_lines() {
    let formatter = TextFormatter::new(ColorMode::Never);
    let output = formatter
        .format(&summary_of(vec![make_failed_result(
            "foo.py",
            &[(33, 85), (84, 91)],
        )]))
        .unwrap();
    assert!(output.contains("foo.py\n  line: 34  -  length: 85\n  line: 85  -  length: 91\n"));
}

#[test]
fn elapsed_time_is_appended() {
    let formatter = TextFormatter::new(ColorMode::Never).with_elapsed(Some(2.5));
    let output = formatter
        .format(&summary_of(vec![make_passed_result("a.py")]))
        .unwrap();
    assert_eq!(output, "1 files checked: Passed  in 2.50s\n");
}

#[test]
fn quiet_mode_hides_all_pass_output() {
    let formatter = TextFormatter::new(ColorMode::Never).with_quiet(true);
    let output = formatter
        .format(&summary_of(vec![make_passed_result("a.py")]))
        .unwrap();
    assert!(output.is_empty());
}

#[test]
fn quiet_mode_still_reports_failures() {
    let formatter = TextFormatter::new(ColorMode::Never).with_quiet(true);
    let output = formatter
        .format(&summary_of(vec![make_failed_result("a.py", &[(0, 90)])]))
        .unwrap();
    assert!(output.contains("Failed"));
    assert!(output.contains("a.py"));
}

#[test]
fn banner_hidden_when_quiet() {
    assert_eq!(TextFormatter::new(ColorMode::Never).banner(), Some("Line Checker"));
    assert_eq!(
        TextFormatter::new(ColorMode::Never).with_quiet(true).banner(),
        None
    );
}

#[test]
fn colors_wrap_status_words() {
    let formatter = TextFormatter::new(ColorMode::Always);
    let output = formatter
        .format(&summary_of(vec![
            make_passed_result("a.py"),
            make_failed_result("b.py", &[(0, 90)]),
        ]))
        .unwrap();
    assert!(output.contains("\x1b[1;32mPassed\x1b[0m"));
    assert!(output.contains("\x1b[1;31mFailed\x1b[0m"));
}

#[test]
fn no_colors_when_never() {
    let formatter = TextFormatter::new(ColorMode::Never);
    let output = formatter
        .format(&summary_of(vec![make_failed_result("b.py", &[(0, 90)])]))
        .unwrap();
    assert!(!output.contains('\x1b'));
}

#[test]
fn format_error_includes_hint() {
    let formatter = TextFormatter::new(ColorMode::Never);
    let error = LineCheckerError::InvalidPath {
        path: PathBuf::from("missing"),
    };
    let output = formatter.format_error(&error);
    assert!(output.starts_with("Error: Invalid path: missing"));
    assert!(output.contains("hint:"));
}

#[test]
fn format_error_colored_red() {
    let formatter = TextFormatter::new(ColorMode::Always);
    let output = formatter.format_error(&LineCheckerError::Config("bad".to_string()));
    assert_eq!(output, "\x1b[1;31mError: Configuration error: bad\x1b[0m");
}
