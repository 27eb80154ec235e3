use std::path::PathBuf;

use super::*;

#[test]
fn error_display_invalid_path() {
    let err = LineCheckerError::InvalidPath {
        path: PathBuf::from("/tmp/does-not-exist-xyz"),
    };
    assert_eq!(err.to_string(), "Invalid path: /tmp/does-not-exist-xyz");
}

#[test]
fn error_display_file_load() {
    let err = LineCheckerError::FileLoad {
        path: PathBuf::from("foo.py"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
    };
    assert!(err.to_string().contains("foo.py"));
}

#[test]
fn error_display_config() {
    let err = LineCheckerError::Config("max line length must be positive".to_string());
    assert_eq!(
        err.to_string(),
        "Configuration error: max line length must be positive"
    );
}

#[test]
fn invalid_path_and_file_load_are_distinct() {
    let invalid = LineCheckerError::InvalidPath {
        path: PathBuf::from("a.py"),
    };
    let load = LineCheckerError::FileLoad {
        path: PathBuf::from("a.py"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
    };
    assert_ne!(invalid.error_type(), load.error_type());
}

#[test]
fn error_type_returns_correct_type() {
    assert_eq!(
        LineCheckerError::Config("test".to_string()).error_type(),
        "Config"
    );
    assert_eq!(
        LineCheckerError::Io(std::io::Error::other("test")).error_type(),
        "IO"
    );
    assert_eq!(
        LineCheckerError::InvalidPath {
            path: PathBuf::from("x")
        }
        .error_type(),
        "InvalidPath"
    );
}

#[test]
fn file_load_suggestion_depends_on_kind() {
    let not_found = LineCheckerError::FileLoad {
        path: PathBuf::from("a.py"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
    };
    assert!(not_found.suggestion().unwrap().contains("re-run"));

    let denied = LineCheckerError::FileLoad {
        path: PathBuf::from("a.py"),
        source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
    };
    assert!(denied.suggestion().unwrap().contains("permissions"));

    let other = LineCheckerError::FileLoad {
        path: PathBuf::from("a.py"),
        source: std::io::Error::other("weird"),
    };
    assert!(other.suggestion().is_none());
}

#[test]
fn invalid_pattern_keeps_source() {
    let source = globset::Glob::new("[invalid").unwrap_err();
    let err = LineCheckerError::InvalidPattern {
        pattern: "[invalid".to_string(),
        source,
    };
    assert!(std::error::Error::source(&err).is_some());
    assert!(err.to_string().contains("[invalid"));
}

#[test]
fn discovery_error_names_directory() {
    let err = LineCheckerError::Discovery {
        path: PathBuf::from("src"),
        source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
    };
    assert_eq!(err.to_string(), "Failed to list directory: src");
    assert_eq!(err.error_type(), "Discovery");
    assert!(err.suggestion().unwrap().contains("permissions"));
}
