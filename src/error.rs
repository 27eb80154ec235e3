use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LineCheckerError {
    #[error("Invalid path: {}", path.display())]
    InvalidPath { path: PathBuf },

    #[error("Failed to load file: {}", path.display())]
    FileLoad {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to list directory: {}", path.display())]
    Discovery {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid glob pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),

    #[error("Timestamp formatting error: {0}")]
    TimeFormat(#[from] time::error::Format),
}

impl LineCheckerError {
    /// Short category name used when reporting the error.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::InvalidPath { .. } => "InvalidPath",
            Self::FileLoad { .. } => "FileLoad",
            Self::Discovery { .. } => "Discovery",
            Self::InvalidPattern { .. } => "Pattern",
            Self::Config(_) => "Config",
            Self::Io(_) => "IO",
            Self::JsonSerialize(_) => "Serialization",
            Self::TimeFormat(_) => "Time",
        }
    }

    /// Returns a hint for resolving the error, if one applies.
    #[must_use]
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::InvalidPath { .. } => Some("Check that the file or directory exists"),
            Self::FileLoad { source, .. } => match source.kind() {
                std::io::ErrorKind::NotFound => {
                    Some("The file was removed after discovery; re-run the check")
                }
                std::io::ErrorKind::PermissionDenied => Some("Check the file permissions"),
                _ => None,
            },
            Self::Discovery { source, .. }
                if source.kind() == std::io::ErrorKind::PermissionDenied =>
            {
                Some("Check the directory permissions")
            }
            Self::InvalidPattern { .. } => {
                Some("Exclude patterns use glob syntax, e.g. '**/build/**'")
            }
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, LineCheckerError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
