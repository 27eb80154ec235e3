pub mod checker;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod scanner;
pub mod source;
pub mod tags;

pub use error::{LineCheckerError, Result};

/// The run completed, whether or not any file failed.
pub const EXIT_SUCCESS: i32 = 0;
/// The run could not complete: bad root path, unreadable file, or bad settings.
pub const EXIT_ERROR: i32 = 1;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
