use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{LineCheckerError, Result};

/// Read a file and split it into lines without their terminators.
///
/// The handle is closed before returning. Invalid UTF-8 is replaced with
/// U+FFFD rather than rejected.
///
/// # Errors
/// Returns `LineCheckerError::FileLoad` if the file cannot be opened or read.
pub fn load_lines(path: &Path) -> Result<Vec<String>> {
    let to_load_error = |source: std::io::Error| LineCheckerError::FileLoad {
        path: path.to_path_buf(),
        source,
    };

    let mut bytes = Vec::new();
    File::open(path)
        .and_then(|mut file| file.read_to_end(&mut bytes))
        .map_err(to_load_error)?;

    Ok(split_lines(&String::from_utf8_lossy(&bytes)))
}

/// Characters that end a line. `\r\n` counts as a single terminator.
const LINE_BREAKS: [char; 10] = [
    '\n', '\r', '\x0b', '\x0c', '\x1c', '\x1d', '\x1e', '\u{85}', '\u{2028}', '\u{2029}',
];

/// Split text into lines on every Unicode line boundary: `\n`, `\r\n`,
/// `\r`, vertical tab, form feed, the file/group/record separators, NEL and
/// the line and paragraph separators.
///
/// A trailing terminator does not produce an empty final line, and empty
/// text yields no lines at all.
#[must_use]
pub fn split_lines(text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut rest = text;

    while !rest.is_empty() {
        match rest.find(LINE_BREAKS) {
            Some(pos) => {
                lines.push(rest[..pos].to_string());
                let terminator_len = if rest[pos..].starts_with("\r\n") {
                    2
                } else {
                    rest[pos..].chars().next().map_or(1, char::len_utf8)
                };
                rest = &rest[pos + terminator_len..];
            }
            None => {
                lines.push(rest.to_string());
                break;
            }
        }
    }

    lines
}

#[cfg(test)]
#[path = "source_tests.rs"]
mod tests;
