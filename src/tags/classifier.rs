use std::collections::BTreeSet;
use std::fs::{self, File, Metadata};
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use crate::error::{LineCheckerError, Result};

use super::{
    TAG_BINARY, TAG_DIRECTORY, TAG_EXECUTABLE, TAG_FILE, TAG_NON_EXECUTABLE, TAG_SPECIAL,
    TAG_SYMLINK, TAG_TEXT, TagRegistry, parse_shebang,
};

/// Descriptive labels for one filesystem path.
pub type Tags = BTreeSet<String>;

/// Bytes inspected when sniffing shebangs and text content.
const SNIFF_BYTES: u64 = 1024;

/// Maps a filesystem path to its descriptive tags.
pub trait TagClassifier {
    /// Classify a single path.
    ///
    /// # Errors
    /// Returns `LineCheckerError::InvalidPath` if the path does not exist.
    fn classify(&self, path: &Path) -> Result<Tags>;
}

impl<T: TagClassifier + ?Sized> TagClassifier for &T {
    fn classify(&self, path: &Path) -> Result<Tags> {
        (**self).classify(path)
    }
}

/// Classifier backed by filesystem metadata and a `TagRegistry`.
///
/// Regular files are tagged, in order of precedence, by exact file name
/// together with extension, by shebang interpreter (executables only), and finally as
/// `text` or `binary` from their leading bytes.
#[derive(Debug, Default)]
pub struct FsTagClassifier {
    registry: TagRegistry,
}

impl FsTagClassifier {
    #[must_use]
    pub const fn new(registry: TagRegistry) -> Self {
        Self { registry }
    }

    #[must_use]
    pub const fn registry(&self) -> &TagRegistry {
        &self.registry
    }

    fn classify_file(&self, path: &Path, metadata: &Metadata) -> Tags {
        let executable = is_executable(metadata);
        let mut tags = Tags::new();
        tags.insert(TAG_FILE.to_string());
        tags.insert(
            if executable {
                TAG_EXECUTABLE
            } else {
                TAG_NON_EXECUTABLE
            }
            .to_string(),
        );

        if let Some(known) = self.tags_from_name(path) {
            tags.extend(known);
        } else if executable && let Some(known) = self.tags_from_shebang(path) {
            tags.extend(known);
        }

        if !tags.contains(TAG_TEXT) && !tags.contains(TAG_BINARY) {
            match sniff_is_text(path) {
                Ok(true) => {
                    tags.insert(TAG_TEXT.to_string());
                }
                Ok(false) => {
                    tags.insert(TAG_BINARY.to_string());
                }
                Err(e) => tracing::debug!(path = %path.display(), error = %e, "content sniff failed"),
            }
        }

        tags
    }

    /// Union of the tags for the file name and for its extension. The name
    /// matches whole or by any dot-separated part, so `Dockerfile.py` is both
    /// `dockerfile` and `python`.
    fn tags_from_name(&self, path: &Path) -> Option<Tags> {
        let name = path.file_name()?.to_str()?;
        let by_name = std::iter::once(name)
            .chain(name.split('.'))
            .find_map(|part| self.registry.tags_for_filename(part));
        let by_ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| self.registry.tags_for_extension(ext));

        match (by_name, by_ext) {
            (None, None) => None,
            (a, b) => Some(a.into_iter().chain(b).flatten().cloned().collect()),
        }
    }

    fn tags_from_shebang(&self, path: &Path) -> Option<Tags> {
        let file = File::open(path).ok()?;
        let mut first_line = String::new();
        BufReader::new(file)
            .take(SNIFF_BYTES)
            .read_line(&mut first_line)
            .ok()?;

        let interpreter = parse_shebang(first_line.trim_end())?;
        let mut tags = self.registry.tags_for_interpreter(&interpreter)?.clone();
        tags.insert(interpreter);
        Some(tags)
    }
}

impl TagClassifier for FsTagClassifier {
    fn classify(&self, path: &Path) -> Result<Tags> {
        let metadata = fs::symlink_metadata(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                LineCheckerError::InvalidPath {
                    path: path.to_path_buf(),
                }
            } else {
                LineCheckerError::Io(e)
            }
        })?;

        let file_type = metadata.file_type();
        let tags = if file_type.is_dir() {
            Tags::from([TAG_DIRECTORY.to_string()])
        } else if file_type.is_symlink() {
            Tags::from([TAG_SYMLINK.to_string()])
        } else if file_type.is_file() {
            self.classify_file(path, &metadata)
        } else {
            Tags::from([TAG_SPECIAL.to_string()])
        };

        Ok(tags)
    }
}

#[cfg(unix)]
fn is_executable(metadata: &Metadata) -> bool {
    use std::os::unix::fs::PermissionsExt;
    metadata.permissions().mode() & 0o111 != 0
}

#[cfg(not(unix))]
const fn is_executable(_metadata: &Metadata) -> bool {
    false
}

/// A file is text when its leading bytes are all printable or common
/// control characters (BEL..CR, ESC).
fn sniff_is_text(path: &Path) -> std::io::Result<bool> {
    let mut head = Vec::new();
    File::open(path)?.take(SNIFF_BYTES).read_to_end(&mut head)?;
    Ok(head.iter().all(|&b| is_text_byte(b)))
}

const fn is_text_byte(b: u8) -> bool {
    matches!(b, 7..=13 | 27 | 0x20..=0x7e | 0x80..=0xff)
}

#[cfg(test)]
#[path = "classifier_tests.rs"]
mod tests;
