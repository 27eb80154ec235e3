mod classifier;
mod registry;
mod shebang;

pub use classifier::{FsTagClassifier, TagClassifier, Tags};
pub use registry::{FileKind, TagRegistry};
pub use shebang::parse_shebang;

/// Tag attached to directories.
pub const TAG_DIRECTORY: &str = "directory";
/// Tag attached to symbolic links (never followed).
pub const TAG_SYMLINK: &str = "symlink";
/// Tag attached to sockets, fifos and devices.
pub const TAG_SPECIAL: &str = "special";
/// Tag attached to every regular file.
pub const TAG_FILE: &str = "file";
pub const TAG_EXECUTABLE: &str = "executable";
pub const TAG_NON_EXECUTABLE: &str = "non-executable";
pub const TAG_TEXT: &str = "text";
pub const TAG_BINARY: &str = "binary";
