use std::path::PathBuf;

use crate::tags::Tags;

/// A root path plus the tags a file must carry (any one of) to be checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanTarget {
    pub path: PathBuf,
    pub tags: Tags,
}

impl ScanTarget {
    #[must_use]
    pub fn new<I, S>(path: impl Into<PathBuf>, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            path: path.into(),
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }
}
