use std::path::{Path, PathBuf};

use bytes::Bytes;

/// One file flowing through the pass: a path and its contents.
/// Immutable; rewriting the path produces a new record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    path: PathBuf,
    contents: Bytes,
}

impl FileRecord {
    pub fn new(path: impl Into<PathBuf>, contents: impl Into<Bytes>) -> Self {
        Self {
            path: path.into(),
            contents: contents.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn contents(&self) -> &Bytes {
        &self.contents
    }

    pub fn with_path(self, path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            contents: self.contents,
        }
    }
}
