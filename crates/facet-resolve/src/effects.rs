//! Directory-listing effects behind a trait, so embedders and tests
//! can supply their own provider (a build tool may have its own notion
//! of project root or a virtual file tree).

use std::fs;
use std::io;
use std::path::Path;

/// One directory entry as seen by the resolver: its base name and
/// whether it is itself a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub is_dir: bool,
}

/// Read-only view of the directory namespace. The resolver never
/// mutates anything it scans, so implementations are free to share
/// state across concurrent resolution calls.
pub trait DirFs {
    fn list(&self, path: &Path) -> io::Result<Vec<DirEntry>>;
    fn exists(&self, path: &Path) -> bool;
}

/// The ordinary OS filesystem.
pub struct OsDirFs;

impl DirFs for OsDirFs {
    fn list(&self, path: &Path) -> io::Result<Vec<DirEntry>> {
        let mut entries = Vec::new();

        for entry in fs::read_dir(path)? {
            let entry = entry?;
            // names the resolver cannot compare as UTF-8 carry no tokens
            let Some(name) = entry.file_name().to_str().map(str::to_string) else {
                continue;
            };
            let is_dir = entry.file_type()?.is_dir();
            entries.push(DirEntry { name, is_dir });
        }

        Ok(entries)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}
