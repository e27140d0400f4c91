//! Path helpers shared by the resolver and its collaborators.

use std::path::{Path, PathBuf};

use facet_core::Dimensions;

/// Rewrite every derived directory component of `dir` (relative to
/// `base_dir`) back to its root name.
///
/// `base/common/default-ios` → `base/common/default`. Used to compute
/// the logical key a concrete path deduplicates under.
pub fn plain_dir(dir: &Path, base_dir: &Path, dims: &Dimensions) -> PathBuf {
    let rel = dir.strip_prefix(base_dir).unwrap_or(dir);

    rel.components().fold(base_dir.to_path_buf(), |p, c| {
        let name = c.as_os_str().to_string_lossy();
        p.join(dims.root_dir_name(&name))
    })
}

/// Whether a textual path is written relative (`./x`, `../x`).
pub fn is_relative(path: &str) -> bool {
    path.starts_with('.')
}
