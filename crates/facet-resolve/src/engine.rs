//! Directory and file resolution.
//!
//! [`best_dir_path`] swaps derived directories into a path when the
//! active selectors call for them; [`find`] then picks the best file
//! within the (possibly substituted) directory. Both only ever commit
//! to a candidate whose dimensional tokens are a perfect match against
//! the active selectors.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use facet_core::{Dimensions, perfect_match, score};
use tracing::debug;

use crate::effects::DirFs;
use crate::error::{Error, Result};

fn join(base: &Path, segments: &[String]) -> PathBuf {
    segments.iter().fold(base.to_path_buf(), |p, s| p.join(s))
}

/// Whether `dir` holds an entry whose root file name equals `root`.
/// An unreadable directory simply does not hold the file.
fn contains_root<F: DirFs>(fs: &F, dir: &Path, root: &str, dims: &Dimensions) -> bool {
    match fs.list(dir) {
        Ok(entries) => entries
            .iter()
            .any(|e| !e.is_dir && dims.root_file_name(&e.name) == root),
        Err(_) => false,
    }
}

/// Resolve directory-level derivations along `dir`, walking its path
/// segments relative to `base_dir` left to right.
///
/// At each level the siblings of the original segment are examined; a
/// derived directory is substituted only when its tokens perfectly
/// match the active selectors *and* descending into it with the
/// remaining segments unmodified still leads to a directory holding a
/// file with the sought root name. Among qualifying candidates the
/// highest score wins.
///
/// Returns the substituted path, or `None` when the final path does
/// not exist on disk. A directory along the requested path that cannot
/// be listed is a [`Error::DirectoryRead`].
pub fn best_dir_path<F: DirFs>(
    fs: &F,
    dir: &Path,
    base_dir: &Path,
    file_base_name: &str,
    dims: &Dimensions,
    selectors: &HashSet<String>,
) -> Result<Option<PathBuf>> {
    // a dir outside the base cannot be substituted, only checked
    let Ok(rel) = dir.strip_prefix(base_dir) else {
        return Ok(fs.exists(dir).then(|| dir.to_path_buf()));
    };
    let mut segments: Vec<String> = rel
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();

    let root = dims.root_file_name(file_base_name);

    for i in 0..segments.len() {
        let original = segments[i].clone();
        if original.is_empty() || original == ".." {
            continue;
        }

        let level = join(base_dir, &segments[..i]);
        let entries = fs.list(&level).map_err(|source| Error::DirectoryRead {
            path: level.clone(),
            source,
        })?;

        let mut best_score = 0u64;
        for entry in entries.iter().filter(|e| e.is_dir) {
            let Some(tokens) = dims.derived_tokens(&entry.name, &original, false) else {
                continue;
            };
            let Some(matched) = perfect_match(&tokens, selectors) else {
                continue;
            };

            let candidate_score = score(matched, dims);
            if candidate_score <= best_score {
                continue;
            }

            // commit only if the branch still leads to the target file
            let downstream = join(&level.join(&entry.name), &segments[i + 1..]);
            if contains_root(fs, &downstream, &root, dims) {
                best_score = candidate_score;
                segments[i] = entry.name.clone();
            }
        }
    }

    let resolved = join(base_dir, &segments);
    if !fs.exists(&resolved) {
        return Ok(None);
    }

    if resolved != dir {
        debug!(
            from = %dir.display(),
            to = %resolved.display(),
            "substituted directory path"
        );
    }

    Ok(Some(resolved))
}

/// Find the best-matching sibling of `file_base_name` within `dir`.
///
/// With `filter_dir` set, directory-level derivations are resolved
/// first via [`best_dir_path`]; a vanished directory aborts with
/// `None`. Candidates are files in the resolved directory deriving
/// from `file_base_name`; among perfect matches against the selectors
/// the highest score wins, with ties falling to listing order. When no
/// candidate matches, the plain file is returned if it exists,
/// otherwise `None`.
pub fn find<F: DirFs>(
    fs: &F,
    dir: &Path,
    base_dir: &Path,
    file_base_name: &str,
    dims: &Dimensions,
    selectors: &HashSet<String>,
    filter_dir: bool,
) -> Result<Option<PathBuf>> {
    let dir_path = if filter_dir {
        match best_dir_path(fs, dir, base_dir, file_base_name, dims, selectors)? {
            Some(p) => p,
            None => return Ok(None),
        }
    } else {
        dir.to_path_buf()
    };

    let entries = fs.list(&dir_path).map_err(|source| Error::DirectoryRead {
        path: dir_path.clone(),
        source,
    })?;

    let mut best: Option<(u64, &str)> = None;
    for entry in entries.iter().filter(|e| !e.is_dir) {
        let Some(tokens) = dims.derived_tokens(&entry.name, file_base_name, true) else {
            continue;
        };
        let Some(matched) = perfect_match(&tokens, selectors) else {
            continue;
        };

        let candidate_score = score(matched, dims);
        if best.is_none_or(|(s, _)| candidate_score > s) {
            best = Some((candidate_score, &entry.name));
        }
    }

    if let Some((winner_score, winner)) = best {
        debug!(
            root = file_base_name,
            winner, score = winner_score, "substituted file"
        );
        return Ok(Some(dir_path.join(winner)));
    }

    let plain_exists = entries
        .iter()
        .any(|e| !e.is_dir && e.name == file_base_name);
    if plain_exists {
        Ok(Some(dir_path.join(file_base_name)))
    } else {
        Ok(None)
    }
}
