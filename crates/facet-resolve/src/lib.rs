//! Dimensional file and directory resolution.
//!
//! Given a logical path like `files/config.json` and a set of active
//! selectors like `{prod, ios}`, the resolver locates the most
//! specific sibling present on disk (`config-prod-ios.json`,
//! `config-prod.json`, …), optionally swapping whole derived
//! directories (`assets-ios/`) into the path first. It falls back to
//! the plain file when no specialization perfectly matches, and
//! reports `None` when neither exists.
//!
//! All I/O goes through the [`DirFs`] trait; the engine itself is
//! read-only and safe to call concurrently.

pub use self::effects::{DirEntry, DirFs, OsDirFs};
pub use self::engine::{best_dir_path, find};
pub use self::error::{Error, Result};
pub use self::path::{is_relative, plain_dir};

mod effects;
mod engine;
mod error;
mod path;

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use facet_core::Dimensions;

/// Immutable configuration for one resolution pass: the declared
/// dimensions, the currently active selectors, and whether
/// directory-level substitution is enabled.
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    pub dimensions: Dimensions,
    pub selectors: HashSet<String>,
    pub filter_dir: bool,
}

impl ResolverConfig {
    pub fn new(dimensions: Dimensions, selectors: HashSet<String>) -> Self {
        Self {
            dimensions,
            selectors,
            filter_dir: false,
        }
    }

    pub fn filter_dir(mut self, enabled: bool) -> Self {
        self.filter_dir = enabled;
        self
    }
}

/// Resolution front-end binding a configuration, a base directory and
/// a directory-listing provider.
///
/// The configuration is taken by value and never mutated, so separate
/// resolvers with different dimension lists can run concurrently.
pub struct Resolver<F = OsDirFs> {
    config: ResolverConfig,
    base_dir: PathBuf,
    fs: F,
}

impl Resolver<OsDirFs> {
    pub fn new(base_dir: impl Into<PathBuf>, config: ResolverConfig) -> Self {
        Self::with_fs(base_dir, config, OsDirFs)
    }
}

impl<F: DirFs> Resolver<F> {
    pub fn with_fs(base_dir: impl Into<PathBuf>, config: ResolverConfig, fs: F) -> Self {
        Self {
            config,
            base_dir: base_dir.into(),
            fs,
        }
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Resolve a logical path (absolute, or relative to the base
    /// directory) to the most specific concrete file, `None` when
    /// neither a plain file nor a perfectly matching variant exists.
    pub fn resolve(&self, logical: &Path) -> Result<Option<PathBuf>> {
        let abs = if logical.is_absolute() {
            logical.to_path_buf()
        } else {
            self.base_dir.join(logical)
        };

        let dir = abs.parent().unwrap_or(self.base_dir.as_path());
        let name = abs
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        find(
            &self.fs,
            dir,
            &self.base_dir,
            &name,
            &self.config.dimensions,
            &self.config.selectors,
            self.config.filter_dir,
        )
    }

    /// The logical key `path` deduplicates under: every derived
    /// directory component and the file name rewritten to their roots.
    pub fn plain_path(&self, path: &Path) -> PathBuf {
        let dir = path.parent().unwrap_or(self.base_dir.as_path());
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        plain_dir(dir, &self.base_dir, &self.config.dimensions)
            .join(self.config.dimensions.root_file_name(&name))
    }
}
