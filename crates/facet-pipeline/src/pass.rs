use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};

use facet_core::{Dimensions, perfect_match, score};
use facet_resolve::plain_dir;
use tracing::debug;

use crate::error::{Error, Result};
use crate::record::FileRecord;

/// One deduplication pass over a stream of file records.
///
/// The memo lives only as long as the pass; nothing is shared across
/// runs. `ingest` requires `&mut self` and [`FilterPass::finalize`]
/// consumes the pass, so finalize observably runs after every ingest.
pub struct FilterPass {
    base_dir: PathBuf,
    dimensions: Dimensions,
    selectors: HashSet<String>,
    // keyed by plain logical path; BTreeMap keeps emission order stable
    best: BTreeMap<PathBuf, (u64, FileRecord)>,
}

impl FilterPass {
    pub fn new(
        base_dir: impl Into<PathBuf>,
        dimensions: Dimensions,
        selectors: HashSet<String>,
    ) -> Self {
        Self {
            base_dir: base_dir.into(),
            dimensions,
            selectors,
            best: BTreeMap::new(),
        }
    }

    /// Read a file from disk and ingest it.
    pub async fn ingest_path(&mut self, path: &Path) -> Result<()> {
        let contents = tokio::fs::read(path).await.map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;

        self.ingest(FileRecord::new(path, contents));
        Ok(())
    }

    /// Consider one record for its logical key.
    ///
    /// The record's dimensional tokens are collected from every
    /// derived directory component below the base dir plus the file
    /// name itself. A token-free record claims its key only when
    /// nothing claimed it yet; a perfectly matching derived record
    /// claims it when it outscores the current holder.
    pub fn ingest(&mut self, record: FileRecord) {
        let dir = record.path().parent().unwrap_or(self.base_dir.as_path());
        let Some(name) = record.path().file_name().and_then(|n| n.to_str()) else {
            return;
        };
        let name = name.to_string();

        let key = plain_dir(dir, &self.base_dir, &self.dimensions)
            .join(self.dimensions.root_file_name(&name));
        let tokens = self.dimensional_tokens(dir, &name);

        if tokens.is_empty() {
            self.best
                .entry(key)
                .or_insert_with(|| (0, record));
            return;
        }

        if perfect_match(&tokens, &self.selectors).is_none() {
            debug!(path = %record.path().display(), "dropped: tokens not active");
            return;
        }

        let record_score = score(&tokens, &self.dimensions);
        let outscored = match self.best.get(&key) {
            Some((held, _)) => record_score > *held,
            None => true,
        };
        if outscored {
            self.best.insert(key, (record_score, record));
        }
    }

    /// Emit the deduplicated records, paths rewritten to their logical
    /// plain form. Consumes the pass.
    pub fn finalize(self) -> Vec<FileRecord> {
        self.best
            .into_iter()
            .map(|(key, (winner_score, record))| {
                debug!(
                    from = %record.path().display(),
                    to = %key.display(),
                    score = winner_score,
                    "emitting"
                );
                record.with_path(key)
            })
            .collect()
    }

    fn dimensional_tokens(&self, dir: &Path, name: &str) -> Vec<String> {
        let rel = dir.strip_prefix(&self.base_dir).unwrap_or(dir);
        let mut tokens = Vec::new();

        for component in rel.components() {
            let component = component.as_os_str().to_string_lossy();
            tokens.extend(self.dimensions.filtered_tokens(&component, false));
        }
        tokens.extend(self.dimensions.filtered_tokens(name, true));
        tokens
    }
}
