use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};
use crate::record::FileRecord;

/// Write finalized records under `out_dir`, preserving their structure
/// relative to `base_dir`.
pub async fn write_records(
    records: &[FileRecord],
    base_dir: &Path,
    out_dir: &Path,
) -> Result<usize> {
    let mut written = 0;

    for record in records {
        let rel = record.path().strip_prefix(base_dir).unwrap_or(record.path());
        let target = out_dir.join(rel);

        if let Some(parent) = target.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|source| Error::Write {
                    path: parent.to_path_buf(),
                    source,
                })?;
        }

        tokio::fs::write(&target, record.contents())
            .await
            .map_err(|source| Error::Write {
                path: target.clone(),
                source,
            })?;

        debug!(path = %target.display(), "wrote");
        written += 1;
    }

    Ok(written)
}
