use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::pass::FilterPass;

/// Feed every file under `root` into the pass, depth-first.
pub async fn ingest_tree(pass: &mut FilterPass, root: &Path) -> Result<()> {
    let mut pending: Vec<PathBuf> = vec![root.to_path_buf()];

    while let Some(dir) = pending.pop() {
        let mut entries = tokio::fs::read_dir(&dir)
            .await
            .map_err(|source| Error::Walk {
                path: dir.clone(),
                source,
            })?;

        loop {
            let entry = entries.next_entry().await.map_err(|source| Error::Walk {
                path: dir.clone(),
                source,
            })?;
            let Some(entry) = entry else { break };

            let path = entry.path();
            let file_type = entry.file_type().await.map_err(|source| Error::Walk {
                path: path.clone(),
                source,
            })?;

            if file_type.is_dir() {
                pending.push(path);
            } else if file_type.is_file() {
                pass.ingest_path(&path).await?;
            }
        }
    }

    Ok(())
}
