// * Entity store: one directory per unit slug holding data.json and
// * portrait.png. Writes are idempotent: existing files are left alone
// * unless force is set, except that a missing portrait is always retried
// * even when data.json is already present.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::warn;

use crate::config::constants::{DATA_FILENAME, PORTRAIT_FILENAME};
use crate::network::Fetch;
use crate::persistence::schema::UnitRecord;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Record serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

// * Outcome of the structured-data write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataOutcome {
    Written,
    AlreadyPresent,
}

// * Outcome of the portrait download. Failed is a degraded success at the
// * record level, not an error.
#[derive(Debug, Clone, PartialEq)]
pub enum AssetOutcome {
    Saved(u64),
    AlreadyPresent,
    NoUrl,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct StoreOutcome {
    pub dir: PathBuf,
    pub data: DataOutcome,
    pub asset: AssetOutcome,
}

pub struct UnitStore {
    root: PathBuf,
}

impl UnitStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub async fn ensure_root(&self) -> Result<(), StoreError> {
        tokio::fs::create_dir_all(&self.root).await?;
        Ok(())
    }

    // * Persists one record. A data-file write failure is an error; a
    // * portrait failure degrades to AssetOutcome::Failed.
    pub async fn persist<F: Fetch>(
        &self,
        record: &UnitRecord,
        fetcher: &F,
        force: bool,
    ) -> Result<StoreOutcome, StoreError> {
        let dir = self.root.join(&record.id);
        tokio::fs::create_dir_all(&dir).await?;

        let data_path = dir.join(DATA_FILENAME);
        let data = if force || !data_path.exists() {
            let json = record.to_json_pretty()?;
            tokio::fs::write(&data_path, json).await?;
            DataOutcome::Written
        } else {
            DataOutcome::AlreadyPresent
        };

        let asset = self.save_portrait(record, fetcher, &dir, force).await;

        Ok(StoreOutcome { dir, data, asset })
    }

    async fn save_portrait<F: Fetch>(
        &self,
        record: &UnitRecord,
        fetcher: &F,
        dir: &Path,
        force: bool,
    ) -> AssetOutcome {
        let Some(url) = record.portrait.as_deref() else {
            return AssetOutcome::NoUrl;
        };

        let portrait_path = dir.join(PORTRAIT_FILENAME);
        if portrait_path.exists() && !force {
            return AssetOutcome::AlreadyPresent;
        }

        match fetcher.download_to(url, &portrait_path).await {
            Ok(bytes) => AssetOutcome::Saved(bytes),
            Err(e) => {
                // * Drop any partial file so the next run retries cleanly.
                if let Err(rm) = tokio::fs::remove_file(&portrait_path).await {
                    if rm.kind() != std::io::ErrorKind::NotFound {
                        warn!(path = %portrait_path.display(), error = %rm, "Could not remove partial portrait");
                    }
                }
                AssetOutcome::Failed(e.to_string())
            }
        }
    }
}
