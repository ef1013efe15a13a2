// * Index Builder: rebuilds index.json wholesale from whatever unit
// * directories are durably on disk. Never consults in-memory run state, so
// * a partial or historical store still yields a correct index.

use std::path::Path;

use tracing::{debug, warn};

use crate::config::constants::{DATA_FILENAME, INDEX_FILENAME, LIST_PATH, PORTRAIT_FILENAME};
use crate::persistence::schema::{IndexEntry, UnitRecord};
use crate::persistence::store::StoreError;

// * Scans the store root, projects every readable data.json to an entry,
// * and writes the aggregate index. Unreadable or malformed directories are
// * skipped, not fatal.
pub async fn rebuild_index(root: &Path) -> Result<Vec<IndexEntry>, StoreError> {
    let mut dir_names: Vec<String> = Vec::new();
    let mut read_dir = tokio::fs::read_dir(root).await?;

    while let Some(entry) = read_dir.next_entry().await? {
        if entry.file_type().await?.is_dir() {
            dir_names.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    dir_names.sort();

    let mut entries: Vec<IndexEntry> = Vec::new();

    for dir_name in dir_names {
        let data_path = root.join(&dir_name).join(DATA_FILENAME);

        let raw = match tokio::fs::read_to_string(&data_path).await {
            Ok(raw) => raw,
            Err(_) => {
                debug!(dir = %dir_name, "No readable data file, skipping");
                continue;
            }
        };

        let record: UnitRecord = match serde_json::from_str(&raw) {
            Ok(record) => record,
            Err(e) => {
                warn!(dir = %dir_name, error = %e, "Malformed data file, skipping");
                continue;
            }
        };

        let asset_path = format!("{}{}/{}", LIST_PATH, dir_name, PORTRAIT_FILENAME);
        entries.push(IndexEntry::from_record(&dir_name, &record, asset_path));
    }

    let json = serde_json::to_string_pretty(&entries)?;
    tokio::fs::write(root.join(INDEX_FILENAME), json).await?;

    Ok(entries)
}
