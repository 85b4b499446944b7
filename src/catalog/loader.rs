//! Mirror definition loading from files and directories.
//!
//! The catalog source is a set of JSON mirror definitions: either one record
//! per file (the usual layout, one file per sponsor), a single file holding
//! an array of records, or a directory of such files.

use std::path::Path;

use anyhow::{Context, Result};

use crate::models::MirrorRecord;

/// Loads mirror records from `path`, which may be a single definition file
/// or a directory of definition files.
///
/// # Errors
///
/// Any unreadable or malformed file fails the whole load; a refresh never
/// works from a partially read catalog.
pub async fn load_mirrors(path: &Path) -> Result<Vec<MirrorRecord>> {
    let metadata = tokio::fs::metadata(path)
        .await
        .with_context(|| format!("failed to read mirror source {}", path.display()))?;
    if metadata.is_dir() {
        load_mirror_dir(path).await
    } else {
        load_mirror_file(path).await
    }
}

/// Loads mirror records from a single JSON file.
///
/// The file may hold one definition object or an array of them.
pub async fn load_mirror_file(path: &Path) -> Result<Vec<MirrorRecord>> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("failed to read mirror definition {}", path.display()))?;

    if let Ok(records) = serde_json::from_slice::<Vec<MirrorRecord>>(&bytes) {
        return Ok(records);
    }
    let record = serde_json::from_slice::<MirrorRecord>(&bytes)
        .with_context(|| format!("malformed mirror definition {}", path.display()))?;
    Ok(vec![record])
}

/// Loads every `.json` definition in a directory.
///
/// Files are read in file-name order so the resulting catalog order is
/// deterministic across refreshes.
pub async fn load_mirror_dir(dir: &Path) -> Result<Vec<MirrorRecord>> {
    let mut entries = tokio::fs::read_dir(dir)
        .await
        .with_context(|| format!("failed to read mirror directory {}", dir.display()))?;

    let mut paths = Vec::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .with_context(|| format!("failed to list mirror directory {}", dir.display()))?
    {
        let path = entry.path();
        if path.extension().is_some_and(|ext| ext == "json") {
            paths.push(path);
        }
    }
    paths.sort();

    let mut records = Vec::with_capacity(paths.len());
    for path in &paths {
        records.extend(load_mirror_file(path).await?);
    }
    log::debug!(
        "loaded {} mirror definitions from {}",
        records.len(),
        dir.display()
    );
    Ok(records)
}
