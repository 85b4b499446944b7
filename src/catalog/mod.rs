//! The in-memory mirror catalog.
//!
//! This module provides:
//! - [`MirrorCatalog`]: the single-writer, many-reader snapshot store
//! - [`Snapshot`]: an immutable, point-in-time view of all known mirrors
//! - Loading of mirror definition files ([`load_mirrors`])
//!
//! Refreshes are all-or-nothing: a batch that fails validation is rejected
//! wholesale and the previously published snapshot stays active. Readers
//! clone an `Arc` to the current snapshot, so a selection in flight is never
//! affected by a concurrent refresh.

mod loader;

pub use loader::{load_mirror_dir, load_mirror_file, load_mirrors};

use std::collections::HashSet;
use std::sync::{Arc, PoisonError, RwLock};

use chrono::{DateTime, Utc};

use crate::error_handling::CatalogError;
use crate::models::MirrorRecord;

/// An immutable, point-in-time view of all known mirror records.
///
/// Cloning a snapshot is cheap (an `Arc` clone); the record sequence behind
/// it is never mutated after publication.
#[derive(Debug, Clone)]
pub struct Snapshot {
    records: Arc<Vec<MirrorRecord>>,
    published_at: DateTime<Utc>,
}

impl Snapshot {
    fn empty() -> Self {
        Snapshot {
            records: Arc::new(Vec::new()),
            published_at: Utc::now(),
        }
    }

    /// The records of this snapshot, in catalog order.
    pub fn records(&self) -> &[MirrorRecord] {
        &self.records
    }

    /// Number of records in the snapshot.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the snapshot holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// When this snapshot was published.
    pub fn published_at(&self) -> DateTime<Utc> {
        self.published_at
    }
}

/// Holds the current set of known mirrors and hands out consistent read
/// snapshots to selection requests.
///
/// The catalog performs no I/O; feeding it freshly loaded records is the
/// ingestion job's (or the CLI's) concern.
#[derive(Debug)]
pub struct MirrorCatalog {
    current: RwLock<Snapshot>,
}

impl MirrorCatalog {
    /// Creates a catalog with an empty snapshot.
    pub fn new() -> Self {
        MirrorCatalog {
            current: RwLock::new(Snapshot::empty()),
        }
    }

    /// Validates `records` and atomically publishes them as the new snapshot.
    ///
    /// Returns the number of published records.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidRecord`] if any record lacks an
    /// address, lacks a country code, or duplicates another hostname in the
    /// batch. On error the previous snapshot stays active; there is no
    /// partial replacement.
    pub fn refresh(&self, records: Vec<MirrorRecord>) -> Result<usize, CatalogError> {
        validate_batch(&records)?;

        let snapshot = Snapshot {
            records: Arc::new(records),
            published_at: Utc::now(),
        };
        let count = snapshot.len();

        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        *current = snapshot;
        drop(current);

        log::info!("published mirror catalog snapshot with {count} mirrors");
        Ok(count)
    }

    /// The currently active snapshot.
    ///
    /// A cheap, race-free read: whichever snapshot was last successfully
    /// published, in full.
    pub fn snapshot(&self) -> Snapshot {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Default for MirrorCatalog {
    fn default() -> Self {
        Self::new()
    }
}

fn validate_batch(records: &[MirrorRecord]) -> Result<(), CatalogError> {
    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        if record.addresses.is_empty() {
            return Err(CatalogError::InvalidRecord {
                hostname: record.hostname.clone(),
                reason: "no https, http, or rsync address",
            });
        }
        if record.country.trim().is_empty() {
            return Err(CatalogError::InvalidRecord {
                hostname: record.hostname.clone(),
                reason: "missing country code",
            });
        }
        if !seen.insert(record.hostname.as_str()) {
            return Err(CatalogError::InvalidRecord {
                hostname: record.hostname.clone(),
                reason: "duplicate hostname in batch",
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
