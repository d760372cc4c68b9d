//! # Snapshot Storage
//!
//! The wardrobe lives in memory while a session runs. Persistence is a load/save
//! boundary: the whole collection is read once at startup and written once when
//! the session ends normally. The [`SnapshotStore`] trait keeps that boundary
//! swappable.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: a single JSON snapshot file in the data directory
//! - [`memory::InMemoryStore`]: keeps the last snapshot in memory, for tests
//!
//! ## Storage Format
//!
//! ```text
//! <data-dir>/
//! ├── closet.json    # { "saved_at": ..., "garments": [...] }
//! └── config.json    # ClosetConfig
//! ```
//!
//! A missing or malformed snapshot never aborts a session, see [`load_or_empty`].

use crate::error::{ClosetError, Result};
use crate::model::Garment;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod fs;
pub mod memory;

/// On-disk document holding the full collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub saved_at: DateTime<Utc>,
    pub garments: Vec<Garment>,
}

impl Snapshot {
    pub fn new(garments: Vec<Garment>) -> Self {
        Self {
            saved_at: Utc::now(),
            garments,
        }
    }
}

pub trait SnapshotStore {
    /// Read the whole collection. A store with nothing saved yet returns an empty list.
    fn load(&self) -> Result<Vec<Garment>>;

    /// Replace the saved collection with `garments`.
    fn save(&mut self, garments: &[Garment]) -> Result<()>;
}

/// Result of [`load_or_empty`]: the collection plus a warning when loading degraded.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub garments: Vec<Garment>,
    pub warning: Option<String>,
}

/// Loads the collection, degrading to an empty one on any failure.
pub fn load_or_empty<S: SnapshotStore>(store: &S) -> LoadReport {
    match store.load() {
        Ok(garments) => {
            tracing::info!(count = garments.len(), "loaded garments");
            LoadReport {
                garments,
                warning: None,
            }
        }
        Err(err) => {
            let warning = match &err {
                ClosetError::Serialization(_) => {
                    format!("Saved wardrobe is malformed, starting empty ({})", err)
                }
                _ => format!("Could not load saved wardrobe, starting empty ({})", err),
            };
            tracing::warn!(error = %err, "snapshot load failed");
            LoadReport {
                garments: Vec::new(),
                warning: Some(warning),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::sample_wardrobe;
    use crate::store::memory::InMemoryStore;

    struct BrokenStore;

    impl SnapshotStore for BrokenStore {
        fn load(&self) -> Result<Vec<Garment>> {
            Err(ClosetError::Store("disk on fire".into()))
        }

        fn save(&mut self, _garments: &[Garment]) -> Result<()> {
            Err(ClosetError::Store("disk on fire".into()))
        }
    }

    #[test]
    fn load_or_empty_passes_through_garments() {
        let store = InMemoryStore::with_garments(sample_wardrobe());
        let report = load_or_empty(&store);
        assert_eq!(report.garments.len(), 4);
        assert!(report.warning.is_none());
    }

    #[test]
    fn load_or_empty_degrades_on_failure() {
        let report = load_or_empty(&BrokenStore);
        assert!(report.garments.is_empty());
        assert!(report.warning.unwrap().contains("disk on fire"));
    }
}
