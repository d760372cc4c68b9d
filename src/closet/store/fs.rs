use super::{Snapshot, SnapshotStore};
use crate::error::{ClosetError, Result};
use crate::model::Garment;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_SNAPSHOT_FILE: &str = "closet.json";

pub struct FileStore {
    root: PathBuf,
    snapshot_file: String,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            snapshot_file: DEFAULT_SNAPSHOT_FILE.to_string(),
        }
    }

    pub fn with_snapshot_file(mut self, name: &str) -> Self {
        self.snapshot_file = name.to_string();
        self
    }

    pub fn snapshot_path(&self) -> PathBuf {
        self.root.join(&self.snapshot_file)
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(ClosetError::Io)?;
        }
        Ok(())
    }
}

impl SnapshotStore for FileStore {
    fn load(&self) -> Result<Vec<Garment>> {
        let path = self.snapshot_path();
        if !path.exists() {
            tracing::info!(path = %path.display(), "no snapshot yet");
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&path).map_err(ClosetError::Io)?;
        let snapshot: Snapshot =
            serde_json::from_str(&content).map_err(ClosetError::Serialization)?;
        Ok(snapshot.garments)
    }

    fn save(&mut self, garments: &[Garment]) -> Result<()> {
        self.ensure_dir(&self.root)?;

        let snapshot = Snapshot::new(garments.to_vec());
        let content =
            serde_json::to_string_pretty(&snapshot).map_err(ClosetError::Serialization)?;

        // Write next to the target, then rename over it.
        let path = self.snapshot_path();
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, content).map_err(ClosetError::Io)?;
        if let Err(e) = fs::rename(&tmp, &path) {
            let _ = fs::remove_file(&tmp);
            return Err(ClosetError::Io(e));
        }

        tracing::info!(count = garments.len(), path = %path.display(), "saved garments");
        Ok(())
    }
}
