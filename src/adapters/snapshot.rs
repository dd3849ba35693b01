//! JSON file snapshot store.
//!
//! Persists the full [`ThermostatStatus`] to a single JSON file after
//! every tick and override change.  Writes go through a temp file and an
//! atomic rename so a power cut mid-write can never leave a truncated
//! snapshot behind.
//!
//! A missing or malformed file on load is an expected condition (first
//! boot, schema change): the caller substitutes defaults.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::app::ports::{SnapshotError, SnapshotStore};
use crate::status::ThermostatStatus;

pub struct JsonSnapshotStore {
    path: PathBuf,
}

impl JsonSnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        let mut p = self.path.clone().into_os_string();
        p.push(".tmp");
        PathBuf::from(p)
    }
}

impl SnapshotStore for JsonSnapshotStore {
    fn load(&self) -> Result<ThermostatStatus, SnapshotError> {
        let text = fs::read_to_string(&self.path).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                SnapshotError::NotFound
            } else {
                SnapshotError::IoError
            }
        })?;
        serde_json::from_str(&text).map_err(|_| SnapshotError::Malformed)
    }

    fn save(&self, status: &ThermostatStatus) -> Result<(), SnapshotError> {
        let json = serde_json::to_string(status).map_err(|_| SnapshotError::IoError)?;
        let tmp = self.tmp_path();
        fs::write(&tmp, json).map_err(|_| SnapshotError::IoError)?;
        fs::rename(&tmp, &self.path).map_err(|_| SnapshotError::IoError)?;
        Ok(())
    }
}
