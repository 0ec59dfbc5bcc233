//! Snapshot file: one JSON document holding the whole application state.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::todo::TodoState;

/// Errors that can occur when reading or writing the snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("Failed to read snapshot '{}': {source}", path.display())]
    ReadError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse snapshot '{}': {source}", path.display())]
    ParseError {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write snapshot '{}': {source}", path.display())]
    WriteError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to serialize state: {source}")]
    SerializeError {
        #[source]
        source: serde_json::Error,
    },
}

/// Location of the persisted state, plus read/write of it.
///
/// The file holds the serialized [`TodoState`] as pretty-printed JSON and is
/// replaced wholesale on every save (write to a temp file in the same
/// directory, then rename over the old snapshot).
#[derive(Debug, Clone)]
pub struct SnapshotFile {
    path: PathBuf,
}

impl SnapshotFile {
    /// Use the given file as the snapshot location.
    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }

    /// Returns the default snapshot path.
    ///
    /// Uses `~/.local/share/ticklist/state.json` on Linux, or the platform
    /// equivalent via `dirs::data_dir()`. Falls back to the current
    /// directory if the data dir is unavailable.
    pub fn default_path() -> PathBuf {
        let data_dir = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        data_dir.join("ticklist").join("state.json")
    }

    /// The snapshot file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the snapshot if one exists.
    ///
    /// `Ok(None)` means no snapshot has been written yet (first run).
    pub fn load(&self) -> Result<Option<TodoState>, SnapshotError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path).map_err(|e| SnapshotError::ReadError {
            path: self.path.clone(),
            source: e,
        })?;

        let state = serde_json::from_str(&content).map_err(|e| SnapshotError::ParseError {
            path: self.path.clone(),
            source: e,
        })?;

        Ok(Some(state))
    }

    /// Write `state` as the new snapshot, replacing any previous one.
    pub fn save(&self, state: &TodoState) -> Result<(), SnapshotError> {
        let json = serde_json::to_string_pretty(state)
            .map_err(|e| SnapshotError::SerializeError { source: e })?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| SnapshotError::WriteError {
                path: self.path.clone(),
                source: e,
            })?;
        }

        // Write-then-rename so a crash mid-write cannot truncate the
        // previous snapshot.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(|e| SnapshotError::WriteError {
            path: tmp.clone(),
            source: e,
        })?;
        fs::rename(&tmp, &self.path).map_err(|e| SnapshotError::WriteError {
            path: self.path.clone(),
            source: e,
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::todo::TodoItem;
    use tempfile::TempDir;

    fn sample_state() -> TodoState {
        TodoState {
            items: vec![TodoItem {
                id: 1,
                text: "Buy milk".to_string(),
                done: false,
            }],
            draft: "next".to_string(),
        }
    }

    #[test]
    fn load_without_file_returns_none() {
        let dir = TempDir::new().unwrap();
        let snapshot = SnapshotFile::at(dir.path().join("state.json"));
        assert!(snapshot.load().unwrap().is_none());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let snapshot = SnapshotFile::at(dir.path().join("state.json"));

        let state = sample_state();
        snapshot.save(&state).unwrap();

        assert_eq!(snapshot.load().unwrap(), Some(state));
    }

    #[test]
    fn save_creates_missing_parent_directories() {
        let dir = TempDir::new().unwrap();
        let snapshot = SnapshotFile::at(dir.path().join("nested").join("deep").join("state.json"));

        snapshot.save(&sample_state()).unwrap();
        assert!(snapshot.path().exists());
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("state.json");
        std::fs::write(&path, "{ not json").unwrap();

        let snapshot = SnapshotFile::at(path);
        assert!(matches!(
            snapshot.load(),
            Err(SnapshotError::ParseError { .. })
        ));
    }

    #[test]
    fn save_leaves_no_temp_file_behind() {
        let dir = TempDir::new().unwrap();
        let snapshot = SnapshotFile::at(dir.path().join("state.json"));
        snapshot.save(&sample_state()).unwrap();

        let entries: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec![std::ffi::OsString::from("state.json")]);
    }
}
