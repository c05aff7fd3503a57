//! File-backed storage.
//!
//! Each key is one file, `<data_dir>/<key>.json`. The directory is created
//! on first write, so opening a store against a fresh path just finds
//! nothing saved yet.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::KeyValueStorage;
use crate::error::{StoreError, StoreResult};

/// Storage rooted at a data directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    data_dir: PathBuf,
}

impl FileStorage {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        FileStorage {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Path of the file backing `key`.
    ///
    /// Keys are restricted to letters, digits, `-`, `_` and `.` (not leading)
    /// so a key can never point outside the data directory.
    pub fn path_for(&self, key: &str) -> StoreResult<PathBuf> {
        let valid = !key.is_empty()
            && !key.starts_with('.')
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));

        if !valid {
            return Err(StoreError::unavailable(format!(
                "invalid storage key: {key:?}"
            )));
        }

        Ok(self.data_dir.join(format!("{key}.json")))
    }
}

impl KeyValueStorage for FileStorage {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>> {
        let path = self.path_for(key)?;

        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set_item(&mut self, key: &str, value: &str) -> StoreResult<()> {
        let path = self.path_for(key)?;

        fs::create_dir_all(&self.data_dir)?;
        fs::write(&path, value)?;

        debug!(path = %path.display(), bytes = value.len(), "Wrote storage slot");
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> StoreResult<()> {
        let path = self.path_for(key)?;

        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
