// PlacePrep - platform/fs.rs
//
// File-backed implementation of `StorageBackend`.
//
// Design:
// - One JSON file per key inside the data directory.
// - Writes are atomic (write temp file, then rename) so a crash during a
//   write never corrupts the previous good value.
// - The data directory is created on first write; no user action required.

use crate::platform::storage::StorageBackend;
use crate::util::constants::STORAGE_FILE_EXTENSION;
use crate::util::error::StorageError;
use std::io;
use std::path::{Path, PathBuf};

/// Stores each key as `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the file holding `key`.
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir
            .join(sanitize_key(key))
            .with_extension(STORAGE_FILE_EXTENSION)
    }
}

/// Keys become file names; anything outside `[A-Za-z0-9_-]` is replaced so a
/// key can never escape the data directory.
fn sanitize_key(key: &str) -> String {
    key.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

impl StorageBackend for FileBackend {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key);
        match std::fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Io {
                key: key.to_string(),
                path,
                source: e,
            }),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key);
        let io_err = |path: &Path, source: io::Error| StorageError::Io {
            key: key.to_string(),
            path: path.to_path_buf(),
            source,
        };

        std::fs::create_dir_all(&self.dir).map_err(|e| io_err(&self.dir, e))?;

        let tmp = path.with_extension(format!("{STORAGE_FILE_EXTENSION}.tmp"));
        std::fs::write(&tmp, value.as_bytes()).map_err(|e| io_err(&tmp, e))?;

        std::fs::rename(&tmp, &path).map_err(|e| {
            let _ = std::fs::remove_file(&tmp);
            io_err(&path, e)
        })?;

        tracing::debug!(key, path = %path.display(), bytes = value.len(), "Stored value written");
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key);
        match std::fs::remove_file(&path) {
            Ok(()) => {
                tracing::debug!(key, path = %path.display(), "Stored value removed");
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::Io {
                key: key.to_string(),
                path,
                source: e,
            }),
        }
    }
}
