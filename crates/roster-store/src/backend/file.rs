//! Directory-backed key-value store.

use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use super::KeyValueStore;
use crate::error::{PersistenceError, Result};

/// Stores each key as `<dir>/<key>.json`.
///
/// Uses atomic write (temp file + rename) to prevent data corruption
/// on crash or power loss.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File that holds `key`.
    pub fn path_for(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key != "."
            && key != ".."
            && !key.contains(['/', '\\', '\0']);
        if !valid {
            return Err(PersistenceError::InvalidKey {
                key: key.to_string(),
            });
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(contents) => {
                tracing::debug!("Loaded {} from {}", key, path.display());
                Ok(Some(contents))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(PersistenceError::Io {
                operation: "read",
                path,
                source: e,
            }),
        }
    }

    fn save(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        let temp_path = path.with_extension("json.tmp");

        fs::create_dir_all(&self.dir).map_err(|e| PersistenceError::Io {
            operation: "create directory",
            path: self.dir.clone(),
            source: e,
        })?;

        let mut file = File::create(&temp_path).map_err(|e| PersistenceError::Io {
            operation: "create",
            path: temp_path.clone(),
            source: e,
        })?;

        file.write_all(value.as_bytes())
            .map_err(|e| PersistenceError::Io {
                operation: "write",
                path: temp_path.clone(),
                source: e,
            })?;

        file.sync_all().map_err(|e| PersistenceError::Io {
            operation: "sync",
            path: temp_path.clone(),
            source: e,
        })?;

        fs::rename(&temp_path, &path).map_err(|e| PersistenceError::AtomicWriteFailed {
            temp_path: temp_path.clone(),
            target_path: path.clone(),
            source: e,
        })?;

        tracing::debug!("Saved {} to {}", key, path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_key_loads_as_none() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path());
        assert_eq!(store.load("candidates").unwrap(), None);
    }

    #[test]
    fn test_save_creates_directory_and_file() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("nested").join("data"));

        store.save("candidates", "[]").unwrap();

        let path = store.path_for("candidates").unwrap();
        assert!(path.exists());
        assert!(!path.with_extension("json.tmp").exists());
        assert_eq!(store.load("candidates").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_rejects_path_like_keys() {
        let store = FileStore::new("/tmp");
        assert!(matches!(
            store.path_for("../etc"),
            Err(PersistenceError::InvalidKey { .. })
        ));
        assert!(matches!(
            store.path_for(""),
            Err(PersistenceError::InvalidKey { .. })
        ));
    }

    #[test]
    fn test_save_into_file_path_fails() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, b"not a directory").unwrap();
        let mut store = FileStore::new(&blocker);

        let result = store.save("candidates", "[]");
        assert!(matches!(result, Err(PersistenceError::Io { .. })));
    }
}
