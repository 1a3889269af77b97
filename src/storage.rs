//! Key-value persistence for game state
//!
//! Each key maps to one JSON file under the data directory. The whole blob
//! is loaded at startup and overwritten on every mutation. Writes are atomic
//! (temp file + rename) and serialized through an exclusive lock file so a
//! crash mid-write never leaves a torn blob behind.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Key for the serialized game state blob.
pub const STATE_KEY: &str = "game-storage";

/// Key for the registered user profile.
pub const PROFILE_KEY: &str = "user-profile";

/// Error type for storage operations
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to (de)serialize stored value: {0}")]
    Json(#[from] serde_json::Error),
}

/// File-backed key-value store rooted at a data directory.
#[derive(Debug, Clone)]
pub struct Storage {
    dir: PathBuf,
}

impl Storage {
    /// Get the default data directory path (~/.gambit/)
    pub fn default_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".gambit")
    }

    /// Open the store at the default location, creating the directory if needed.
    pub fn open_default() -> Result<Self, StorageError> {
        Self::open(&Self::default_dir())
    }

    /// Open the store at a specific directory, creating it if needed.
    pub fn open(dir: &Path) -> Result<Self, StorageError> {
        std::fs::create_dir_all(dir)?;
        Ok(Self {
            dir: dir.to_path_buf(),
        })
    }

    /// Path of the JSON file backing a key.
    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    /// Load the value stored under `key`. Returns `None` when the key has
    /// never been written.
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&path)?;
        Ok(Some(serde_json::from_str(&content)?))
    }

    /// Overwrite the value stored under `key`.
    ///
    /// Takes an exclusive lock, writes to a temp file, syncs, then renames
    /// over the target so readers never observe a partial write.
    pub fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let path = self.key_path(key);
        let content = serde_json::to_string_pretty(value)?;

        // Lock file kept separate from the blob to avoid issues with rename
        let lock_path = path.with_extension("json.lock");
        let lock_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&lock_path)?;
        lock_file.lock_exclusive()?;

        let temp_path = path.with_extension("json.tmp");
        let mut temp_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_path)?;
        temp_file.write_all(content.as_bytes())?;
        temp_file.sync_all()?;

        std::fs::rename(&temp_path, &path)?;

        // Lock is released when lock_file is dropped
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::tempdir;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Blob {
        coins: u32,
        name: String,
    }

    #[test]
    fn test_missing_key_is_none() {
        let dir = tempdir().unwrap();
        let storage = Storage::open(dir.path()).unwrap();
        let loaded: Option<Blob> = storage.load("game-storage").unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = tempdir().unwrap();
        let storage = Storage::open(dir.path()).unwrap();

        let blob = Blob {
            coins: 1000,
            name: "magnus".to_string(),
        };
        storage.save("game-storage", &blob).unwrap();

        let loaded: Blob = storage.load("game-storage").unwrap().unwrap();
        assert_eq!(loaded, blob);
    }

    #[test]
    fn test_save_overwrites_previous_value() {
        let dir = tempdir().unwrap();
        let storage = Storage::open(dir.path()).unwrap();

        storage
            .save(
                "game-storage",
                &Blob {
                    coins: 1,
                    name: "a".into(),
                },
            )
            .unwrap();
        storage
            .save(
                "game-storage",
                &Blob {
                    coins: 2,
                    name: "b".into(),
                },
            )
            .unwrap();

        let loaded: Blob = storage.load("game-storage").unwrap().unwrap();
        assert_eq!(loaded.coins, 2);
    }
}
