//! Key-value storage primitive
//!
//! Every operation reads or replaces a whole named value.

use crate::error::{MoodlogError, Result};
use std::collections::HashMap;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};
use tracing::{debug, warn};

/// Named whole-value storage
pub trait KeyValueStore {
    /// Read a value; `None` when nothing is stored under `key`
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove the value stored under `key`; missing keys are not an error
    fn remove(&self, key: &str) -> Result<()>;

    /// Run `f` while holding exclusive write access to `key`
    fn with_write_lock<T>(&self, key: &str, f: impl FnOnce() -> Result<T>) -> Result<T> {
        let _ = key;
        f()
    }
}

/// Stores each value as `<key>.json` inside a directory
#[derive(Debug, Clone)]
pub struct FileSystemStore {
    dir: PathBuf,
}

impl FileSystemStore {
    pub fn new(dir: PathBuf) -> Self {
        FileSystemStore { dir }
    }

    /// Path of the file holding `key`
    pub fn value_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    fn lock_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.lock", key))
    }
}

impl KeyValueStore for FileSystemStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.value_path(key);

        match fs::read_to_string(&path) {
            Ok(contents) => {
                debug!(key, path = %path.display(), bytes = contents.len(), "read record");
                Ok(Some(contents))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(key, path = %path.display(), "record absent");
                Ok(None)
            }
            Err(e) => {
                warn!(key, path = %path.display(), error = %e, "failed to read record");
                Err(MoodlogError::Io(e))
            }
        }
    }

    /// Write to a temp file in the same directory, then rename into place
    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.value_path(key);
        fs::create_dir_all(&self.dir)?;

        let mut tmp = tempfile::NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(value.as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.persist(&path).map_err(|e| {
            warn!(key, path = %path.display(), error = %e.error, "failed to replace record");
            MoodlogError::Io(e.error)
        })?;

        debug!(key, path = %path.display(), bytes = value.len(), "wrote record");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.value_path(key);

        match fs::remove_file(&path) {
            Ok(()) => {
                debug!(key, path = %path.display(), "removed record");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => {
                warn!(key, path = %path.display(), error = %e, "failed to remove record");
                Err(MoodlogError::Io(e))
            }
        }
    }

    /// Advisory lock on `<key>.lock`, held across the whole callback
    fn with_write_lock<T>(&self, key: &str, f: impl FnOnce() -> Result<T>) -> Result<T> {
        fs::create_dir_all(&self.dir)?;

        let lock_path = self.lock_path(key);
        let lock_file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(&lock_path)?;
        let mut lock = fd_lock::RwLock::new(lock_file);
        let _guard = lock.write()?;
        debug!(key, path = %lock_path.display(), "acquired write lock");

        f()
    }
}

/// Process-local storage, mostly for tests
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let values = self.values.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut values = self.values.lock().unwrap_or_else(PoisonError::into_inner);
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut values = self.values.lock().unwrap_or_else(PoisonError::into_inner);
        values.remove(key);
        Ok(())
    }
}
