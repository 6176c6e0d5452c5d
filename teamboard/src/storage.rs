//! Storage backends: string-valued, key-addressed, fallible.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use fs2::FileExt;

use crate::error::Result;

/// A string key-value store the board persists into.
///
/// The medium is assumed fallible - quota, permissions, a missing backing
/// directory. Callers decide whether a failure is fatal; the session
/// treats persistence failures as a logged degradation.
pub trait StorageBackend {
    /// Read the value under `key`, or None when the key is absent.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Write `value` under `key`, replacing any previous value.
    fn write(&mut self, key: &str, value: &str) -> Result<()>;
}

/// In-memory backend for tests and throwaway sessions.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// File-backed backend: one `<key>.json` file per key under a root
/// directory.
///
/// Writes hold an exclusive lock on a sibling `.lock` file so two
/// processes sharing the directory cannot interleave partial blobs.
#[derive(Debug)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }

    fn lock_path(&self) -> PathBuf {
        self.root.join(".lock")
    }
}

impl StorageBackend for FileStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.key_path(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.root)?;
        let lock = fs::OpenOptions::new()
            .create(true)
            .write(true)
            .open(self.lock_path())?;
        lock.lock_exclusive()?;
        let written = fs::write(self.key_path(key), value);
        let _ = FileExt::unlock(&lock);
        written?;
        Ok(())
    }
}
