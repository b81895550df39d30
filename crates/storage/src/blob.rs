//! Named key-value blobs: the durable backing of the observation store.

use std::collections::HashMap;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::error::StorageError;

/// Whole-value reads and writes of named blobs.
pub trait BlobStore {
    /// Returns the blob, or `None` if it was never written.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replaces the blob. Readers see either the old or the new value, never a mix.
    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Deletes the blob. Returns `false` if there was nothing to delete.
    fn remove(&mut self, key: &str) -> Result<bool, StorageError>;

    /// Moves the blob under a new key, replacing any blob already there.
    /// Returns `false` if `from` did not exist.
    fn rename(&mut self, from: &str, to: &str) -> Result<bool, StorageError>;
}

impl<B: BlobStore + ?Sized> BlobStore for &mut B {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).read(key)
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).write(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<bool, StorageError> {
        (**self).remove(key)
    }

    fn rename(&mut self, from: &str, to: &str) -> Result<bool, StorageError> {
        (**self).rename(from, to)
    }
}

/// One `<key>.json` file per blob inside a data directory.
#[derive(Debug, Clone)]
pub struct FileBlobStore {
    dir: PathBuf,
}

impl FileBlobStore {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        if key.is_empty() || key.contains(['/', '\\']) || key.starts_with('.') {
            return Err(StorageError::InvalidInput(format!("unusable blob key: {key:?}")));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl BlobStore for FileBlobStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.dir)?;

        // Temp file in the same directory so the final rename stays on one filesystem.
        let mut temp_file = NamedTempFile::new_in(&self.dir)?;
        temp_file.write_all(value.as_bytes())?;
        temp_file.as_file().sync_all()?;
        temp_file.persist(&path)?;

        tracing::trace!(path = %path.display(), bytes = value.len(), "blob written");
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<bool, StorageError> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    fn rename(&mut self, from: &str, to: &str) -> Result<bool, StorageError> {
        let (from_path, to_path) = (self.path_for(from)?, self.path_for(to)?);
        match fs::rename(&from_path, &to_path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}

/// Process-local blobs for tests and ephemeral sessions.
#[derive(Debug, Clone, Default)]
pub struct MemoryBlobStore {
    blobs: HashMap<String, String>,
}

impl MemoryBlobStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.blobs.keys().map(String::as_str)
    }
}

impl BlobStore for MemoryBlobStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.blobs.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.blobs.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<bool, StorageError> {
        Ok(self.blobs.remove(key).is_some())
    }

    fn rename(&mut self, from: &str, to: &str) -> Result<bool, StorageError> {
        let Some(value) = self.blobs.remove(from) else {
            return Ok(false);
        };
        self.blobs.insert(to.to_owned(), value);
        Ok(true)
    }
}
