//! Snapshot storage backends.
//!
//! A backend is an opaque key-value byte store addressed by [`ScopeKey`].
//! Writes replace the whole blob for a scope in one step, so a reader never
//! observes a partially written snapshot.

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use super::ScopeKey;

/// Durable storage for serialized snapshots.
pub trait SnapshotBackend: Send + Sync {
    /// Read the stored blob for a scope, if any.
    fn read(&self, scope: &ScopeKey) -> Result<Option<Vec<u8>>>;

    /// Replace the stored blob for a scope.
    fn write(&self, scope: &ScopeKey, bytes: &[u8]) -> Result<()>;

    /// Short label for logs.
    fn describe(&self) -> String;
}

impl<B> SnapshotBackend for Arc<B>
where
    B: SnapshotBackend + ?Sized,
{
    fn read(&self, scope: &ScopeKey) -> Result<Option<Vec<u8>>> {
        (**self).read(scope)
    }

    fn write(&self, scope: &ScopeKey, bytes: &[u8]) -> Result<()> {
        (**self).write(scope, bytes)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

/// Stores one JSON file per scope under a root directory.
#[derive(Debug, Clone)]
pub struct FileBackend {
    root: PathBuf,
}

impl FileBackend {
    /// Create a backend rooted at `root`. The directory is created lazily.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Get the root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get the snapshot file path for a scope.
    pub fn snapshot_path(&self, scope: &ScopeKey) -> PathBuf {
        self.root.join(format!("{}.json", scope.storage_name()))
    }

    fn ensure_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.root)
            .with_context(|| format!("Failed to create favorites directory {:?}", self.root))
    }
}

impl SnapshotBackend for FileBackend {
    fn read(&self, scope: &ScopeKey) -> Result<Option<Vec<u8>>> {
        let path = self.snapshot_path(scope);
        match fs::read(&path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| format!("Failed to read {:?}", path)),
        }
    }

    /// Atomic write: write to a temp file, then rename over the snapshot.
    fn write(&self, scope: &ScopeKey, bytes: &[u8]) -> Result<()> {
        self.ensure_dir()?;

        let path = self.snapshot_path(scope);
        let temp_path = path.with_extension("json.tmp");
        fs::write(&temp_path, bytes)
            .with_context(|| format!("Failed to write {:?}", temp_path))?;
        fs::rename(&temp_path, &path)
            .with_context(|| format!("Failed to replace {:?}", path))?;

        Ok(())
    }

    fn describe(&self) -> String {
        format!("file:{}", self.root.display())
    }
}

/// Keeps snapshots in process memory.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    blobs: Mutex<HashMap<ScopeKey, Vec<u8>>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store raw bytes for a scope, bypassing any encoding.
    pub fn insert_raw(&self, scope: &ScopeKey, bytes: impl Into<Vec<u8>>) {
        self.blobs
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(scope.clone(), bytes.into());
    }

    /// Number of scopes with a stored blob.
    pub fn len(&self) -> usize {
        self.blobs.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SnapshotBackend for MemoryBackend {
    fn read(&self, scope: &ScopeKey) -> Result<Option<Vec<u8>>> {
        Ok(self
            .blobs
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(scope)
            .cloned())
    }

    fn write(&self, scope: &ScopeKey, bytes: &[u8]) -> Result<()> {
        self.insert_raw(scope, bytes);
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn file_backend_read_missing_returns_none() {
        let temp = TempDir::new().unwrap();
        let backend = FileBackend::new(temp.path().join("favorites"));

        assert!(backend.read(&ScopeKey::Anonymous).unwrap().is_none());
    }

    #[test]
    fn file_backend_write_and_read() {
        let temp = TempDir::new().unwrap();
        let backend = FileBackend::new(temp.path().join("favorites"));
        let scope = ScopeKey::user("alice").unwrap();

        backend.write(&scope, b"hello").unwrap();

        assert_eq!(backend.read(&scope).unwrap().unwrap(), b"hello");
        assert!(backend.read(&ScopeKey::Anonymous).unwrap().is_none());
    }

    #[test]
    fn file_backend_write_replaces_whole_blob() {
        let temp = TempDir::new().unwrap();
        let backend = FileBackend::new(temp.path());
        let scope = ScopeKey::Anonymous;

        backend.write(&scope, b"a much longer first snapshot").unwrap();
        backend.write(&scope, b"short").unwrap();

        assert_eq!(backend.read(&scope).unwrap().unwrap(), b"short");
    }

    #[test]
    fn file_backend_uses_atomic_write() {
        let temp = TempDir::new().unwrap();
        let backend = FileBackend::new(temp.path());
        let scope = ScopeKey::Anonymous;

        backend.write(&scope, b"{}").unwrap();

        let temp_path = backend.snapshot_path(&scope).with_extension("json.tmp");
        assert!(
            !temp_path.exists(),
            "Temp file should not exist after successful save"
        );
        assert!(backend.snapshot_path(&scope).exists());
    }

    #[test]
    fn memory_backend_round_trip() {
        let backend = MemoryBackend::new();
        let scope = ScopeKey::user("bob").unwrap();
        assert!(backend.is_empty());

        backend.write(&scope, b"data").unwrap();

        assert_eq!(backend.read(&scope).unwrap().unwrap(), b"data");
        assert_eq!(backend.len(), 1);
    }

    #[test]
    fn shared_backend_through_arc() {
        let backend = Arc::new(MemoryBackend::new());
        let shared: Arc<dyn SnapshotBackend> = backend.clone();

        shared.write(&ScopeKey::Anonymous, b"x").unwrap();

        assert_eq!(backend.len(), 1);
        assert_eq!(shared.describe(), "memory");
    }
}
