//! Blob storage abstraction.
//!
//! Request handlers talk to storage only through [`BlobStore`], so the
//! filesystem-backed store can be swapped for an in-memory one in tests
//! (or for object storage later) without touching handler logic.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::crypto::{sha256_bytes, sha256_file};
use crate::infra::StoreError;

/// Flat keyed blob storage.
///
/// Keys are single path components; anything containing a separator, or
/// naming the `.`/`..` components outright, is rejected before it reaches
/// the backend. Interior dot runs are allowed (file names like
/// `report..final.pdf` are legitimate).
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Persist bytes under a key, overwriting any existing blob.
    async fn put(&self, key: &str, bytes: &[u8]) -> Result<(), StoreError>;

    /// Fetch the bytes stored under a key, `None` when absent.
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    /// SHA-256 hex digest of the *stored* copy under a key.
    ///
    /// Receipt issuance hashes through this method rather than over the
    /// in-memory upload, so the recorded hash always matches what is
    /// actually persisted.
    async fn digest(&self, key: &str) -> Result<String, StoreError>;
}

fn check_key(key: &str) -> Result<(), StoreError> {
    // Separator checks already confine the key to a single path component,
    // so only the literal `.`/`..` components can still escape the root.
    if key.is_empty() || key == "." || key == ".." || key.contains('/') || key.contains('\\') {
        return Err(StoreError::InvalidKey(key.to_string()));
    }
    Ok(())
}

/// Directory-backed blob store. One file per key under a single root.
pub struct FsBlobStore {
    root: PathBuf,
}

impl FsBlobStore {
    /// Open a store rooted at `root`, creating the directory if needed.
    pub fn new(root: impl AsRef<Path>) -> Result<Self, StoreError> {
        let root = root.as_ref().to_path_buf();
        std::fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// Root directory of this store.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[async_trait]
impl BlobStore for FsBlobStore {
    async fn put(&self, key: &str, bytes: &[u8]) -> Result<(), StoreError> {
        check_key(key)?;
        tokio::fs::write(self.root.join(key), bytes).await?;
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        check_key(key)?;
        match tokio::fs::read(self.root.join(key)).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn digest(&self, key: &str) -> Result<String, StoreError> {
        check_key(key)?;
        let path = self.root.join(key);
        let key = key.to_string();

        // The chunked hasher does blocking reads; keep it off the runtime.
        tokio::task::spawn_blocking(move || sha256_file(&path))
            .await
            .map_err(|e| StoreError::Io(io::Error::new(io::ErrorKind::Other, e)))?
            .map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => StoreError::NotFound(key),
                _ => StoreError::Io(e),
            })
    }
}

/// In-memory blob store for tests.
#[derive(Default)]
pub struct MemoryBlobStore {
    blobs: RwLock<HashMap<String, Vec<u8>>>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keys currently stored, in arbitrary order.
    pub async fn keys(&self) -> Vec<String> {
        self.blobs.read().await.keys().cloned().collect()
    }
}

#[async_trait]
impl BlobStore for MemoryBlobStore {
    async fn put(&self, key: &str, bytes: &[u8]) -> Result<(), StoreError> {
        check_key(key)?;
        self.blobs.write().await.insert(key.to_string(), bytes.to_vec());
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        check_key(key)?;
        Ok(self.blobs.read().await.get(key).cloned())
    }

    async fn digest(&self, key: &str) -> Result<String, StoreError> {
        check_key(key)?;
        match self.blobs.read().await.get(key) {
            Some(bytes) => Ok(sha256_bytes(bytes)),
            None => Err(StoreError::NotFound(key.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::sha256_bytes;

    #[tokio::test]
    async fn fs_store_round_trips_put_get_digest() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsBlobStore::new(dir.path()).unwrap();

        store.put("blob.bin", b"hello mnevi").await.unwrap();
        assert_eq!(
            store.get("blob.bin").await.unwrap(),
            Some(b"hello mnevi".to_vec())
        );
        assert_eq!(
            store.digest("blob.bin").await.unwrap(),
            sha256_bytes(b"hello mnevi")
        );
    }

    #[tokio::test]
    async fn fs_store_creates_missing_root() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("uploads");
        let store = FsBlobStore::new(&nested).unwrap();
        assert!(nested.is_dir());
        assert_eq!(store.root(), nested);
    }

    #[tokio::test]
    async fn missing_blob_is_none_and_digest_errors() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsBlobStore::new(dir.path()).unwrap();

        assert!(store.get("absent").await.unwrap().is_none());
        assert!(matches!(
            store.digest("absent").await,
            Err(StoreError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn unsafe_keys_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsBlobStore::new(dir.path()).unwrap();

        for key in ["", ".", "..", "a/b", "a\\b", "../up"] {
            assert!(
                matches!(store.put(key, b"x").await, Err(StoreError::InvalidKey(_))),
                "key {key:?} should be rejected"
            );
        }
    }

    #[tokio::test]
    async fn keys_with_interior_dot_runs_are_accepted() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsBlobStore::new(dir.path()).unwrap();

        store.put("report..final.pdf", b"dotted").await.unwrap();
        assert_eq!(
            store.get("report..final.pdf").await.unwrap(),
            Some(b"dotted".to_vec())
        );
        assert_eq!(
            store.digest("report..final.pdf").await.unwrap(),
            sha256_bytes(b"dotted")
        );
    }

    #[tokio::test]
    async fn memory_store_behaves_like_fs_store_through_the_trait() {
        let store: Box<dyn BlobStore> = Box::new(MemoryBlobStore::new());

        store.put("blob.bin", b"hello mnevi").await.unwrap();
        assert_eq!(
            store.get("blob.bin").await.unwrap(),
            Some(b"hello mnevi".to_vec())
        );
        assert_eq!(
            store.digest("blob.bin").await.unwrap(),
            sha256_bytes(b"hello mnevi")
        );
        assert!(store.get("absent").await.unwrap().is_none());
        assert!(matches!(
            store.digest("absent").await,
            Err(StoreError::NotFound(_))
        ));
        assert!(matches!(
            store.put("a/b", b"x").await,
            Err(StoreError::InvalidKey(_))
        ));
    }

    #[tokio::test]
    async fn put_overwrites_existing_blob() {
        let store = MemoryBlobStore::new();
        store.put("k", b"one").await.unwrap();
        store.put("k", b"two").await.unwrap();
        assert_eq!(store.get("k").await.unwrap(), Some(b"two".to_vec()));
    }
}
