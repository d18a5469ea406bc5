//! Storage abstraction trait

use crate::StorageBackend;
use async_trait::async_trait;
use std::path::Path;
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Local file not found: {0}")]
    FileNotFound(String),

    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Credential error: {0}")]
    CredentialError(String),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("Storage configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Write-only object storage.
///
/// `put` is all-or-nothing: a locator is returned only when the transfer
/// fully completed. No existence check is made against the destination key.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Upload raw bytes to `key` and return the object's stable locator
    /// (`{scheme}://{bucket-or-base}/{key}`).
    async fn put(&self, key: &str, data: Vec<u8>) -> StorageResult<String>;

    /// Upload a local file to `key`. The file must exist; a missing file is
    /// a distinct error from transport failures.
    async fn put_file(&self, local_path: &Path, key: &str) -> StorageResult<String> {
        let data = tokio::fs::read(local_path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                StorageError::FileNotFound(local_path.display().to_string())
            } else {
                StorageError::IoError(e)
            }
        })?;
        self.put(key, data).await
    }

    /// Get the storage backend type
    fn backend_type(&self) -> StorageBackend;
}
