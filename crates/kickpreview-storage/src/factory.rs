use crate::{LocalStorage, S3Storage, Storage, StorageBackend, StorageError, StorageResult};
use kickpreview_core::Config;
use std::sync::Arc;

/// Create a storage backend based on configuration
pub async fn create_storage(config: &Config) -> StorageResult<Arc<dyn Storage>> {
    match config.storage_backend {
        StorageBackend::S3 => {
            let (access_key, secret_key) = config
                .aws_credentials()
                .map_err(|e| StorageError::CredentialError(e.to_string()))?;

            let storage = S3Storage::new(
                config.s3_bucket.clone(),
                config.s3_region.clone(),
                access_key,
                secret_key,
                config.s3_endpoint.clone(),
            )?;
            Ok(Arc::new(storage))
        }

        StorageBackend::Local => {
            let base_path = config.local_storage_path.as_deref().ok_or_else(|| {
                StorageError::ConfigError("LOCAL_STORAGE_PATH not configured".to_string())
            })?;

            let storage = LocalStorage::new(base_path).await?;
            Ok(Arc::new(storage))
        }
    }
}
