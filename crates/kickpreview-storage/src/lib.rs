//! Kick Preview storage backends.
//!
//! The `Storage` trait is write-only: the ingestion pipeline puts objects and
//! never reads them back. Keys are `audios/{filename}` or `images/{filename}`
//! within a single fixed bucket; re-uploading to an existing key silently
//! overwrites, which is intentional.

pub mod factory;
pub mod local;
pub mod s3;
pub mod traits;

pub use factory::create_storage;
pub use kickpreview_core::StorageBackend;
pub use local::LocalStorage;
pub use s3::S3Storage;
pub use traits::{Storage, StorageError, StorageResult};
