//! Kick Preview Core Library
//!
//! This crate provides the domain models, error type, configuration, and
//! validation policy shared across the Kick Preview components.

pub mod config;
pub mod error;
pub mod models;
pub mod policy;

// Re-export commonly used types
pub use config::{Config, StorageBackend};
pub use error::AppError;
pub use models::{MediaAsset, MediaKind, TrackRecord, UploadResult, ValidationStatus};
pub use policy::ValidationPolicy;
