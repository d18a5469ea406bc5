//! Domain models shared by the uploader pipeline and the registry service.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// The kind of media file a submission carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaKind {
    Audio,
    Image,
}

impl MediaKind {
    /// Key prefix within the storage bucket.
    pub fn key_prefix(&self) -> &'static str {
        match self {
            MediaKind::Audio => "audios",
            MediaKind::Image => "images",
        }
    }
}

impl std::fmt::Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MediaKind::Audio => write!(f, "audio"),
            MediaKind::Image => write!(f, "image"),
        }
    }
}

/// Validation outcome of a [`MediaAsset`]. An asset transitions away from
/// `Unchecked` exactly once.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValidationStatus {
    Unchecked,
    Valid,
    Rejected(String),
}

/// A local file reference with a declared kind and its validation status.
#[derive(Clone, Debug)]
pub struct MediaAsset {
    kind: MediaKind,
    path: PathBuf,
    status: ValidationStatus,
}

impl MediaAsset {
    pub fn new(kind: MediaKind, path: impl Into<PathBuf>) -> Self {
        Self {
            kind,
            path: path.into(),
            status: ValidationStatus::Unchecked,
        }
    }

    pub fn kind(&self) -> MediaKind {
        self.kind
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn status(&self) -> &ValidationStatus {
        &self.status
    }

    /// Mark the asset as having passed validation. Consumes the unchecked
    /// asset so the status transitions exactly once.
    pub fn into_valid(mut self) -> Self {
        debug_assert_eq!(self.status, ValidationStatus::Unchecked);
        self.status = ValidationStatus::Valid;
        self
    }

    pub fn into_rejected(mut self, reason: impl Into<String>) -> Self {
        debug_assert_eq!(self.status, ValidationStatus::Unchecked);
        self.status = ValidationStatus::Rejected(reason.into());
        self
    }

    /// Destination key within the bucket: `{prefix}/{file name}`.
    pub fn storage_key(&self) -> String {
        let filename = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        format!("{}/{}", self.kind.key_prefix(), filename)
    }
}

/// A validated asset paired with the locator the object store returned for
/// it. Never constructed for a rejected asset.
#[derive(Clone, Debug)]
pub struct UploadResult {
    asset: MediaAsset,
    locator: String,
}

impl UploadResult {
    /// Pair a validated asset with its storage locator.
    ///
    /// # Panics
    /// Panics if the asset has not passed validation; upload code must only
    /// run on validated assets.
    pub fn new(asset: MediaAsset, locator: impl Into<String>) -> Self {
        assert_eq!(
            *asset.status(),
            ValidationStatus::Valid,
            "upload result for an unvalidated asset"
        );
        Self {
            asset,
            locator: locator.into(),
        }
    }

    pub fn asset(&self) -> &MediaAsset {
        &self.asset
    }

    pub fn locator(&self) -> &str {
        &self.locator
    }
}

/// The publishable unit: registered with the registry once every precursor
/// check has passed. The registry owns the record's lifecycle thereafter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackRecord {
    pub title: String,
    pub audio_uri: String,
    pub image_uri: String,
    pub link: String,
}
