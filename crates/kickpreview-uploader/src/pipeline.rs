//! Ingestion pipeline orchestration.
//!
//! Stages run strictly in order and each one runs only if the previous
//! stage succeeded. The first failure halts the invocation; uploads that
//! completed before a later failure are left in place (no rollback).

use crate::client::{PublishError, RegistryClient};
use kickpreview_core::{
    MediaAsset, MediaKind, TrackRecord, UploadResult, ValidationPolicy,
};
use kickpreview_media::{validate_audio, validate_image, LinkError, LinkVerifier, ValidationError};
use kickpreview_storage::{Storage, StorageError};
use std::path::PathBuf;
use std::sync::Arc;

/// Pipeline states. `Failed` is represented by [`IngestError`], which names
/// the stage it interrupted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PipelineStage {
    Validating,
    UploadingAudio,
    UploadingImage,
    Publishing,
    Done,
}

impl std::fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PipelineStage::Validating => "validating",
            PipelineStage::UploadingAudio => "uploading-audio",
            PipelineStage::UploadingImage => "uploading-image",
            PipelineStage::Publishing => "publishing",
            PipelineStage::Done => "done",
        };
        write!(f, "{}", name)
    }
}

/// First failure of a pipeline invocation.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Link(#[from] LinkError),

    #[error("Audio upload failed: {0}")]
    AudioUpload(#[source] StorageError),

    #[error("Image upload failed: {0}")]
    ImageUpload(#[source] StorageError),

    #[error(transparent)]
    Publish(#[from] PublishError),
}

impl IngestError {
    /// The stage this failure interrupted.
    pub fn stage(&self) -> PipelineStage {
        match self {
            IngestError::Validation(_) | IngestError::Link(_) => PipelineStage::Validating,
            IngestError::AudioUpload(_) => PipelineStage::UploadingAudio,
            IngestError::ImageUpload(_) => PipelineStage::UploadingImage,
            IngestError::Publish(_) => PipelineStage::Publishing,
        }
    }
}

/// One ingestion request: two local files plus metadata.
#[derive(Clone, Debug)]
pub struct Submission {
    pub wave_file_path: PathBuf,
    pub image_file_path: PathBuf,
    pub title: String,
    pub link: String,
}

/// Orchestrates validation, uploads, and registration for one submission.
///
/// Holds no mutable state; independent invocations may run concurrently.
pub struct IngestionPipeline {
    policy: ValidationPolicy,
    verifier: LinkVerifier,
    storage: Arc<dyn Storage>,
    registry: RegistryClient,
}

impl IngestionPipeline {
    pub fn new(
        policy: ValidationPolicy,
        verifier: LinkVerifier,
        storage: Arc<dyn Storage>,
        registry: RegistryClient,
    ) -> Self {
        Self {
            policy,
            verifier,
            storage,
            registry,
        }
    }

    /// Run one submission to completion.
    ///
    /// Returns the registered record, or the first failure. The validation
    /// order is fixed (title, audio, image, link) so the same bad inputs
    /// always produce the same reported failure.
    pub async fn run(&self, submission: &Submission) -> Result<TrackRecord, IngestError> {
        tracing::info!(stage = %PipelineStage::Validating, title = %submission.title, "Pipeline started");

        if submission.title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle.into());
        }

        let audio = MediaAsset::new(MediaKind::Audio, &submission.wave_file_path);
        let audio = match validate_audio(audio.path(), &self.policy) {
            Ok(_) => audio.into_valid(),
            Err(e) => {
                let _ = audio.into_rejected(e.to_string());
                return Err(e.into());
            }
        };

        let image = MediaAsset::new(MediaKind::Image, &submission.image_file_path);
        let image = match validate_image(image.path(), &self.policy) {
            Ok(_) => image.into_valid(),
            Err(e) => {
                let _ = image.into_rejected(e.to_string());
                return Err(e.into());
            }
        };

        self.verifier.verify(&submission.link).await?;

        tracing::info!(stage = %PipelineStage::UploadingAudio, key = %audio.storage_key(), "Uploading audio");
        let audio_key = audio.storage_key();
        let audio_upload = self
            .storage
            .put_file(audio.path(), &audio_key)
            .await
            .map(|locator| UploadResult::new(audio, locator))
            .map_err(IngestError::AudioUpload)?;

        tracing::info!(stage = %PipelineStage::UploadingImage, key = %image.storage_key(), "Uploading image");
        let image_key = image.storage_key();
        let image_upload = self
            .storage
            .put_file(image.path(), &image_key)
            .await
            .map(|locator| UploadResult::new(image, locator))
            .map_err(IngestError::ImageUpload)?;

        // Locators are used verbatim; the record exists only once both
        // uploads have succeeded.
        let record = TrackRecord {
            title: submission.title.clone(),
            audio_uri: audio_upload.locator().to_string(),
            image_uri: image_upload.locator().to_string(),
            link: submission.link.clone(),
        };

        tracing::info!(stage = %PipelineStage::Publishing, "Registering track");
        self.registry.publish(&record).await?;

        tracing::info!(stage = %PipelineStage::Done, title = %record.title, "Pipeline finished");
        Ok(record)
    }
}
