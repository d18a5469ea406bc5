//! Kick Preview uploader library.
//!
//! `IngestionPipeline` drives a submission through validation, the two
//! object-store uploads, and the registry call. `RegistryClient` is the
//! HTTP client for the registry's write endpoint.

pub mod client;
pub mod pipeline;

pub use client::{PublishError, RegistryClient};
pub use pipeline::{IngestError, IngestionPipeline, PipelineStage, Submission};

/// Initialize tracing for the uploader binary.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}
