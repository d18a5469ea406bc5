//! HTTP client for the registry's write endpoint.

use kickpreview_core::{Config, TrackRecord};
use std::time::Duration;

/// Registration failures. None of these are retried; a caller that needs
/// resilience retries the whole pipeline invocation.
#[derive(Debug, thiserror::Error)]
pub enum PublishError {
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Registry request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Registry returned status {status}: {body}")]
    Status { status: u16, body: String },
}

/// Client for the registry service's `PUT /api/put-content` endpoint.
#[derive(Clone, Debug)]
pub struct RegistryClient {
    client: reqwest::Client,
    base_url: String,
}

impl RegistryClient {
    pub fn new(base_url: String, timeout: Duration) -> Result<Self, PublishError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(PublishError::Client)?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, PublishError> {
        Self::new(
            config.registry_url.clone(),
            Duration::from_secs(config.http_timeout_secs),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Submit a validated record. One synchronous request/response exchange;
    /// any non-2xx response carries the status and the registry's error body.
    pub async fn publish(&self, record: &TrackRecord) -> Result<(), PublishError> {
        let url = format!("{}/api/put-content", self.base_url);

        let response = self
            .client
            .put(&url)
            .json(record)
            .send()
            .await
            .map_err(PublishError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(PublishError::Status {
                status: status.as_u16(),
                body,
            });
        }

        tracing::info!(title = %record.title, "Track registered");
        Ok(())
    }
}
