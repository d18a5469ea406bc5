//! External link reachability check.

use std::time::Duration;

/// Link verification failures.
#[derive(Debug, thiserror::Error)]
pub enum LinkError {
    #[error("Link must start with \"http\": {0}")]
    InvalidScheme(String),

    #[error("Link {link} is unreachable: {source}")]
    Unreachable {
        link: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Link {link} returned status {status}")]
    BadStatus { link: String, status: u16 },

    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

/// Checks that a claimed external reference URL is live.
///
/// One GET per call, no retries. The scheme check happens before any network
/// activity, so a malformed link never produces a request.
#[derive(Clone, Debug)]
pub struct LinkVerifier {
    client: reqwest::Client,
}

impl LinkVerifier {
    pub fn new(timeout: Duration) -> Result<Self, LinkError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(LinkError::Client)?;
        Ok(Self { client })
    }

    /// Succeeds iff the link starts with `http` (any case) and a single GET
    /// returns status 200 exactly.
    pub async fn verify(&self, link: &str) -> Result<(), LinkError> {
        if !link.to_lowercase().starts_with("http") {
            return Err(LinkError::InvalidScheme(link.to_string()));
        }

        let response = self
            .client
            .get(link)
            .send()
            .await
            .map_err(|source| LinkError::Unreachable {
                link: link.to_string(),
                source,
            })?;

        let status = response.status().as_u16();
        if status != 200 {
            return Err(LinkError::BadStatus {
                link: link.to_string(),
                status,
            });
        }

        tracing::info!(link, "Link exists");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verifier() -> LinkVerifier {
        LinkVerifier::new(Duration::from_secs(2)).unwrap()
    }

    #[tokio::test]
    async fn reachable_link_passes() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/track")
            .with_status(200)
            .create_async()
            .await;

        verifier()
            .verify(&format!("{}/track", server.url()))
            .await
            .unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn non_http_scheme_is_rejected_without_a_request() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", mockito::Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let link = format!("ftp{}", server.url().trim_start_matches("http"));
        match verifier().verify(&link).await {
            Err(LinkError::InvalidScheme(rejected)) => assert_eq!(rejected, link),
            other => panic!("expected InvalidScheme, got {:?}", other),
        }
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn non_200_status_is_rejected() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/gone")
            .with_status(404)
            .create_async()
            .await;

        match verifier().verify(&format!("{}/gone", server.url())).await {
            Err(LinkError::BadStatus { status, .. }) => assert_eq!(status, 404),
            other => panic!("expected BadStatus, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn other_success_statuses_are_rejected() {
        // Exactly 200, nothing else.
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/moved")
            .with_status(204)
            .create_async()
            .await;

        assert!(matches!(
            verifier().verify(&format!("{}/moved", server.url())).await,
            Err(LinkError::BadStatus { status: 204, .. })
        ));
    }

    #[tokio::test]
    async fn connection_refused_is_unreachable() {
        assert!(matches!(
            verifier().verify("http://127.0.0.1:1/").await,
            Err(LinkError::Unreachable { .. })
        ));
    }
}
