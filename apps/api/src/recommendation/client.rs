//! Recommendation client — the only place that talks to the recommendation backend.
//!
//! One POST per call. No retries and no client-side timeout beyond reqwest's
//! defaults; the adapter decides what a failure means for the caller.
use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;
use tracing::debug;

use crate::recommendation::wire::{RecommendationRequest, RecommendationResponse};

#[derive(Debug, Error)]
pub enum RecommendationError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Backend returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Malformed response body: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Anything that can answer a recommendation request.
///
/// Carried in `AppState` as `Arc<dyn RecommendationBackend>`.
#[async_trait]
pub trait RecommendationBackend: Send + Sync {
    async fn fetch(
        &self,
        request: &RecommendationRequest,
    ) -> Result<RecommendationResponse, RecommendationError>;
}

#[derive(Clone)]
pub struct RecommendationClient {
    client: Client,
    endpoint: String,
}

impl RecommendationClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl RecommendationBackend for RecommendationClient {
    async fn fetch(
        &self,
        request: &RecommendationRequest,
    ) -> Result<RecommendationResponse, RecommendationError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(RecommendationError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: RecommendationResponse = serde_json::from_str(&body)?;
        debug!(
            "Recommendation backend answered {} ({} bytes)",
            status,
            body.len()
        );
        Ok(parsed)
    }
}
