//! Recommendation adapter — questionnaire answers in, ranked careers out.
//!
//! Pipeline: normalize answers → build request → one backend call →
//! normalize response. Any backend failure (transport, non-2xx, undecodable
//! body) is converted into a tagged fallback outcome; the caller always gets
//! a usable batch and can tell which kind it got.

use std::sync::Arc;

use tracing::{info, warn};

use crate::assessment::answers::LegacyAssessmentAnswers;
use crate::assessment::profile::normalize_answers;
use crate::recommendation::client::{RecommendationBackend, RecommendationError};
use crate::recommendation::fallback::fallback_batch;
use crate::recommendation::models::{ExplorationLevel, FallbackReason, RecommendationOutcome};
use crate::recommendation::wire::{normalize_response, RecommendationRequest};

impl From<&RecommendationError> for FallbackReason {
    fn from(err: &RecommendationError) -> Self {
        match err {
            RecommendationError::Http(e) if e.is_decode() => FallbackReason::MalformedBody {
                message: e.to_string(),
            },
            RecommendationError::Http(e) => FallbackReason::Transport {
                message: e.to_string(),
            },
            RecommendationError::Status { status, .. } => {
                FallbackReason::HttpStatus { status: *status }
            }
            RecommendationError::Parse(e) => FallbackReason::MalformedBody {
                message: e.to_string(),
            },
        }
    }
}

#[derive(Clone)]
pub struct RecommendationAdapter {
    backend: Arc<dyn RecommendationBackend>,
}

impl RecommendationAdapter {
    pub fn new(backend: Arc<dyn RecommendationBackend>) -> Self {
        Self { backend }
    }

    /// Never fails: backend errors become `RecommendationOutcome::Fallback`.
    pub async fn generate_recommendations(
        &self,
        answers: &LegacyAssessmentAnswers,
        level: ExplorationLevel,
    ) -> RecommendationOutcome {
        let profile = normalize_answers(answers);
        let request = RecommendationRequest::from_profile(&profile, level);

        match self.backend.fetch(&request).await {
            Ok(response) => {
                let batch = normalize_response(response, &profile, level);
                info!(
                    user_id = %profile.user_id,
                    exploration_level = u8::from(level),
                    count = batch.recommendations.len(),
                    "Recommendations served from backend"
                );
                RecommendationOutcome::Api { batch }
            }
            Err(e) => {
                let reason = FallbackReason::from(&e);
                warn!(
                    user_id = %profile.user_id,
                    exploration_level = u8::from(level),
                    "Recommendation backend failed, serving fallback: {e}"
                );
                RecommendationOutcome::Fallback {
                    batch: fallback_batch(&profile, level),
                    reason,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recommendation::client::RecommendationClient;
    use crate::recommendation::fallback::FALLBACK_TITLE;
    use crate::recommendation::wire::RecommendationResponse;
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// Returns a canned body and records every request it sees.
    struct StubBackend {
        body: serde_json::Value,
        calls: AtomicUsize,
        last_request: Mutex<Option<RecommendationRequest>>,
    }

    impl StubBackend {
        fn new(body: serde_json::Value) -> Arc<Self> {
            Arc::new(Self {
                body,
                calls: AtomicUsize::new(0),
                last_request: Mutex::new(None),
            })
        }
    }

    #[async_trait]
    impl RecommendationBackend for StubBackend {
        async fn fetch(
            &self,
            request: &RecommendationRequest,
        ) -> Result<RecommendationResponse, RecommendationError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_request.lock().unwrap() = Some(request.clone());
            Ok(serde_json::from_value(self.body.clone())?)
        }
    }

    struct DownBackend;

    #[async_trait]
    impl RecommendationBackend for DownBackend {
        async fn fetch(
            &self,
            _request: &RecommendationRequest,
        ) -> Result<RecommendationResponse, RecommendationError> {
            Err(RecommendationError::Status {
                status: 502,
                body: "bad gateway".to_string(),
            })
        }
    }

    fn answers() -> LegacyAssessmentAnswers {
        serde_json::from_value(json!({
            "userId": "u-1",
            "experience": "6-10",
            "workingWithPeople": [5],
            "salaryExpectations": "100k-150k",
            "technicalSkills": ["SQL"]
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn test_api_outcome_on_success() {
        let backend = StubBackend::new(json!([{
            "title": "Product Manager",
            "description": "Owns the roadmap",
            "relevanceScore": 91,
            "matchReasons": ["People-oriented"]
        }]));
        let adapter = RecommendationAdapter::new(backend.clone());

        let outcome = adapter
            .generate_recommendations(&answers(), ExplorationLevel::Stretch)
            .await;

        assert!(!outcome.is_fallback());
        let batch = outcome.batch();
        assert_eq!(batch.recommendations[0].title, "Product Manager");
        assert!((batch.recommendations[0].relevance_score - 0.91).abs() < 1e-9);
        assert!(batch.user_analysis.people_oriented);
        assert_eq!(backend.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_request_carries_normalized_profile() {
        let backend = StubBackend::new(json!([]));
        let adapter = RecommendationAdapter::new(backend.clone());

        adapter
            .generate_recommendations(&answers(), ExplorationLevel::from(9))
            .await;

        let request = backend.last_request.lock().unwrap().clone().unwrap();
        assert_eq!(request.user_id, "u-1");
        assert_eq!(request.experience, "6-10");
        assert_eq!(request.working_with_people, 5);
        assert_eq!(request.salary_expectations, "100k-150k");
        assert_eq!(request.exploration_level, ExplorationLevel::Safe);
    }

    #[tokio::test]
    async fn test_status_failure_resolves_to_fallback() {
        let adapter = RecommendationAdapter::new(Arc::new(DownBackend));

        let outcome = adapter
            .generate_recommendations(&answers(), ExplorationLevel::Safe)
            .await;

        match &outcome {
            RecommendationOutcome::Fallback { batch, reason } => {
                assert!(!batch.recommendations.is_empty());
                assert_eq!(batch.recommendations[0].title, FALLBACK_TITLE);
                assert_eq!(reason, &FallbackReason::HttpStatus { status: 502 });
            }
            other => panic!("expected fallback, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_malformed_body_resolves_to_fallback() {
        let backend = StubBackend::new(json!({ "unexpected": true }));
        let adapter = RecommendationAdapter::new(backend);

        let outcome = adapter
            .generate_recommendations(&answers(), ExplorationLevel::Safe)
            .await;

        match outcome {
            RecommendationOutcome::Fallback { reason, .. } => {
                assert!(matches!(reason, FallbackReason::MalformedBody { .. }))
            }
            other => panic!("expected fallback, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_network_failure_resolves_to_fallback() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = RecommendationClient::new(format!("http://{addr}/api/recommendations"));
        let adapter = RecommendationAdapter::new(Arc::new(client));

        let outcome = adapter
            .generate_recommendations(&LegacyAssessmentAnswers::default(), ExplorationLevel::Safe)
            .await;

        assert!(outcome.is_fallback());
        assert!(!outcome.batch().recommendations.is_empty());
        match outcome {
            RecommendationOutcome::Fallback { reason, .. } => {
                assert!(matches!(reason, FallbackReason::Transport { .. }))
            }
            other => panic!("expected fallback, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_outcome_serializes_source_tag() {
        let adapter = RecommendationAdapter::new(Arc::new(DownBackend));
        let outcome = adapter
            .generate_recommendations(&answers(), ExplorationLevel::Safe)
            .await;

        let body = serde_json::to_value(&outcome).unwrap();
        assert_eq!(body["source"], "fallback");
        assert_eq!(body["reason"]["kind"], "http_status");
        assert_eq!(body["batch"]["recommendations"][0]["title"], FALLBACK_TITLE);
    }
}
