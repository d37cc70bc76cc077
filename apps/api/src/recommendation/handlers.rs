//! Axum route handlers for the Recommendations API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::assessment::answers::LegacyAssessmentAnswers;
use crate::assessment::profile::{normalize_answers, NormalizedProfile};
use crate::errors::AppError;
use crate::recommendation::models::{ExplorationLevel, RecommendationOutcome};
use crate::recommendation::wire::RecommendationRequest;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRecommendationsRequest {
    #[serde(default)]
    pub answers: LegacyAssessmentAnswers,
    #[serde(default)]
    pub exploration_level: ExplorationLevel,
}

#[derive(Debug, Serialize)]
pub struct PreviewResponse {
    pub profile: NormalizedProfile,
    pub request: RecommendationRequest,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/recommendations
///
/// Runs the adapter. Responds 200 with `source: "api"` or `source: "fallback"`;
/// backend trouble is reported in the body, not the status code.
pub async fn handle_generate(
    State(state): State<AppState>,
    payload: Result<Json<GenerateRecommendationsRequest>, JsonRejection>,
) -> Result<Json<RecommendationOutcome>, AppError> {
    let Json(request) = payload.map_err(|e| AppError::Validation(e.body_text()))?;

    let outcome = state
        .adapter
        .generate_recommendations(&request.answers, request.exploration_level)
        .await;

    debug!(
        fallback = outcome.is_fallback(),
        count = outcome.batch().recommendations.len(),
        "Responding to recommendation request"
    );

    Ok(Json(outcome))
}

/// POST /api/v1/recommendations/preview
///
/// Returns the normalized profile and the exact body that would be sent to
/// the backend, without calling it.
pub async fn handle_preview(
    payload: Result<Json<GenerateRecommendationsRequest>, JsonRejection>,
) -> Result<Json<PreviewResponse>, AppError> {
    let Json(request) = payload.map_err(|e| AppError::Validation(e.body_text()))?;

    let profile = normalize_answers(&request.answers);
    let outbound = RecommendationRequest::from_profile(&profile, request.exploration_level);

    Ok(Json(PreviewResponse {
        profile,
        request: outbound,
    }))
}
