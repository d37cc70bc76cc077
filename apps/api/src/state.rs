use crate::recommendation::adapter::RecommendationAdapter;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Wraps an `Arc<dyn RecommendationBackend>`; tests swap in a stub backend.
    pub adapter: RecommendationAdapter,
}
