use crate::recommendation::client::RecommendationClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Wraps the pluggable `StructuredModel`. Default: `GeminiClient`.
    pub recommender: RecommendationClient,
}
