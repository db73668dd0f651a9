pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::assessment::handlers as assessment;
use crate::recommendation::handlers as recommendation;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Assessment API
        .route("/api/v1/questions", get(assessment::handle_list_questions))
        .route("/api/v1/questions/:id", get(assessment::handle_get_question))
        .route("/api/v1/assessment/scores", post(assessment::handle_scores))
        // Results API
        .route(
            "/api/v1/assessment/results",
            post(recommendation::handle_results),
        )
        .with_state(state)
}
