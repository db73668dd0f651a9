//! Axum route handler for final assessment results.

use axum::{extract::State, Json};
use serde::Serialize;
use tracing::{error, info};

use crate::assessment::handlers::{score_answers, AnswersRequest};
use crate::assessment::scoring::{ChartPoint, InterestScores};
use crate::errors::AppError;
use crate::recommendation::models::RecommendationResponse;
use crate::state::AppState;

/// User-facing message shown when the model call fails.
pub const RECOMMENDATION_FAILED_MESSAGE: &str =
    "Failed to generate recommendations. Please check your connection or API key.";

/// How many of the strongest interests the results highlight.
const TOP_INTEREST_COUNT: usize = 3;

/// Final results. `scores`, `chart` and `top_interests` are always present;
/// exactly one of `recommendations` and `error` is set.
#[derive(Debug, Serialize)]
pub struct ResultsResponse {
    pub scores: InterestScores,
    pub chart: Vec<ChartPoint>,
    pub top_interests: Vec<ChartPoint>,
    pub recommendations: Option<RecommendationResponse>,
    pub error: Option<String>,
}

/// POST /api/v1/assessment/results
///
/// Requires a complete answer set. A failed recommendation call degrades to
/// scores + chart + error message rather than failing the request.
pub async fn handle_results(
    State(state): State<AppState>,
    Json(request): Json<AnswersRequest>,
) -> Result<Json<ResultsResponse>, AppError> {
    let (scores, progress) = score_answers(&request.answers);
    if !progress.complete {
        return Err(AppError::Validation(format!(
            "Assessment incomplete: {}/{} questions answered",
            progress.answered, progress.total
        )));
    }

    let top_interests = scores.top_interests(TOP_INTEREST_COUNT);
    if let Some(top) = top_interests.first() {
        info!(
            "Assessment complete; strongest interest {} ({}/10)",
            top.full_domain, top.score
        );
    }

    let chart = scores.chart_points();
    let response = match state.recommender.get_recommendations(&scores).await {
        Ok(recommendations) => ResultsResponse {
            scores,
            chart,
            top_interests,
            recommendations: Some(recommendations),
            error: None,
        },
        Err(e) => {
            error!("Error generating career recommendations: {e}");
            ResultsResponse {
                scores,
                chart,
                top_interests,
                recommendations: None,
                error: Some(RECOMMENDATION_FAILED_MESSAGE.to_string()),
            }
        }
    };

    info!(
        "Assessment results served (recommendations: {})",
        response.recommendations.is_some()
    );
    Ok(Json(response))
}
