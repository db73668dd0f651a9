//! Axum route handlers for the Assessment API.

use axum::{extract::Path, Json};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::assessment::questions::{likert_options, AnswerSet, LikertOption, Progress, Question, QUESTIONS};
use crate::assessment::scoring::{aggregate, ChartPoint, InterestScores};
use crate::errors::AppError;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct QuestionsResponse {
    pub questions: &'static [Question],
    pub scale: Vec<LikertOption>,
}

/// Request body shared by the scoring and results endpoints.
#[derive(Debug, Deserialize)]
pub struct AnswersRequest {
    pub answers: AnswerSet,
}

#[derive(Debug, Serialize)]
pub struct ScoresResponse {
    pub scores: InterestScores,
    pub chart: Vec<ChartPoint>,
    pub progress: Progress,
}

/// Scores the request against the fixed question bank.
pub fn score_answers(answers: &AnswerSet) -> (InterestScores, Progress) {
    debug!("Scoring {} answers", answers.len());
    let unknown: Vec<&str> = answers.unknown_ids(&QUESTIONS).collect();
    if !unknown.is_empty() {
        debug!("Ignoring answers for unknown question ids: {unknown:?}");
    }
    (aggregate(&QUESTIONS, answers), answers.progress(&QUESTIONS))
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/questions
pub async fn handle_list_questions() -> Json<QuestionsResponse> {
    Json(QuestionsResponse {
        questions: &QUESTIONS,
        scale: likert_options(),
    })
}

/// GET /api/v1/questions/:id
pub async fn handle_get_question(Path(id): Path<String>) -> Result<Json<Question>, AppError> {
    QUESTIONS
        .iter()
        .find(|q| q.id == id)
        .copied()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Question {id} not found")))
}

/// POST /api/v1/assessment/scores
///
/// Live scoring: accepts a partial answer set and returns the current vector.
pub async fn handle_scores(Json(request): Json<AnswersRequest>) -> Json<ScoresResponse> {
    let (scores, progress) = score_answers(&request.answers);
    Json(ScoresResponse {
        chart: scores.chart_points(),
        scores,
        progress,
    })
}
