//! Recommendation Client — turns a score vector into career recommendations.
//!
//! Flow: score summary → prompt → `StructuredModel::predict` (schema-constrained)
//!       → strip fences → parse `RecommendationResponse` → validate.
//!
//! One model call per invocation. No retry, caching or rate limiting; the caller
//! decides how to present a failure.

use std::sync::Arc;

use thiserror::Error;
use tracing::{info, warn};

use crate::assessment::scoring::InterestScores;
use crate::llm_client::{strip_json_fences, LlmError, StructuredModel};
use crate::recommendation::models::RecommendationResponse;
use crate::recommendation::prompts::RECOMMENDATION_PROMPT_TEMPLATE;
use crate::recommendation::schema::recommendation_schema;

/// Why a recommendation request failed. Callers treat every variant as "the call failed".
#[derive(Debug, Error)]
pub enum RecommendationError {
    #[error("model call failed: {0}")]
    Model(#[from] LlmError),

    /// The model returned no text at all. Distinct from a response with zero careers.
    #[error("model returned an empty response")]
    EmptyResponse,

    #[error("malformed recommendation response: {0}")]
    Malformed(String),
}

#[derive(Clone)]
pub struct RecommendationClient {
    model: Arc<dyn StructuredModel>,
}

impl RecommendationClient {
    pub fn new(model: Arc<dyn StructuredModel>) -> Self {
        Self { model }
    }

    pub async fn get_recommendations(
        &self,
        scores: &InterestScores,
    ) -> Result<RecommendationResponse, RecommendationError> {
        let prompt = build_prompt(scores);
        let schema = recommendation_schema();

        let text = self
            .model
            .predict(&prompt, &schema)
            .await?
            .ok_or(RecommendationError::EmptyResponse)?;

        let response = parse_response(&text)?;
        info!(
            "Received {} career recommendations",
            response.top_careers.len()
        );
        Ok(response)
    }
}

/// `"<domain>: <score>/10"` for every domain, comma separated, in enum order.
pub fn score_summary(scores: &InterestScores) -> String {
    scores
        .iter()
        .map(|(domain, score)| format!("{domain}: {score}/10"))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn build_prompt(scores: &InterestScores) -> String {
    RECOMMENDATION_PROMPT_TEMPLATE.replace("{score_summary}", &score_summary(scores))
}

/// Parses model text into a response. Blank text is `EmptyResponse`; anything
/// that is not a complete, in-range response is `Malformed`.
pub fn parse_response(text: &str) -> Result<RecommendationResponse, RecommendationError> {
    let text = strip_json_fences(text);
    if text.is_empty() {
        return Err(RecommendationError::EmptyResponse);
    }

    let response: RecommendationResponse = serde_json::from_str(text).map_err(|e| {
        warn!("Recommendation JSON did not match schema: {e}");
        RecommendationError::Malformed(e.to_string())
    })?;

    if let Some(career) = response
        .top_careers
        .iter()
        .find(|c| !(0.0..=100.0).contains(&c.match_score))
    {
        return Err(RecommendationError::Malformed(format!(
            "matchScore {} for '{}' is outside 0-100",
            career.match_score, career.role
        )));
    }

    Ok(response)
}

#[cfg(test)]
pub(crate) mod fakes {
    use async_trait::async_trait;
    use serde_json::Value;
    use std::sync::Mutex;

    use crate::llm_client::{LlmError, StructuredModel};

    /// Returns a canned reply and records the prompts it was given.
    pub struct FakeModel {
        reply: Result<Option<String>, u16>,
        pub prompts: Mutex<Vec<String>>,
    }

    impl FakeModel {
        pub fn replying(text: &str) -> Self {
            Self {
                reply: Ok(Some(text.to_string())),
                prompts: Mutex::new(vec![]),
            }
        }

        pub fn silent() -> Self {
            Self {
                reply: Ok(None),
                prompts: Mutex::new(vec![]),
            }
        }

        pub fn failing(status: u16) -> Self {
            Self {
                reply: Err(status),
                prompts: Mutex::new(vec![]),
            }
        }
    }

    #[async_trait]
    impl StructuredModel for FakeModel {
        async fn predict(&self, prompt: &str, _schema: &Value) -> Result<Option<String>, LlmError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            match &self.reply {
                Ok(text) => Ok(text.clone()),
                Err(status) => Err(LlmError::Api {
                    status: *status,
                    message: "fake failure".to_string(),
                }),
            }
        }
    }
}
