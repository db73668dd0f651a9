use serde::{Deserialize, Serialize};

/// One milestone on the path to a career.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadmapStep {
    pub title: String,
    pub description: String,
    pub timeframe: String,
}

/// A single recommended career. All fields are required on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerResult {
    pub role: String,
    /// Free text from the model; usually, but not necessarily, a domain label.
    pub domain: String,
    /// 0 – 100
    pub match_score: f64,
    pub description: String,
    pub required_skills: Vec<String>,
    pub certifications: Vec<String>,
    pub roadmap: Vec<RoadmapStep>,
}

/// The structured model output: top career matches plus an overall summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationResponse {
    pub profile_summary: String,
    pub top_careers: Vec<CareerResult>,
}
