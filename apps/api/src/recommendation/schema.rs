//! Response schema sent with every recommendation request.
//!
//! Written in Gemini's OpenAPI-subset dialect (upper-case type names). Must stay
//! in lockstep with `models::RecommendationResponse`.

use serde_json::{json, Value};

pub fn recommendation_schema() -> Value {
    let string_array = json!({ "type": "ARRAY", "items": { "type": "STRING" } });

    json!({
        "type": "OBJECT",
        "properties": {
            "profileSummary": { "type": "STRING" },
            "topCareers": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "role": { "type": "STRING" },
                        "domain": { "type": "STRING" },
                        "matchScore": { "type": "NUMBER" },
                        "description": { "type": "STRING" },
                        "requiredSkills": string_array,
                        "certifications": string_array,
                        "roadmap": {
                            "type": "ARRAY",
                            "items": {
                                "type": "OBJECT",
                                "properties": {
                                    "title": { "type": "STRING" },
                                    "description": { "type": "STRING" },
                                    "timeframe": { "type": "STRING" }
                                },
                                "required": ["title", "description", "timeframe"]
                            }
                        }
                    },
                    "required": [
                        "role",
                        "domain",
                        "matchScore",
                        "description",
                        "requiredSkills",
                        "certifications",
                        "roadmap"
                    ]
                }
            }
        },
        "required": ["profileSummary", "topCareers"]
    })
}
