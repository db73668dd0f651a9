// Prompt template for career recommendations.
// The response shape itself is enforced by `schema::recommendation_schema`.

/// Replace `{score_summary}` before sending.
pub const RECOMMENDATION_PROMPT_TEMPLATE: &str = r#"The user has taken a career interest assessment. Here are their scores across different domains:
{score_summary}

Based on these scores, identify the top 3 career roles that would be a perfect fit.
For each role, provide:
1. The job title and a brief description.
2. A match score (0-100) based on their interest profile.
3. A list of 5 essential technical and soft skills.
4. A list of 3-4 professional certifications or degrees.
5. A structured 4-step roadmap (milestones) to achieve this career, each with a title, description and timeframe.

Also provide a brief overall "Profile Summary" explaining why these careers were chosen based on their dominant interests."#;
