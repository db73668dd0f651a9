// Interest assessment: question bank, Likert answers and per-domain scoring.
// Pure computation only; the recommendation call lives in `recommendation`.

pub mod domain;
pub mod handlers;
pub mod questions;
pub mod scoring;
