//! Interest scoring — folds an answer set into a normalized per-domain score vector.
//!
//! Each domain is normalized by the questions actually answered in it, so a
//! partially completed assessment still yields comparable 0–10 scores. The
//! vector is recomputed from the full answer set on every change.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::assessment::domain::InterestDomain;
use crate::assessment::questions::{AnswerSet, Question, LIKERT_MAX};

/// Upper bound of a domain score.
pub const SCORE_SCALE: f64 = 10.0;

/// Score for every domain. Backed by an array indexed by `InterestDomain`, so
/// no domain can be missing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InterestScores {
    values: [f64; InterestDomain::COUNT],
}

/// One axis of the radar chart.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartPoint {
    pub domain: &'static str,
    pub full_domain: InterestDomain,
    pub score: f64,
    pub color: &'static str,
}

impl ChartPoint {
    fn new(domain: InterestDomain, score: f64) -> Self {
        Self {
            domain: domain.short_label(),
            full_domain: domain,
            score: (score * 10.0).round() / 10.0,
            color: domain.color(),
        }
    }
}

impl InterestScores {
    pub fn zero() -> Self {
        Self {
            values: [0.0; InterestDomain::COUNT],
        }
    }

    pub fn get(&self, domain: InterestDomain) -> f64 {
        self.values[domain.index()]
    }

    /// (domain, score) pairs in enum order.
    pub fn iter(&self) -> impl Iterator<Item = (InterestDomain, f64)> + '_ {
        InterestDomain::ALL
            .iter()
            .map(move |&d| (d, self.get(d)))
    }

    /// Domains by descending score; ties keep enum order.
    pub fn ranked(&self) -> Vec<(InterestDomain, f64)> {
        let mut ranked: Vec<_> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked
    }

    /// Chart data with scores rounded to one decimal place.
    pub fn chart_points(&self) -> Vec<ChartPoint> {
        self.iter()
            .map(|(domain, score)| ChartPoint::new(domain, score))
            .collect()
    }

    /// The `n` strongest interests as chart points, per `ranked`.
    pub fn top_interests(&self, n: usize) -> Vec<ChartPoint> {
        self.ranked()
            .into_iter()
            .take(n)
            .map(|(domain, score)| ChartPoint::new(domain, score))
            .collect()
    }
}

impl Serialize for InterestScores {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(InterestDomain::COUNT))?;
        for (domain, score) in self.iter() {
            map.serialize_entry(domain.label(), &score)?;
        }
        map.end()
    }
}

/// Aggregates answers into per-domain scores in `[0, 10]`.
///
/// Only questions in `questions` are consulted, so answers to unknown ids are
/// ignored. A domain with no answered questions scores exactly 0.
pub fn aggregate(questions: &[Question], answers: &AnswerSet) -> InterestScores {
    let mut totals = [0u32; InterestDomain::COUNT];
    let mut max_possible = [0u32; InterestDomain::COUNT];

    for question in questions {
        if let Some(score) = answers.get(question.id) {
            let i = question.domain.index();
            totals[i] += u32::from(score.value());
            max_possible[i] += u32::from(LIKERT_MAX);
        }
    }

    let mut scores = InterestScores::zero();
    for (i, value) in scores.values.iter_mut().enumerate() {
        if max_possible[i] > 0 {
            *value = f64::from(totals[i]) / f64::from(max_possible[i]) * SCORE_SCALE;
        }
    }
    scores
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::questions::{LikertScore, QUESTIONS};

    fn likert(v: u8) -> LikertScore {
        LikertScore::new(v).unwrap()
    }

    fn answers(pairs: &[(&str, u8)]) -> AnswerSet {
        pairs.iter().map(|&(id, v)| (id, likert(v))).collect()
    }

    fn uniform(v: u8) -> AnswerSet {
        QUESTIONS.iter().map(|q| (q.id, likert(v))).collect()
    }

    #[test]
    fn test_empty_answers_score_zero_everywhere() {
        let scores = aggregate(&QUESTIONS, &AnswerSet::new());
        assert_eq!(scores.iter().count(), 10);
        for (_, score) in scores.iter() {
            assert_eq!(score, 0.0);
        }
    }

    #[test]
    fn test_all_max_answers_reach_ten() {
        let scores = aggregate(&QUESTIONS, &uniform(5));
        for (domain, score) in scores.iter() {
            assert_eq!(score, 10.0, "{domain}");
        }
    }

    #[test]
    fn test_all_min_answers_reach_two() {
        let scores = aggregate(&QUESTIONS, &uniform(1));
        for (domain, score) in scores.iter() {
            assert_eq!(score, 2.0, "{domain}");
        }
    }

    #[test]
    fn test_both_technology_questions_max() {
        let scores = aggregate(&QUESTIONS, &answers(&[("1", 5), ("11", 5)]));
        assert_eq!(scores.get(InterestDomain::Technology), 10.0);
        for (domain, score) in scores.iter() {
            if domain != InterestDomain::Technology {
                assert_eq!(score, 0.0, "{domain}");
            }
        }
    }

    #[test]
    fn test_single_answer_normalizes_by_answered_count() {
        let scores = aggregate(&QUESTIONS, &answers(&[("1", 3)]));
        assert_eq!(scores.get(InterestDomain::Technology), 6.0);
        assert_eq!(scores.get(InterestDomain::Science), 0.0);
    }

    #[test]
    fn test_mixed_answers_average_within_domain() {
        // Math: ids 3 and 13 → (2 + 5) / 10 * 10 = 7
        let scores = aggregate(&QUESTIONS, &answers(&[("3", 2), ("13", 5)]));
        assert!((scores.get(InterestDomain::Math) - 7.0).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_question_ids_ignored() {
        let scores = aggregate(&QUESTIONS, &answers(&[("42", 5), ("abc", 1)]));
        assert_eq!(scores, InterestScores::zero());
    }

    #[test]
    fn test_scores_always_within_bounds() {
        for v in 1..=5 {
            for id in ["1", "2", "7", "20"] {
                let scores = aggregate(&QUESTIONS, &answers(&[(id, v), ("12", 6 - v)]));
                for (domain, score) in scores.iter() {
                    assert!((0.0..=10.0).contains(&score), "{domain} = {score}");
                }
            }
        }
    }

    #[test]
    fn test_monotonic_in_each_answer() {
        for question in QUESTIONS.iter() {
            let mut previous = f64::MIN;
            for v in 1..=5 {
                let mut set = uniform(3);
                set.record(question.id, likert(v));
                let score = aggregate(&QUESTIONS, &set).get(question.domain);
                assert!(score >= previous, "question {} value {v}", question.id);
                previous = score;
            }
        }
    }

    #[test]
    fn test_ranked_orders_by_score_then_enum() {
        let scores = aggregate(&QUESTIONS, &answers(&[("4", 5), ("9", 2), ("10", 5)]));
        let ranked: Vec<_> = scores.ranked().into_iter().map(|(d, _)| d).collect();
        assert_eq!(ranked[0], InterestDomain::Creativity);
        assert_eq!(ranked[1], InterestDomain::Sports);
        assert_eq!(ranked[2], InterestDomain::Entrepreneurship);
        assert_eq!(ranked[3], InterestDomain::Technology);
    }

    #[test]
    fn test_iter_agrees_with_get() {
        let scores = aggregate(&QUESTIONS, &answers(&[("6", 4), ("16", 2), ("8", 5)]));
        for (domain, score) in scores.iter() {
            assert_eq!(score, scores.get(domain));
        }
        assert_eq!(scores.get(InterestDomain::SocialService), 10.0);
    }

    #[test]
    fn test_top_interests_truncates_ranking() {
        let scores = aggregate(&QUESTIONS, &answers(&[("10", 5), ("4", 5), ("1", 4), ("2", 1)]));
        let top = scores.top_interests(3);
        let domains: Vec<_> = top.iter().map(|p| p.full_domain).collect();
        assert_eq!(
            domains,
            vec![
                InterestDomain::Creativity,
                InterestDomain::Sports,
                InterestDomain::Technology
            ]
        );
        assert_eq!(top[2].score, 8.0);
    }

    #[test]
    fn test_chart_points_round_to_one_decimal() {
        // Science: (4 + 3) / 10 * 10 = 7.0; Management: 2/5 * 10 = 4.0
        let scores = aggregate(&QUESTIONS, &answers(&[("2", 4), ("12", 3), ("5", 2)]));
        let points = scores.chart_points();
        assert_eq!(points.len(), 10);
        let science = points
            .iter()
            .find(|p| p.full_domain == InterestDomain::Science)
            .unwrap();
        assert_eq!(science.domain, "Science");
        assert_eq!(science.score, 7.0);
        assert_eq!(science.color, "#10b981");
    }

    #[test]
    fn test_serializes_as_label_map() {
        let scores = aggregate(&QUESTIONS, &answers(&[("1", 3)]));
        let value = serde_json::to_value(scores).unwrap();
        let map = value.as_object().unwrap();
        assert_eq!(map.len(), 10);
        assert_eq!(map["Technology & Computing"], 6.0);
        assert_eq!(map["Sports & Physical Activities"], 0.0);
    }
}
