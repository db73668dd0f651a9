//! Question bank, Likert scale and the incrementally built answer set.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::assessment::domain::InterestDomain;

/// Highest value on the Likert scale. Also the per-question denominator in scoring.
pub const LIKERT_MAX: u8 = 5;
pub const LIKERT_MIN: u8 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: &'static str,
    pub text: &'static str,
    pub domain: InterestDomain,
}

/// The fixed question bank: two statements per domain.
pub static QUESTIONS: [Question; 20] = [
    Question {
        id: "1",
        text: "I enjoy solving complex logical puzzles and working with algorithms.",
        domain: InterestDomain::Technology,
    },
    Question {
        id: "2",
        text: "I am fascinated by how biological organisms or chemical reactions work.",
        domain: InterestDomain::Science,
    },
    Question {
        id: "3",
        text: "I like analyzing data to find trends and patterns.",
        domain: InterestDomain::Math,
    },
    Question {
        id: "4",
        text: "I enjoy creating visual art, sketches, or digital designs.",
        domain: InterestDomain::Creativity,
    },
    Question {
        id: "5",
        text: "I find it rewarding to organize people and lead a team toward a goal.",
        domain: InterestDomain::Management,
    },
    Question {
        id: "6",
        text: "I love learning new languages and expressing ideas through writing.",
        domain: InterestDomain::Communication,
    },
    Question {
        id: "7",
        text: "I feel a deep sense of purpose when helping others with their health.",
        domain: InterestDomain::Healthcare,
    },
    Question {
        id: "8",
        text: "I am passionate about community service and helping the underprivileged.",
        domain: InterestDomain::SocialService,
    },
    Question {
        id: "9",
        text: "I often think of new business ideas and how to bring them to market.",
        domain: InterestDomain::Entrepreneurship,
    },
    Question {
        id: "10",
        text: "I thrive in physically active environments and enjoy sports.",
        domain: InterestDomain::Sports,
    },
    Question {
        id: "11",
        text: "Building software or web applications excites me.",
        domain: InterestDomain::Technology,
    },
    Question {
        id: "12",
        text: "Conducting experiments to discover new facts is appealing to me.",
        domain: InterestDomain::Science,
    },
    Question {
        id: "13",
        text: "I like working with financial models and statistics.",
        domain: InterestDomain::Math,
    },
    Question {
        id: "14",
        text: "I am interested in interior design or architectural aesthetics.",
        domain: InterestDomain::Creativity,
    },
    Question {
        id: "15",
        text: "I enjoy making strategic decisions for a company or project.",
        domain: InterestDomain::Management,
    },
    Question {
        id: "16",
        text: "Public speaking and debating are activities I enjoy.",
        domain: InterestDomain::Communication,
    },
    Question {
        id: "17",
        text: "I am interested in how medical technology can save lives.",
        domain: InterestDomain::Healthcare,
    },
    Question {
        id: "18",
        text: "I want to work in NGOs or non-profit organizations.",
        domain: InterestDomain::SocialService,
    },
    Question {
        id: "19",
        text: "I enjoy the risk and excitement of starting something from scratch.",
        domain: InterestDomain::Entrepreneurship,
    },
    Question {
        id: "20",
        text: "Understanding human physiology and physical training interests me.",
        domain: InterestDomain::Sports,
    },
];

/// A single Likert answer, guaranteed to lie in `LIKERT_MIN..=LIKERT_MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct LikertScore(u8);

impl LikertScore {
    pub fn new(value: u8) -> Option<Self> {
        (LIKERT_MIN..=LIKERT_MAX)
            .contains(&value)
            .then_some(LikertScore(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn label(self) -> &'static str {
        match self.0 {
            1 => "Strongly Disagree",
            2 => "Disagree",
            3 => "Neutral",
            4 => "Agree",
            _ => "Strongly Agree",
        }
    }
}

impl TryFrom<u8> for LikertScore {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        LikertScore::new(value).ok_or_else(|| {
            format!("Likert score must be between {LIKERT_MIN} and {LIKERT_MAX}, got {value}")
        })
    }
}

impl From<LikertScore> for u8 {
    fn from(score: LikertScore) -> u8 {
        score.0
    }
}

/// One selectable option on the Likert scale, as shown to the respondent.
#[derive(Debug, Clone, Serialize)]
pub struct LikertOption {
    pub value: u8,
    pub label: &'static str,
}

pub fn likert_options() -> Vec<LikertOption> {
    (LIKERT_MIN..=LIKERT_MAX)
        .filter_map(LikertScore::new)
        .map(|s| LikertOption {
            value: s.value(),
            label: s.label(),
        })
        .collect()
}

/// Answers keyed by question id. A question is present only once answered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet(BTreeMap<String, LikertScore>);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Progress {
    pub answered: usize,
    pub total: usize,
    pub complete: bool,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an answer, replacing any earlier answer to the same question.
    pub fn record(&mut self, question_id: impl Into<String>, score: LikertScore) {
        self.0.insert(question_id.into(), score);
    }

    pub fn get(&self, question_id: &str) -> Option<LikertScore> {
        self.0.get(question_id).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Counts answered questions among `questions`; ids outside the bank do not count.
    pub fn progress(&self, questions: &[Question]) -> Progress {
        let answered = questions
            .iter()
            .filter(|q| self.0.contains_key(q.id))
            .count();
        Progress {
            answered,
            total: questions.len(),
            complete: answered == questions.len(),
        }
    }

    /// Answer ids that do not belong to `questions`.
    pub fn unknown_ids<'a>(&'a self, questions: &'a [Question]) -> impl Iterator<Item = &'a str> {
        self.0
            .keys()
            .map(String::as_str)
            .filter(move |id| !questions.iter().any(|q| q.id == *id))
    }
}

impl<S: Into<String>> FromIterator<(S, LikertScore)> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = (S, LikertScore)>>(iter: I) -> Self {
        let mut answers = AnswerSet::new();
        for (question_id, score) in iter {
            answers.record(question_id, score);
        }
        answers
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_bank_has_two_questions_per_domain() {
        for domain in InterestDomain::ALL {
            let count = QUESTIONS.iter().filter(|q| q.domain == domain).count();
            assert_eq!(count, 2, "{domain} has {count} questions");
        }
    }

    #[test]
    fn test_question_ids_unique() {
        let ids: HashSet<&str> = QUESTIONS.iter().map(|q| q.id).collect();
        assert_eq!(ids.len(), QUESTIONS.len());
    }

    #[test]
    fn test_likert_bounds() {
        assert!(LikertScore::new(0).is_none());
        assert!(LikertScore::new(6).is_none());
        assert_eq!(LikertScore::new(1).unwrap().label(), "Strongly Disagree");
        assert_eq!(LikertScore::new(5).unwrap().label(), "Strongly Agree");
    }

    #[test]
    fn test_likert_deserialize_rejects_out_of_range() {
        assert!(serde_json::from_str::<LikertScore>("7").is_err());
        assert!(serde_json::from_str::<LikertScore>("0").is_err());
        assert_eq!(serde_json::from_str::<LikertScore>("3").unwrap().value(), 3);
    }

    #[test]
    fn test_answer_set_from_json_map() {
        let answers: AnswerSet = serde_json::from_str(r#"{"1": 5, "11": 4}"#).unwrap();
        assert_eq!(answers.len(), 2);
        assert_eq!(answers.get("11").map(LikertScore::value), Some(4));
        assert!(answers.get("2").is_none());
    }

    #[test]
    fn test_record_replaces_previous_answer() {
        let mut answers = AnswerSet::new();
        answers.record("3", LikertScore::new(2).unwrap());
        answers.record("3", LikertScore::new(5).unwrap());
        assert_eq!(answers.len(), 1);
        assert_eq!(answers.get("3").map(LikertScore::value), Some(5));
    }

    #[test]
    fn test_collect_keeps_last_answer_per_question() {
        let answers: AnswerSet = [
            ("7", LikertScore::new(1).unwrap()),
            ("8", LikertScore::new(2).unwrap()),
            ("7", LikertScore::new(4).unwrap()),
        ]
        .into_iter()
        .collect();
        assert_eq!(answers.len(), 2);
        assert_eq!(answers.get("7").map(LikertScore::value), Some(4));
    }

    #[test]
    fn test_progress_ignores_unknown_ids() {
        let answers: AnswerSet = [
            ("1", LikertScore::new(3).unwrap()),
            ("99", LikertScore::new(3).unwrap()),
        ]
        .into_iter()
        .collect();

        let progress = answers.progress(&QUESTIONS);
        assert_eq!(progress.answered, 1);
        assert_eq!(progress.total, 20);
        assert!(!progress.complete);
        assert_eq!(answers.unknown_ids(&QUESTIONS).collect::<Vec<_>>(), vec!["99"]);
    }

    #[test]
    fn test_progress_complete_when_all_answered() {
        let answers: AnswerSet = QUESTIONS
            .iter()
            .map(|q| (q.id, LikertScore::new(4).unwrap()))
            .collect();
        assert!(answers.progress(&QUESTIONS).complete);
    }

    #[test]
    fn test_likert_options_cover_scale() {
        let options = likert_options();
        assert_eq!(options.len(), 5);
        assert_eq!(options[2].value, 3);
        assert_eq!(options[2].label, "Neutral");
    }
}
