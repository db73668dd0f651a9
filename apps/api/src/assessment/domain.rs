use serde::{Deserialize, Serialize};

/// The closed set of career-interest categories scored by the assessment.
///
/// Variant order is significant: it drives score-vector indexing, chart point
/// order and the order domains appear in the recommendation prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum InterestDomain {
    #[serde(rename = "Technology & Computing")]
    Technology,
    #[serde(rename = "Science & Research")]
    Science,
    #[serde(rename = "Mathematics & Analytics")]
    Math,
    #[serde(rename = "Creativity & Design")]
    Creativity,
    #[serde(rename = "Management & Leadership")]
    Management,
    #[serde(rename = "Communication & Languages")]
    Communication,
    #[serde(rename = "Healthcare & Helping Professions")]
    Healthcare,
    #[serde(rename = "Social Service & Community Work")]
    SocialService,
    #[serde(rename = "Entrepreneurship & Innovation")]
    Entrepreneurship,
    #[serde(rename = "Sports & Physical Activities")]
    Sports,
}

impl InterestDomain {
    pub const COUNT: usize = 10;

    pub const ALL: [InterestDomain; InterestDomain::COUNT] = [
        InterestDomain::Technology,
        InterestDomain::Science,
        InterestDomain::Math,
        InterestDomain::Creativity,
        InterestDomain::Management,
        InterestDomain::Communication,
        InterestDomain::Healthcare,
        InterestDomain::SocialService,
        InterestDomain::Entrepreneurship,
        InterestDomain::Sports,
    ];

    /// Position of this domain in `ALL`.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Full display label. Matches the serde representation.
    pub fn label(self) -> &'static str {
        match self {
            InterestDomain::Technology => "Technology & Computing",
            InterestDomain::Science => "Science & Research",
            InterestDomain::Math => "Mathematics & Analytics",
            InterestDomain::Creativity => "Creativity & Design",
            InterestDomain::Management => "Management & Leadership",
            InterestDomain::Communication => "Communication & Languages",
            InterestDomain::Healthcare => "Healthcare & Helping Professions",
            InterestDomain::SocialService => "Social Service & Community Work",
            InterestDomain::Entrepreneurship => "Entrepreneurship & Innovation",
            InterestDomain::Sports => "Sports & Physical Activities",
        }
    }

    /// Axis label for the radar chart: the first word of the full label.
    pub fn short_label(self) -> &'static str {
        let label = self.label();
        label.split(' ').next().unwrap_or(label)
    }

    /// Chart series colour (hex).
    pub fn color(self) -> &'static str {
        match self {
            InterestDomain::Technology => "#3b82f6",
            InterestDomain::Science => "#10b981",
            InterestDomain::Math => "#6366f1",
            InterestDomain::Creativity => "#ec4899",
            InterestDomain::Management => "#f59e0b",
            InterestDomain::Communication => "#8b5cf6",
            InterestDomain::Healthcare => "#ef4444",
            InterestDomain::SocialService => "#06b6d4",
            InterestDomain::Entrepreneurship => "#f97316",
            InterestDomain::Sports => "#84cc16",
        }
    }
}

impl std::fmt::Display for InterestDomain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
