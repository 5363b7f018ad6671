use serde::{Deserialize, Serialize};
use strum::{Display, IntoStaticStr};

/// Coarse grouping of a score for presentation.
///
/// Thresholds differ from [`crate::FeedbackBand`] on purpose; the two answer
/// different questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Display, IntoStaticStr)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ScoreCategory {
    Excellent,
    Good,
    NeedsWork,
}

impl ScoreCategory {
    pub fn from_score(score: u32) -> Self {
        match score {
            80.. => ScoreCategory::Excellent,
            60.. => ScoreCategory::Good,
            _ => ScoreCategory::NeedsWork,
        }
    }
}

/// Style class name for a score: `excellent`, `good` or `needs-work`.
pub fn get_score_category(score: u32) -> &'static str {
    ScoreCategory::from_score(score).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories() {
        assert_eq!(get_score_category(85), "excellent");
        assert_eq!(get_score_category(65), "good");
        assert_eq!(get_score_category(40), "needs-work");
    }

    #[test]
    fn test_boundaries() {
        assert_eq!(ScoreCategory::from_score(100), ScoreCategory::Excellent);
        assert_eq!(ScoreCategory::from_score(80), ScoreCategory::Excellent);
        assert_eq!(ScoreCategory::from_score(79), ScoreCategory::Good);
        assert_eq!(ScoreCategory::from_score(60), ScoreCategory::Good);
        assert_eq!(ScoreCategory::from_score(59), ScoreCategory::NeedsWork);
        assert_eq!(ScoreCategory::from_score(0), ScoreCategory::NeedsWork);
    }

    #[test]
    fn test_display_matches_class_name() {
        assert_eq!(ScoreCategory::NeedsWork.to_string(), "needs-work");
    }
}
