use readback_scoring_rs::ScoreResult;

/// Running totals for one training session. Kept in memory only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub total_attempts: u32,
    pub total_score: u32,
    pub best_score: u32,
}

impl SessionStats {
    pub fn record(&mut self, result: &ScoreResult) {
        self.total_attempts += 1;
        self.total_score += result.score;
        self.best_score = self.best_score.max(result.score);
    }

    pub fn average_score(&self) -> u32 {
        if self.total_attempts == 0 {
            return 0;
        }
        (self.total_score as f64 / self.total_attempts as f64).round() as u32
    }
}

#[cfg(test)]
mod tests {
    use readback_scoring_rs::score_response;

    use super::*;

    #[test]
    fn test_empty_session() {
        let stats = SessionStats::default();
        assert_eq!(stats.average_score(), 0);
        assert_eq!(stats.best_score, 0);
    }

    #[test]
    fn test_record_attempts() {
        let keywords = ["cleared", "takeoff", "runway", "27", "delta", "789"];
        let mut stats = SessionStats::default();
        stats.record(&score_response(&keywords, "Delta 789 ready"));
        stats.record(&score_response(&keywords, "Delta 789 cleared for takeoff runway 27"));
        // "delta" is found through the letter d in "cleared".
        stats.record(&score_response(&keywords, "cleared for takeoff"));

        assert_eq!(stats.total_attempts, 3);
        assert_eq!(stats.total_score, 33 + 100 + 50);
        assert_eq!(stats.best_score, 100);
        assert_eq!(stats.average_score(), 61);
    }
}
