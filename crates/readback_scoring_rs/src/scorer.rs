use log::debug;
use serde::{Deserialize, Serialize};
use strum::Display;

use crate::{matcher::normalized_keyword_exists, normalize::normalize_text};

/// Summary sentence attached to a [`ScoreResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum FeedbackBand {
    #[strum(to_string = "Excellent! Perfect phraseology.")]
    Excellent,
    #[strum(to_string = "Good response! Minor elements missing.")]
    Good,
    #[strum(to_string = "Decent attempt, but several key elements missing.")]
    Decent,
    #[strum(to_string = "Needs improvement. Focus on including all required elements.")]
    NeedsImprovement,
    #[strum(to_string = "No response detected")]
    NoResponse,
}

impl FeedbackBand {
    /// Band for a percentage score. Lower bounds are inclusive.
    pub fn from_score(score: u32) -> Self {
        match score {
            90.. => FeedbackBand::Excellent,
            75.. => FeedbackBand::Good,
            50.. => FeedbackBand::Decent,
            _ => FeedbackBand::NeedsImprovement,
        }
    }
}

/// Outcome of scoring one read-back.
///
/// `present` and `missing` partition the expected keywords, each keeping the
/// order and casing the keywords were supplied in.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ScoreResult {
    pub score: u32,
    pub matches: usize,
    pub total: usize,
    pub missing: Vec<String>,
    pub present: Vec<String>,
    pub feedback: String,
}

impl ScoreResult {
    fn no_response<K: AsRef<str>>(expected_keywords: &[K]) -> Self {
        Self {
            score: 0,
            matches: 0,
            total: expected_keywords.len(),
            missing: expected_keywords
                .iter()
                .map(|k| k.as_ref().to_owned())
                .collect(),
            present: Vec::new(),
            feedback: FeedbackBand::NoResponse.to_string(),
        }
    }
}

/// Score `transcript` against the keywords a correct read-back must contain.
pub fn score_response<K: AsRef<str>>(expected_keywords: &[K], transcript: &str) -> ScoreResult {
    score_transcript(expected_keywords, Some(transcript))
}

/// Like [`score_response`], for a transcript that may not exist at all.
/// A missing or blank transcript yields the "No response detected" result.
pub fn score_transcript<K: AsRef<str>>(
    expected_keywords: &[K],
    transcript: Option<&str>,
) -> ScoreResult {
    let Some(transcript) = transcript.filter(|t| !is_blank(t)) else {
        debug!("No response to score");
        return ScoreResult::no_response(expected_keywords);
    };

    let normalized_transcript = normalize_text(transcript);
    let (present, missing): (Vec<String>, Vec<String>) = expected_keywords
        .iter()
        .map(|k| k.as_ref().to_owned())
        .partition(|keyword| {
            normalized_keyword_exists(&normalize_text(keyword), &normalized_transcript)
        });

    let total = expected_keywords.len();
    let score = percentage(present.len(), total);
    debug!(
        "Scored read-back '{normalized_transcript}': {}/{total} keywords, {score}%",
        present.len()
    );

    ScoreResult {
        score,
        matches: present.len(),
        total,
        missing,
        present,
        feedback: FeedbackBand::from_score(score).to_string(),
    }
}

// Whitespace as JavaScript's `trim` sees it, which includes the byte order mark.
fn is_blank(text: &str) -> bool {
    text.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
        .is_empty()
}

fn percentage(matches: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((matches as f64 / total as f64) * 100.0).round() as u32
}
