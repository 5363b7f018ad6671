//! Read-back Scoring Library
//!
//! Scores a transcribed pilot read-back against the keywords an ATC
//! instruction requires. Matching is tolerant of case, punctuation and
//! spelling-alphabet substitutions ("alpha" heard as "a" and vice versa).
//!
//! Every function here is pure; scoring never fails. A blank transcript or an
//! empty keyword list simply yields a zero score.

pub mod category;
pub mod feedback;
pub mod matcher;
pub mod normalize;
pub mod scorer;

pub use category::{ScoreCategory, get_score_category};
pub use feedback::{FeedbackTip, detailed_feedback, generate_detailed_feedback};
pub use matcher::keyword_exists;
pub use normalize::normalize_text;
pub use scorer::{FeedbackBand, ScoreResult, score_response, score_transcript};
