use colored::{ColoredString, Colorize};
use readback_scoring_rs::{ScoreCategory, ScoreResult, generate_detailed_feedback};

use crate::{scenario::Scenario, session::SessionStats};

fn paint_score(score: u32) -> ColoredString {
    let text = format!("{score}%");
    match ScoreCategory::from_score(score) {
        ScoreCategory::Excellent => text.green().bold(),
        ScoreCategory::Good => text.yellow().bold(),
        ScoreCategory::NeedsWork => text.red().bold(),
    }
}

/// Terminal rendering of a scored read-back.
pub fn render_result(
    scenario: &Scenario,
    result: &ScoreResult,
    show_perfect_response: bool,
) -> String {
    let category = ScoreCategory::from_score(result.score);
    let mut out = format!(
        "Score: {} ({}/{} keywords, {category})\n{}\n",
        paint_score(result.score),
        result.matches,
        result.total,
        result.feedback.bold()
    );
    if !result.present.is_empty() {
        out.push_str(&format!(
            "  {} {}\n",
            "present:".green(),
            result.present.join(", ")
        ));
    }
    if !result.missing.is_empty() {
        out.push_str(&format!(
            "  {} {}\n",
            "missing:".red(),
            result.missing.join(", ")
        ));
    }
    let tips = generate_detailed_feedback(
        &result.missing,
        &result.present,
        scenario.scenario_type.as_ref(),
    );
    for tip in tips {
        out.push_str(&format!("  - {tip}\n"));
    }
    if show_perfect_response && !scenario.perfect_response.is_empty() {
        out.push_str(&format!(
            "Reference: {}\n",
            scenario.perfect_response.italic()
        ));
    }
    out
}

pub fn render_session(stats: &SessionStats) -> String {
    format!(
        "Attempts: {}  Average: {}  Best: {}",
        stats.total_attempts,
        paint_score(stats.average_score()),
        paint_score(stats.best_score)
    )
}
