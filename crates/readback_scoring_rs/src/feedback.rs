use std::{fmt::Display, sync::LazyLock};

use aviation_helper_rs::clearance::airlines::is_known_callsign_prefix;
use log::trace;
use regex::Regex;

// Callsign with a flight number, e.g. "delta789" or "N 1234".
static CALLSIGN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]+\s*[0-9]+$").unwrap());
// Runway designator, e.g. "27" or "22R".
static RUNWAY_DESIGNATOR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+[lrLR]?$").unwrap());

pub const ACTION_WORDS: &[&str] = &["cleared", "taxi", "contact", "turn", "descend", "maintain"];

const MAX_LISTED_ELEMENTS: usize = 3;

/// Actionable hint derived from a scored read-back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackTip {
    MissingCallsign,
    MissingActionWords(Vec<String>),
    IncompleteRunwayInfo,
    MissingElements {
        listed: Vec<String>,
        truncated: bool,
    },
}

impl Display for FeedbackTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeedbackTip::MissingCallsign => {
                write!(f, "Remember to include your full callsign in the readback")
            }
            FeedbackTip::MissingActionWords(words) => {
                write!(f, "Missing key action words: {}", words.join(", "))
            }
            FeedbackTip::IncompleteRunwayInfo => {
                write!(f, "Include complete runway information (number and side)")
            }
            FeedbackTip::MissingElements { listed, truncated } => {
                write!(f, "Missing elements: {}", listed.join(", "))?;
                if *truncated {
                    write!(f, "...")?;
                }
                Ok(())
            }
        }
    }
}

/// Tips for a read-back, in a fixed order: callsign, action words, runway
/// information. When none of those apply but keywords were missed, a single
/// tip lists the first few missing keywords.
///
/// `scenario_type` does not influence the tips yet.
pub fn detailed_feedback<M, P>(missing: &[M], present: &[P], scenario_type: &str) -> Vec<FeedbackTip>
where
    M: AsRef<str>,
    P: AsRef<str>,
{
    trace!("Building feedback for {scenario_type} read-back");
    let mut tips: Vec<FeedbackTip> = [
        callsign_tip(present),
        action_words_tip(missing),
        runway_tip(missing),
    ]
    .into_iter()
    .flatten()
    .collect();

    if tips.is_empty() && !missing.is_empty() {
        tips.push(FeedbackTip::MissingElements {
            listed: missing
                .iter()
                .take(MAX_LISTED_ELEMENTS)
                .map(|m| m.as_ref().to_owned())
                .collect(),
            truncated: missing.len() > MAX_LISTED_ELEMENTS,
        });
    }
    tips
}

/// [`detailed_feedback`] rendered as sentences.
pub fn generate_detailed_feedback<M, P>(
    missing: &[M],
    present: &[P],
    scenario_type: &str,
) -> Vec<String>
where
    M: AsRef<str>,
    P: AsRef<str>,
{
    detailed_feedback(missing, present, scenario_type)
        .iter()
        .map(ToString::to_string)
        .collect()
}

fn callsign_tip<P: AsRef<str>>(present: &[P]) -> Option<FeedbackTip> {
    let has_callsign = present.iter().map(AsRef::<str>::as_ref).any(|item| {
        CALLSIGN_PATTERN.is_match(item) || is_known_callsign_prefix(item)
    });
    (!has_callsign).then_some(FeedbackTip::MissingCallsign)
}

fn action_words_tip<M: AsRef<str>>(missing: &[M]) -> Option<FeedbackTip> {
    let words: Vec<String> = missing
        .iter()
        .map(AsRef::<str>::as_ref)
        .filter(|item| ACTION_WORDS.contains(&item.to_lowercase().as_str()))
        .map(str::to_owned)
        .collect();
    (!words.is_empty()).then_some(FeedbackTip::MissingActionWords(words))
}

fn runway_tip<M: AsRef<str>>(missing: &[M]) -> Option<FeedbackTip> {
    let incomplete = missing.iter().map(AsRef::<str>::as_ref).any(|item| {
        let item = item.to_lowercase();
        item.contains("runway")
            || item == "left"
            || item == "right"
            || RUNWAY_DESIGNATOR_PATTERN.is_match(&item)
    });
    incomplete.then_some(FeedbackTip::IncompleteRunwayInfo)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const NONE: [&str; 0] = [];

    #[test]
    fn test_action_and_runway_tips() {
        let tips = generate_detailed_feedback(&["cleared", "runway"], &["delta", "789"], "taxi_out");
        assert_eq!(
            tips,
            vec![
                "Missing key action words: cleared",
                "Include complete runway information (number and side)",
            ]
        );
    }

    #[test]
    fn test_missing_callsign() {
        let tips = detailed_feedback(&["wind"], &["cleared", "takeoff"], "takeoff");
        assert_eq!(tips, vec![FeedbackTip::MissingCallsign]);
        assert_eq!(
            tips[0].to_string(),
            "Remember to include your full callsign in the readback"
        );
    }

    #[test]
    fn test_callsign_recognition() {
        assert_eq!(callsign_tip(&["Speedbird 12"]), None);
        assert_eq!(callsign_tip(&["N1234"]), None);
        assert_eq!(callsign_tip(&["JetBlue"]), None);
        assert_eq!(callsign_tip(&["789"]), Some(FeedbackTip::MissingCallsign));
        assert_eq!(callsign_tip(&["delta 789 heavy"]), Some(FeedbackTip::MissingCallsign));
        assert_eq!(callsign_tip(&NONE), Some(FeedbackTip::MissingCallsign));
    }

    #[test]
    fn test_callsign_letters_are_ascii_only() {
        // Long s and the Kelvin sign fold to ASCII letters under Unicode case folding.
        assert_eq!(callsign_tip(&["\u{17F}12"]), Some(FeedbackTip::MissingCallsign));
        assert_eq!(callsign_tip(&["\u{212A}LM 1"]), Some(FeedbackTip::MissingCallsign));
        let tips = generate_detailed_feedback(&["x"], &["\u{17F}12"], "center");
        assert_eq!(
            tips,
            vec!["Remember to include your full callsign in the readback"]
        );
    }

    #[test]
    fn test_action_words_keep_order_and_casing() {
        let tips = detailed_feedback(
            &["Maintain", "5000", "CONTACT", "departure", "taxi"],
            &["united", "456"],
            "ifr_clearance",
        );
        assert_eq!(
            tips[0].to_string(),
            "Missing key action words: Maintain, CONTACT, taxi"
        );
    }

    #[test]
    fn test_runway_designators() {
        assert_eq!(runway_tip(&["22R"]), Some(FeedbackTip::IncompleteRunwayInfo));
        assert_eq!(runway_tip(&["9"]), Some(FeedbackTip::IncompleteRunwayInfo));
        assert_eq!(runway_tip(&["Left"]), Some(FeedbackTip::IncompleteRunwayInfo));
        assert_eq!(runway_tip(&["Runway27"]), Some(FeedbackTip::IncompleteRunwayInfo));
        assert_eq!(runway_tip(&["121.9"]), None);
        assert_eq!(runway_tip(&["22C"]), None);
        assert_eq!(runway_tip(&["leftmost"]), None);
    }

    #[test]
    fn test_fallback_lists_first_three() {
        let tips = generate_detailed_feedback(
            &["squawk", "ident", "altimeter", "ahead"],
            &["november", "1234"],
            "center",
        );
        assert_eq!(tips, vec!["Missing elements: squawk, ident, altimeter..."]);

        let tips = generate_detailed_feedback(&["squawk", "ident"], &["november"], "center");
        assert_eq!(tips, vec!["Missing elements: squawk, ident"]);
    }

    #[test]
    fn test_fallback_only_when_nothing_else_applies() {
        let tips = generate_detailed_feedback(&["squawk", "ident"], &NONE, "center");
        assert_eq!(
            tips,
            vec!["Remember to include your full callsign in the readback"]
        );
    }

    #[test]
    fn test_nothing_missing() {
        let tips = generate_detailed_feedback(&NONE, &["delta", "789"], "unknown");
        assert!(tips.is_empty());
    }
}
