use std::sync::LazyLock;

use aviation_helper_rs::types::phraseology::Phraseology;
use regex::{NoExpand, Regex};

use super::Scenario;

static POINT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\bpoint\b").unwrap());

// US operators and places swapped for European ones, applied in order.
static EUROPEAN_SWAPS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        (r"(?i)\bDelta\b", "Lufthansa"),
        (r"(?i)\bUnited\b", "British Airways"),
        (r"(?i)\bSpirit\b", "Ryanair"),
        (r"(?i)\bJetBlue\b", "EasyJet"),
        (r"(?i)Atlanta Hartsfield", "London Heathrow"),
        (r"(?i)Chicago O'?Hare", "Paris Charles de Gaulle"),
        (r"(?i)Orlando International", "Amsterdam Schiphol"),
        (r"(?i)Dallas Love Field", "Berlin Brandenburg"),
        (r"(?i)Miami International", "Madrid Barajas"),
        (r"(?i)Houston Center", "Brussels Control"),
    ]
    .into_iter()
    .map(|(pattern, replacement)| (Regex::new(pattern).unwrap(), replacement))
    .collect()
});

/// ICAO wording for numbers: "point" becomes "decimal".
pub fn convert_to_icao(text: &str) -> String {
    POINT.replace_all(text, NoExpand("decimal")).into_owned()
}

pub fn apply_european_flavor(text: &str) -> String {
    EUROPEAN_SWAPS
        .iter()
        .fold(text.to_owned(), |acc, (pattern, replacement)| {
            pattern.replace_all(&acc, NoExpand(*replacement)).into_owned()
        })
}

/// Present `scenario` in the given phraseology. FAA is the form scenarios are
/// written in; ICAO rewrites the call, the reference read-back and every
/// expected keyword.
pub fn transform(scenario: &Scenario, phraseology: Phraseology) -> Scenario {
    match phraseology {
        Phraseology::Faa => scenario.clone(),
        Phraseology::Icao => {
            let convert = |text: &str| apply_european_flavor(&convert_to_icao(text));
            Scenario {
                atc_call: convert(scenario.atc_call.as_str()),
                perfect_response: convert(scenario.perfect_response.as_str()),
                expected_keywords: scenario
                    .expected_keywords
                    .iter()
                    .map(|k| convert(k.as_str()))
                    .collect(),
                ..scenario.clone()
            }
        }
    }
}
