use super::Scenario;

/// Put the trainee's own callsign into a scenario.
///
/// The ATC call is addressed to `callsign`, the reference read-back ends with
/// it, and its words become expected keywords. A blank callsign leaves the
/// scenario as it is.
pub fn merge_callsign(scenario: &Scenario, callsign: &str) -> Scenario {
    let callsign = callsign.trim();
    if callsign.is_empty() {
        return scenario.clone();
    }

    let atc_call = match scenario.atc_call.find(',') {
        Some(first_comma) => format!("{callsign}{}", &scenario.atc_call[first_comma..]),
        None => format!("{callsign}, {}", scenario.atc_call),
    };

    let perfect_response = if scenario.perfect_response.is_empty() {
        String::new()
    } else {
        match scenario.perfect_response.rfind(',') {
            Some(last_comma) => {
                format!("{} {callsign}", &scenario.perfect_response[..=last_comma])
            }
            None => format!("{}, {callsign}", scenario.perfect_response),
        }
    };

    let callsign_words = callsign.to_lowercase();
    let mut expected_keywords: Vec<String> = Vec::with_capacity(scenario.expected_keywords.len() + 2);
    for keyword in scenario
        .expected_keywords
        .iter()
        .map(String::as_str)
        .chain(callsign_words.split_whitespace())
    {
        if !expected_keywords.iter().any(|k| k == keyword) {
            expected_keywords.push(keyword.to_owned());
        }
    }

    Scenario {
        atc_call,
        expected_keywords,
        perfect_response,
        ..scenario.clone()
    }
}
