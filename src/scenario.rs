use aviation_helper_rs::types::{phraseology::Phraseology, scenario_type::ScenarioType};
use serde::{Deserialize, Serialize};

pub mod callsign;
pub mod catalog;
pub mod phraseology;

/// One ATC instruction the trainee has to read back.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Scenario {
    pub id: u32,
    pub scenario_type: ScenarioType,
    pub atc_call: String,
    pub expected_keywords: Vec<String>,
    /// Reference read-back; empty when the scenario has none.
    #[serde(default)]
    pub perfect_response: String,
}

impl Scenario {
    /// The scenario as presented to a trainee: own callsign merged in, then
    /// converted to the chosen phraseology.
    pub fn personalize(&self, callsign: Option<&str>, phraseology: Phraseology) -> Scenario {
        let merged = match callsign {
            Some(callsign) => callsign::merge_callsign(self, callsign),
            None => self.clone(),
        };
        phraseology::transform(&merged, phraseology)
    }
}

#[cfg(test)]
pub(crate) fn test_scenario() -> Scenario {
    Scenario {
        id: 6,
        scenario_type: ScenarioType::TaxiOut,
        atc_call: "Delta 789, taxi to runway 27 via Alpha, hold short runway 22R".to_owned(),
        expected_keywords: ["taxi", "runway", "27", "alpha", "hold", "short", "22r", "delta", "789"]
            .map(str::to_owned)
            .to_vec(),
        perfect_response: "Taxi to runway 27 via Alpha, hold short runway 22 Right, Delta 789"
            .to_owned(),
    }
}
