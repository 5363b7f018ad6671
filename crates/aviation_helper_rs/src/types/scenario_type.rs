use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, IntoEnumIterator};

use crate::errors::Error;

/// Phase of flight a training scenario belongs to.
#[derive(
    Debug, Clone, Copy, Hash, PartialEq, Eq, Deserialize, Serialize, AsRefStr, Display, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ScenarioType {
    IfrClearance,
    Pushback,
    TaxiOut,
    Takeoff,
    Departure,
    Center,
    Approach,
    Arrival,
    TaxiIn,
}

impl ScenarioType {
    pub fn label(self) -> &'static str {
        match self {
            ScenarioType::IfrClearance => "IFR Clearance",
            ScenarioType::Pushback => "Pushback & Engine Start",
            ScenarioType::TaxiOut => "Taxi Instructions (Departure)",
            ScenarioType::Takeoff => "Takeoff Clearance",
            ScenarioType::Departure => "Departure",
            ScenarioType::Center => "Center",
            ScenarioType::Approach => "Approach Control",
            ScenarioType::Arrival => "Arrival",
            ScenarioType::TaxiIn => "Taxi at Arrival",
        }
    }
}

impl FromStr for ScenarioType {
    type Err = Error;

    fn from_str(val: &str) -> Result<Self, Self::Err> {
        let val = val.trim();
        ScenarioType::iter()
            .find(|t| t.as_ref().eq_ignore_ascii_case(val))
            .ok_or_else(|| Error::InvalidScenarioType(val.to_owned()))
    }
}

/// Filter over scenario types; `all` selects every scenario.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScenarioSelection {
    #[default]
    All,
    Only(ScenarioType),
}

impl ScenarioSelection {
    pub fn includes(self, scenario_type: ScenarioType) -> bool {
        match self {
            ScenarioSelection::All => true,
            ScenarioSelection::Only(t) => t == scenario_type,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ScenarioSelection::All => "All Scenarios",
            ScenarioSelection::Only(t) => t.label(),
        }
    }
}

impl FromStr for ScenarioSelection {
    type Err = Error;

    fn from_str(val: &str) -> Result<Self, Self::Err> {
        if val.trim().eq_ignore_ascii_case("all") {
            return Ok(ScenarioSelection::All);
        }
        val.parse().map(ScenarioSelection::Only)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_scenario_type() {
        assert_eq!("taxi_out".parse::<ScenarioType>(), Ok(ScenarioType::TaxiOut));
        assert_eq!(
            "IFR_CLEARANCE".parse::<ScenarioType>(),
            Ok(ScenarioType::IfrClearance)
        );
        assert_eq!(
            "holding".parse::<ScenarioType>(),
            Err(Error::InvalidScenarioType("holding".to_owned()))
        );
    }

    #[test]
    fn test_display_matches_parse() {
        for t in ScenarioType::iter() {
            assert_eq!(t.to_string().parse::<ScenarioType>(), Ok(t));
        }
        assert_eq!(ScenarioType::TaxiIn.to_string(), "taxi_in");
    }

    #[test]
    fn test_selection() {
        assert_eq!("all".parse::<ScenarioSelection>(), Ok(ScenarioSelection::All));
        let takeoff = "takeoff".parse::<ScenarioSelection>().unwrap();
        assert!(takeoff.includes(ScenarioType::Takeoff));
        assert!(!takeoff.includes(ScenarioType::Arrival));
        assert!(ScenarioSelection::All.includes(ScenarioType::Arrival));
        assert_eq!(takeoff.label(), "Takeoff Clearance");
    }
}
