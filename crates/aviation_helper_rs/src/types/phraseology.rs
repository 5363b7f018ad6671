use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator};

use crate::errors::Error;

/// Radio-telephony convention the scenarios are presented in.
#[derive(
    Debug, Clone, Copy, Default, Hash, PartialEq, Eq, Deserialize, Serialize, Display, EnumIter,
)]
pub enum Phraseology {
    /// US conventions, the form the scenarios are written in.
    #[default]
    #[strum(to_string = "FAA")]
    Faa,
    /// ICAO conventions with European operators and airports.
    #[strum(to_string = "ICAO")]
    Icao,
}

impl FromStr for Phraseology {
    type Err = Error;

    fn from_str(val: &str) -> Result<Self, Self::Err> {
        let val = val.trim();
        Phraseology::iter()
            .find(|p| p.to_string().eq_ignore_ascii_case(val))
            .ok_or_else(|| Error::InvalidPhraseology(val.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_phraseology() {
        assert_eq!("faa".parse::<Phraseology>(), Ok(Phraseology::Faa));
        assert_eq!(" ICAO ".parse::<Phraseology>(), Ok(Phraseology::Icao));
        assert!(matches!(
            "caa".parse::<Phraseology>(),
            Err(Error::InvalidPhraseology(_))
        ));
        assert_eq!(Phraseology::default().to_string(), "FAA");
    }
}
