pub mod phraseology;
pub mod scenario_type;
