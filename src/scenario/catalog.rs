use std::{collections::HashSet, fs::File, io::Read, path::Path};

use aviation_helper_rs::types::scenario_type::ScenarioSelection;
use log::{debug, info};
use rand::{Rng, seq::IndexedRandom};
use serde::Deserialize;

use super::Scenario;
use crate::errors::Error;

const EMBEDDED_SCENARIOS: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/scenarios.ron"));

#[derive(Debug, Clone, Deserialize)]
struct ScenarioFile {
    scenarios: Vec<Scenario>,
}

/// Validated set of training scenarios.
#[derive(Debug, Clone)]
pub struct ScenarioCatalog {
    scenarios: Vec<Scenario>,
}

impl ScenarioCatalog {
    /// The scenarios shipped with the trainer.
    pub fn embedded() -> Result<Self, Error> {
        Self::from_ron_str(EMBEDDED_SCENARIOS)
    }

    pub fn load<R>(mut reader: R) -> Result<Self, Error>
    where
        R: Read,
    {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;
        Self::from_ron_str(&content)
    }

    pub fn load_from_file(path: &Path) -> Result<Self, Error> {
        info!("Loading scenarios from {}", path.display());
        let file = File::open(path)?;
        Self::load(file)
    }

    pub fn from_ron_str(content: &str) -> Result<Self, Error> {
        let ScenarioFile { scenarios } = ron::from_str(content)?;
        Self::new(scenarios)
    }

    pub fn new(scenarios: Vec<Scenario>) -> Result<Self, Error> {
        let mut ids = HashSet::with_capacity(scenarios.len());
        for scenario in &scenarios {
            if !ids.insert(scenario.id) {
                return Err(Error::DuplicateScenarioId(scenario.id));
            }
            if scenario.expected_keywords.is_empty() {
                return Err(Error::NoExpectedKeywords(scenario.id));
            }
        }
        debug!("Scenario catalog with {} entries", scenarios.len());
        Ok(Self { scenarios })
    }

    pub fn scenarios(&self) -> &[Scenario] {
        &self.scenarios
    }

    pub fn get(&self, id: u32) -> Option<&Scenario> {
        self.scenarios.iter().find(|s| s.id == id)
    }

    pub fn by_selection(&self, selection: ScenarioSelection) -> impl Iterator<Item = &Scenario> {
        self.scenarios
            .iter()
            .filter(move |s| selection.includes(s.scenario_type))
    }

    /// Random scenario of the selected type. Falls back to the whole catalog
    /// when no scenario has that type.
    pub fn random<R>(&self, selection: ScenarioSelection, rng: &mut R) -> Option<&Scenario>
    where
        R: Rng + ?Sized,
    {
        let pool: Vec<&Scenario> = self.by_selection(selection).collect();
        if pool.is_empty() {
            debug!("No scenarios for {}, picking from all", selection.label());
            return self.scenarios.choose(rng);
        }
        pool.choose(rng).copied()
    }
}
