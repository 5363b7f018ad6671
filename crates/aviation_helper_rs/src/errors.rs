use thiserror::Error;
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid scenario type: {}",.0)]
    InvalidScenarioType(String),
    #[error("Invalid phraseology: {}",.0)]
    InvalidPhraseology(String),
}
