use thiserror::Error;
#[derive(Error, Debug)]
pub enum Error {
    #[error("Std Io Error!")]
    StdIo(#[from] std::io::Error),
    #[error("Ron deserialization failed!")]
    RonDeserialize(#[from] ron::error::SpannedError),
    #[error("Duplicate scenario id: {}",.0)]
    DuplicateScenarioId(u32),
    #[error("Scenario {} has no expected keywords",.0)]
    NoExpectedKeywords(u32),
    #[error("Unknown scenario id: {}",.0)]
    UnknownScenario(u32),
    #[error("Scenario catalog is empty!")]
    EmptyCatalog,
}
