//! Aviation Helper Library
//!
//! Shared radio-telephony vocabulary for the phraseology trainer: the spelling
//! alphabet, commonly confused number words, airline callsign prefixes and the
//! scenario/phraseology value types.

pub mod clearance;
pub mod errors;
pub mod phonetics;
pub mod types;

pub use errors::Error;
