use std::path::PathBuf;

use aviation_helper_rs::types::{phraseology::Phraseology, scenario_type::ScenarioSelection};
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "atc-trainer")]
#[command(about = "Practise ATC read-backs and get them scored", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Scenario file (RON) to use instead of the built-in scenarios
    #[arg(long, env = "ATC_SCENARIOS_PATH", global = true)]
    pub scenarios: Option<PathBuf>,

    /// Your callsign, merged into every scenario
    #[arg(long, env = "ATC_CALLSIGN", global = true)]
    pub callsign: Option<String>,

    /// Phraseology convention (FAA or ICAO)
    #[arg(
        long,
        env = "ATC_PHRASEOLOGY",
        default_value = "FAA",
        value_parser = str::parse::<Phraseology>,
        global = true
    )]
    pub phraseology: Phraseology,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the available scenarios
    List {
        /// Scenario type, or "all"
        #[arg(long = "type", default_value = "all", value_parser = str::parse::<ScenarioSelection>)]
        selection: ScenarioSelection,
    },
    /// Score a single read-back
    Score {
        /// Scenario id
        #[arg(long)]
        scenario: u32,

        /// Transcript of the read-back (read from stdin when omitted)
        #[arg(long)]
        transcript: Option<String>,

        /// Print the score result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Read back random scenarios, one transcript line per round
    Practice {
        /// Scenario type, or "all"
        #[arg(long = "type", default_value = "all", value_parser = str::parse::<ScenarioSelection>)]
        selection: ScenarioSelection,

        /// Stop after this many rounds (default: until end of input)
        #[arg(long)]
        rounds: Option<u32>,
    },
}
