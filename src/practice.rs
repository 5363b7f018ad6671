use std::io::{BufRead, Write};

use aviation_helper_rs::types::{phraseology::Phraseology, scenario_type::ScenarioSelection};
use log::{debug, info};
use rand::Rng;
use readback_scoring_rs::score_response;

use crate::{
    errors::Error,
    report::{render_result, render_session},
    scenario::catalog::ScenarioCatalog,
    session::SessionStats,
};

#[derive(Debug, Clone)]
pub struct PracticeOptions {
    pub selection: ScenarioSelection,
    pub rounds: Option<u32>,
    pub callsign: Option<String>,
    pub phraseology: Phraseology,
    pub show_perfect_response: bool,
}

/// Interactive drill: present a random ATC call, read one transcript line per
/// round, report the score. Stops on end of input or after the requested
/// number of rounds. Blank read-backs are reported but not counted.
pub fn run_practice<I, O, R>(
    catalog: &ScenarioCatalog,
    options: &PracticeOptions,
    input: &mut I,
    output: &mut O,
    rng: &mut R,
) -> Result<SessionStats, Error>
where
    I: BufRead,
    O: Write,
    R: Rng + ?Sized,
{
    let mut stats = SessionStats::default();
    writeln!(output, "Practising: {} ({})", options.selection.label(), options.phraseology)?;

    let mut round = 0;
    while options.rounds.is_none_or(|rounds| round < rounds) {
        let scenario = catalog
            .random(options.selection, rng)
            .ok_or(Error::EmptyCatalog)?
            .personalize(options.callsign.as_deref(), options.phraseology);
        round += 1;

        writeln!(output)?;
        writeln!(output, "[{round}] ATC: {}", scenario.atc_call)?;
        write!(output, "> ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            debug!("End of input after {} rounds", round - 1);
            writeln!(output)?;
            break;
        }

        let result = score_response(&scenario.expected_keywords, &line);
        if !line.trim().is_empty() {
            stats.record(&result);
        }
        info!("Scenario {} scored {}%", scenario.id, result.score);
        write!(
            output,
            "{}",
            render_result(&scenario, &result, options.show_perfect_response)
        )?;
    }

    writeln!(output)?;
    writeln!(output, "{}", render_session(&stats))?;
    Ok(stats)
}
