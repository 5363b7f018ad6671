use std::{
    env,
    io::{self, Read},
    path::Path,
    sync::LazyLock,
};

use anyhow::Context;
use clap::Parser;
use cli::{Cli, Commands};
use log::info;
use practice::{PracticeOptions, run_practice};
use readback_scoring_rs::score_response;
use scenario::catalog::ScenarioCatalog;

mod cli;
mod errors;
mod practice;
mod report;
mod scenario;
mod session;

pub static APP_CONFIG: LazyLock<AppConfig> = LazyLock::new(AppConfig::from_env);

#[derive(Debug, Clone)]
pub struct AppConfig {
    show_perfect_response: bool,
    plain_output: bool,
}

impl AppConfig {
    fn from_env() -> Self {
        let show_perfect_response = env::var("SHOW_PERFECT_RESPONSE").as_deref() == Ok("1");
        let plain_output = env::var("PLAIN_OUTPUT").as_deref() == Ok("1");
        Self {
            show_perfect_response,
            plain_output,
        }
    }
}

fn load_catalog(path: Option<&Path>) -> anyhow::Result<ScenarioCatalog> {
    let catalog = match path {
        Some(path) => ScenarioCatalog::load_from_file(path)
            .with_context(|| format!("Could not load scenarios from {}", path.display()))?,
        None => ScenarioCatalog::embedded().context("Built-in scenarios are invalid")?,
    };
    info!("{} scenarios available", catalog.scenarios().len());
    Ok(catalog)
}

fn main() -> anyhow::Result<()> {
    #[cfg(debug_assertions)]
    dotenvy::dotenv().ok();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if APP_CONFIG.plain_output {
        colored::control::set_override(false);
    }

    let cli = Cli::parse();
    let catalog = load_catalog(cli.scenarios.as_deref())?;
    let callsign = cli.callsign.as_deref();

    match cli.command {
        Commands::List { selection } => {
            println!("{}", selection.label());
            for scenario in catalog.by_selection(selection) {
                let scenario = scenario.personalize(callsign, cli.phraseology);
                println!(
                    "{:>3}  {:<30} {}",
                    scenario.id,
                    scenario.scenario_type.label(),
                    scenario.atc_call
                );
            }
        }
        Commands::Score {
            scenario,
            transcript,
            json,
        } => {
            let scenario = catalog
                .get(scenario)
                .ok_or(errors::Error::UnknownScenario(scenario))?
                .personalize(callsign, cli.phraseology);
            let transcript = match transcript {
                Some(transcript) => transcript,
                None => {
                    let mut buf = String::new();
                    io::stdin()
                        .read_to_string(&mut buf)
                        .context("Could not read transcript from stdin")?;
                    buf
                }
            };
            let result = score_response(&scenario.expected_keywords, &transcript);
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!("ATC: {}", scenario.atc_call);
                print!(
                    "{}",
                    report::render_result(&scenario, &result, APP_CONFIG.show_perfect_response)
                );
            }
        }
        Commands::Practice { selection, rounds } => {
            let options = PracticeOptions {
                selection,
                rounds,
                callsign: cli.callsign.clone(),
                phraseology: cli.phraseology,
                show_perfect_response: APP_CONFIG.show_perfect_response,
            };
            let stdin = io::stdin();
            run_practice(
                &catalog,
                &options,
                &mut stdin.lock(),
                &mut io::stdout(),
                &mut rand::rng(),
            )?;
        }
    }
    Ok(())
}
