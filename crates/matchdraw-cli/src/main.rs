//! `matchdraw` estimates pairing probabilities of a constrained draw.

mod args;
mod error;
mod prompt;
mod settings;

use std::process::ExitCode;

use clap::Parser;
use matchdraw_config::DrawConfig;
use matchdraw_console::ConsoleTableEmitter;
use matchdraw_core::Side;
use matchdraw_solver::{
    FileCacheStore, LoggingProgressReporter, ProbabilityAggregator, TableEmitter, WriterEmitter,
};
use tracing::{error, info};

use crate::args::Args;
use crate::error::CliError;
use crate::prompt::TerminalPrompter;
use crate::settings::{should_save, RunSettings};

fn main() -> ExitCode {
    let args = Args::parse();
    matchdraw_console::init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), CliError> {
    let mut config = match &args.config {
        Some(path) => DrawConfig::load(path)?,
        None => DrawConfig::champions_league_2022()?,
    };
    args.apply(&mut config);
    let problem = config.to_problem()?;
    info!(
        "Draw: {} ({} {} x {} {})",
        config.display_name(),
        problem.size(),
        problem.label(Side::A),
        problem.size(),
        problem.label(Side::B),
    );

    let mut prompter = TerminalPrompter::new();
    let settings = RunSettings::resolve(&config, &mut prompter)?;

    let store = FileCacheStore::new(config.cache.path.clone());
    let mut aggregator = ProbabilityAggregator::new(&problem)
        .with_precision(config.run.precision)
        .with_milestones(config.run.milestones.clone());
    if let Some(seed) = config.run.random_seed {
        aggregator = aggregator.with_seed(seed);
    }
    if settings.load_cache {
        aggregator.load_cache(&store);
    }

    let table = aggregator.run(settings.trials, &mut LoggingProgressReporter)?;
    if args.plain {
        WriterEmitter::new(std::io::stdout()).emit(&table)?;
    } else {
        ConsoleTableEmitter::stdout().emit(&table)?;
    }

    if should_save(&config, settings.load_cache, &mut prompter)? {
        aggregator.save_cache(&store)?;
    }
    Ok(())
}
