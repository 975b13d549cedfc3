//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;
use matchdraw_config::DrawConfig;

/// Estimate pairing probabilities of a constrained draw by Monte Carlo
/// simulation.
#[derive(Debug, Parser)]
#[command(name = "matchdraw", version, about)]
pub struct Args {
    /// Draw configuration (TOML or YAML). Defaults to the bundled
    /// Champions League 2022/23 round of 16.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Number of trials to run.
    #[arg(short = 'n', long, value_parser = clap::value_parser!(u64).range(1..))]
    pub trials: Option<u64>,

    /// Random seed for a reproducible run.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Cache file location.
    #[arg(long, value_name = "PATH")]
    pub cache: Option<PathBuf>,

    /// Load the cache without asking.
    #[arg(long, conflicts_with = "no_load_cache")]
    pub load_cache: bool,

    /// Start with an empty cache without asking.
    #[arg(long)]
    pub no_load_cache: bool,

    /// Save the cache without asking.
    #[arg(long, conflicts_with = "no_save_cache")]
    pub save_cache: bool,

    /// Discard the cache without asking.
    #[arg(long)]
    pub no_save_cache: bool,

    /// Decimal places in the output table.
    #[arg(long)]
    pub precision: Option<u32>,

    /// Print the table without colors.
    #[arg(long)]
    pub plain: bool,
}

impl Args {
    /// Overrides configuration values with the ones given on the command line.
    pub fn apply(&self, config: &mut DrawConfig) {
        if let Some(trials) = self.trials {
            config.run.trials = Some(trials);
        }
        if let Some(seed) = self.seed {
            config.run.random_seed = Some(seed);
        }
        if let Some(precision) = self.precision {
            config.run.precision = precision;
        }
        if let Some(path) = &self.cache {
            config.cache.path = path.clone();
        }
        if let Some(load) = flag_pair(self.load_cache, self.no_load_cache) {
            config.cache.load = Some(load);
        }
        if let Some(save) = flag_pair(self.save_cache, self.no_save_cache) {
            config.cache.save = Some(save);
        }
    }
}

fn flag_pair(yes: bool, no: bool) -> Option<bool> {
    match (yes, no) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}
