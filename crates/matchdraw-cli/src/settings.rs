//! Resolves run settings: command-line flags beat the configuration file,
//! and the configuration beats interactive prompts.

use matchdraw_config::DrawConfig;
use tracing::warn;

use crate::error::CliError;
use crate::prompt::{load_question, save_question, Prompter};

/// Settings known before the first trial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSettings {
    pub trials: u64,
    pub load_cache: bool,
}

impl RunSettings {
    /// Fills in whatever `config` leaves open by asking `prompter`.
    ///
    /// The cache question comes first so a declined load can be warned about
    /// when the save question is asked.
    pub fn resolve(config: &DrawConfig, prompter: &mut dyn Prompter) -> Result<Self, CliError> {
        let load_cache = match config.cache.load {
            Some(load) => load,
            None => prompter.confirm(&load_question(&config.cache.path))?,
        };
        let trials = match config.run.trials {
            Some(trials) => trials,
            None => prompter.trials()?,
        };
        Ok(Self { trials, load_cache })
    }
}

/// Decides whether to write the cache back after a run.
pub fn should_save(
    config: &DrawConfig,
    loaded: bool,
    prompter: &mut dyn Prompter,
) -> Result<bool, CliError> {
    if let Some(save) = config.cache.save {
        return Ok(save);
    }
    if !loaded {
        warn!(
            "Past data was not loaded; saving will replace {} with this run's entries only",
            config.cache.path.display()
        );
    }
    prompter.confirm(&save_question(&config.cache.path))
}

#[cfg(test)]
#[path = "settings_tests.rs"]
mod tests;
