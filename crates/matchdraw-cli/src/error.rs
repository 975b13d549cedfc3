//! Errors that end a command-line run.

use matchdraw_config::ConfigError;
use matchdraw_core::MatchDrawError;
use matchdraw_solver::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Draw(#[from] MatchDrawError),

    #[error("Could not save the cache: {0}")]
    Store(#[from] StoreError),

    #[error("Prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("Output failed: {0}")]
    Io(#[from] std::io::Error),
}
