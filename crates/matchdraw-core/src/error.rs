//! Error types for matchdraw

use thiserror::Error;

/// Main error type for matchdraw operations
#[derive(Debug, Error)]
pub enum MatchDrawError {
    /// The item sets or exclusion rules are malformed
    #[error("Configuration error: {0}")]
    Config(String),

    /// No complete matching exists for the given exclusion rules
    #[error("No valid complete draw exists: '{item}' has no feasible partner")]
    Infeasible {
        /// Label of the Side-A item left without a feasible partner
        item: String,
    },

    /// Invalid operation for current run state
    #[error("Invalid state: {0}")]
    InvalidState(String),
}

/// Result type alias for matchdraw operations
pub type Result<T> = std::result::Result<T, MatchDrawError>;
