//! Shared test fixtures for matchdraw crates.
//!
//! - [`problems`] - draw problems with known outcomes
//! - [`brute_force`] - exhaustive matching enumeration for cross-checks
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! matchdraw-test = { workspace = true }
//! ```

pub mod brute_force;
pub mod problems;

pub use brute_force::{has_matching_with, perfect_matchings};
pub use problems::{
    champions_league_2022, forced_pair, infeasible, infeasible_late, open, random_problem,
    with_exclusions,
};
