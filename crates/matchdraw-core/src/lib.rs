//! matchdraw Core - domain types for constrained draw simulation
//!
//! This crate provides the data model shared by the other matchdraw crates:
//! - Items with exclusion tags, grouped into a two-sided [`DrawProblem`]
//! - [`CompatibilityMatrix`] of currently allowed pairings
//! - [`Remaining`] Side-A items of an in-progress trial
//! - [`Assignment`] produced by one trial and [`FrequencyTable`] across trials

pub mod assignment;
pub mod error;
pub mod frequency;
pub mod item;
pub mod matrix;
pub mod problem;
pub mod remaining;


pub use assignment::Assignment;
pub use error::{MatchDrawError, Result};
pub use frequency::FrequencyTable;
pub use item::{Item, Side};
pub use matrix::{CompatibilityMatrix, MAX_ITEMS};
pub use problem::DrawProblem;
pub use remaining::Remaining;
