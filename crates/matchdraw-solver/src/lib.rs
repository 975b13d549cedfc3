//! matchdraw Solver Engine
//!
//! This crate provides the Monte Carlo draw estimator:
//! - Memoized feasibility oracle
//! - Feasibility-pruned single-trial draw simulator
//! - Run context and probability aggregator
//! - Progress reporting, cache persistence and table output interfaces

pub mod aggregator;
pub mod oracle;
pub mod progress;
pub mod scope;
pub mod simulator;
pub mod stats;
pub mod store;
pub mod table;

pub use aggregator::{ProbabilityAggregator, DEFAULT_MILESTONES, DEFAULT_PRECISION};
pub use oracle::{FeasibilityOracle, MemoCache, MemoKey, OracleStats};
pub use progress::{LoggingProgressReporter, Milestones, NoProgress, ProgressReporter};
pub use scope::RunContext;
pub use simulator::DrawSimulator;
pub use stats::{RunStats, RunSummary};
pub use store::{CacheStore, FileCacheStore, StoreError, CACHE_FORMAT_VERSION};
pub use table::{ProbabilityTable, TableEmitter, WriterEmitter};
