//! Trial loop and probability estimation.
//!
//! Logging levels:
//! - **INFO**: Run start/end, cache load/save
//! - **WARN**: Unreadable cache (cold start)
//! - **DEBUG**: Feasibility check

use matchdraw_core::{DrawProblem, FrequencyTable, MatchDrawError, Result};
use tracing::{info, warn};

use crate::oracle::MemoCache;
use crate::progress::{Milestones, ProgressReporter};
use crate::scope::RunContext;
use crate::simulator::DrawSimulator;
use crate::stats::RunSummary;
use crate::store::{CacheStore, StoreError};
use crate::table::ProbabilityTable;

/// Default number of decimal places in the output table.
pub const DEFAULT_PRECISION: u32 = 2;

/// Default progress milestones in percent of the trial count.
pub const DEFAULT_MILESTONES: [u32; 4] = [10, 25, 50, 75];

/// Estimates pairing probabilities by running many draws.
///
/// Owns the [`RunContext`] for the lifetime of the run: load a cache,
/// run, then save or export the cache.
///
/// # Example
///
/// ```
/// use matchdraw_core::{DrawProblem, Item};
/// use matchdraw_solver::{NoProgress, ProbabilityAggregator};
///
/// let problem = DrawProblem::new(
///     vec![Item::new("a0", ["x"]), Item::untagged("a1")],
///     vec![Item::new("b0", ["x"]), Item::untagged("b1")],
/// ).unwrap();
///
/// let mut aggregator = ProbabilityAggregator::new(&problem).with_seed(7);
/// let table = aggregator.run(100, &mut NoProgress).unwrap();
///
/// assert_eq!(table.percentage(0, 1), 100.0);
/// assert_eq!(table.percentage(1, 0), 100.0);
/// ```
pub struct ProbabilityAggregator<'p> {
    simulator: DrawSimulator<'p>,
    context: RunContext,
    precision: u32,
    milestones: Vec<u32>,
}

impl<'p> ProbabilityAggregator<'p> {
    pub fn new(problem: &'p DrawProblem) -> Self {
        Self {
            simulator: DrawSimulator::new(problem),
            context: RunContext::new(problem.size()),
            precision: DEFAULT_PRECISION,
            milestones: DEFAULT_MILESTONES.to_vec(),
        }
    }

    /// Makes the run reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.context.reseed(seed);
        self
    }

    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = precision;
        self
    }

    pub fn with_milestones(mut self, milestones: Vec<u32>) -> Self {
        self.milestones = milestones;
        self
    }

    /// Starts from previously computed oracle answers.
    pub fn with_cache(mut self, cache: MemoCache) -> Self {
        self.context.load_cache(cache);
        self
    }

    /// Loads the cache from `store`, falling back to a cold start on any error.
    ///
    /// Returns the number of entries loaded.
    pub fn load_cache(&mut self, store: &dyn CacheStore) -> usize {
        match store.load() {
            Ok(cache) => {
                let entries = cache.len();
                self.context.load_cache(cache);
                info!(event = "cache_load", location = %store.location(), entries);
                entries
            }
            Err(e) => {
                warn!(
                    event = "cache_fallback",
                    location = %store.location(),
                    error = %e,
                );
                0
            }
        }
    }

    /// Saves the current cache to `store`.
    pub fn save_cache(&self, store: &dyn CacheStore) -> std::result::Result<(), StoreError> {
        let cache = self.context.oracle().cache();
        store.save(cache)?;
        info!(event = "cache_save", location = %store.location(), entries = cache.len());
        Ok(())
    }

    /// Runs `trials` draws and returns the percentage table.
    ///
    /// Counters restart with every call; the cache carries over.
    ///
    /// # Errors
    ///
    /// Returns [`MatchDrawError::Config`] for a zero trial count and
    /// [`MatchDrawError::Infeasible`] before the first trial if no complete
    /// matching exists.
    pub fn run(
        &mut self,
        trials: u64,
        reporter: &mut dyn ProgressReporter,
    ) -> Result<ProbabilityTable> {
        if trials == 0 {
            return Err(MatchDrawError::Config(
                "trials must be a positive integer".to_string(),
            ));
        }

        let problem = self.simulator.problem();
        self.context.start_run();
        let cached_entries = self.context.oracle().cache().len();
        self.simulator.check_feasible(self.context.oracle_mut())?;

        info!(event = "run_start", items = problem.size(), trials, cached_entries);
        reporter.on_run_started(trials);

        let mut milestones = Milestones::new(&self.milestones, trials);
        for completed in 1..=trials {
            self.context.run_trial(&self.simulator)?;
            while let Some(percent) = milestones.poll(completed) {
                reporter.on_milestone(percent, completed, trials);
            }
        }

        let summary = self.context.summary();
        info!(
            event = "run_end",
            trials = summary.trials,
            duration_ms = summary.elapsed.as_millis() as u64,
            speed = summary.trials_per_second() as u64,
            cache_hits = summary.cache_hits,
            cache_misses = summary.cache_misses,
            cache_entries = summary.cache_entries,
        );
        reporter.on_run_ended(&summary);

        Ok(ProbabilityTable::from_frequencies(
            problem,
            self.context.frequencies(),
            self.precision,
        ))
    }

    pub fn problem(&self) -> &'p DrawProblem {
        self.simulator.problem()
    }

    pub fn frequencies(&self) -> &FrequencyTable {
        self.context.frequencies()
    }

    pub fn summary(&self) -> RunSummary {
        self.context.summary()
    }

    pub fn context(&self) -> &RunContext {
        &self.context
    }

    /// Ends the run and hands back the cache.
    pub fn into_cache(self) -> MemoCache {
        self.context.into_cache()
    }
}

#[cfg(test)]
#[path = "aggregator_tests.rs"]
mod tests;
