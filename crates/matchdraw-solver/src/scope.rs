//! Run-level state.

use matchdraw_core::{Assignment, FrequencyTable, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::oracle::{FeasibilityOracle, MemoCache};
use crate::simulator::DrawSimulator;
use crate::stats::{RunStats, RunSummary};

/// Everything shared across the trials of one run.
///
/// Owns the oracle (and with it the memoization cache), the frequency
/// table, the random source and the run statistics. Created at run start,
/// exported through [`RunContext::into_cache`] at the end.
pub struct RunContext {
    oracle: FeasibilityOracle,
    frequencies: FrequencyTable,
    rng: StdRng,
    stats: RunStats,
    loaded_entries: usize,
}

impl RunContext {
    /// Creates a context for `n` items per side seeded from the OS.
    pub fn new(n: usize) -> Self {
        Self::with_rng(n, StdRng::from_os_rng())
    }

    /// Creates a reproducible context.
    pub fn with_seed(n: usize, seed: u64) -> Self {
        Self::with_rng(n, StdRng::seed_from_u64(seed))
    }

    fn with_rng(n: usize, rng: StdRng) -> Self {
        Self {
            oracle: FeasibilityOracle::new(),
            frequencies: FrequencyTable::new(n),
            rng,
            stats: RunStats::default(),
            loaded_entries: 0,
        }
    }

    /// Replaces the random source with a seeded one.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    /// Seeds the oracle with entries loaded from a previous run.
    pub fn load_cache(&mut self, cache: MemoCache) {
        self.loaded_entries += cache.len();
        self.oracle.absorb(cache);
    }

    /// Clears counters and statistics, keeping the cache.
    pub fn start_run(&mut self) {
        self.frequencies = FrequencyTable::new(self.frequencies.size());
        self.oracle.reset_stats();
        self.stats.start();
    }

    /// Runs one trial and counts its pairings.
    pub fn run_trial(&mut self, simulator: &DrawSimulator<'_>) -> Result<Assignment> {
        let assignment = simulator.draw(&mut self.oracle, &mut self.rng)?;
        self.frequencies.record(&assignment);
        self.stats.record_trial();
        Ok(assignment)
    }

    pub fn oracle_mut(&mut self) -> &mut FeasibilityOracle {
        &mut self.oracle
    }

    pub fn oracle(&self) -> &FeasibilityOracle {
        &self.oracle
    }

    pub fn frequencies(&self) -> &FrequencyTable {
        &self.frequencies
    }

    pub fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    pub fn stats(&self) -> &RunStats {
        &self.stats
    }

    /// Returns the number of entries loaded through [`RunContext::load_cache`].
    pub fn loaded_entries(&self) -> usize {
        self.loaded_entries
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary::new(
            &self.stats,
            self.oracle.stats(),
            self.oracle.cache().len(),
            self.loaded_entries,
        )
    }

    pub fn into_cache(self) -> MemoCache {
        self.oracle.into_cache()
    }
}

#[cfg(test)]
#[path = "scope_tests.rs"]
mod tests;
