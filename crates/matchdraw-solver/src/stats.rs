//! Run statistics.
//!
//! Stack-allocated counters for trial throughput and cache effectiveness.

use std::time::{Duration, Instant};

use crate::oracle::OracleStats;

/// Trial-loop statistics.
///
/// # Example
///
/// ```
/// use matchdraw_solver::stats::RunStats;
///
/// let mut stats = RunStats::default();
/// stats.start();
/// stats.record_trial();
/// stats.record_trial();
///
/// assert_eq!(stats.trials, 2);
/// ```
#[derive(Debug, Default)]
pub struct RunStats {
    start_time: Option<Instant>,
    /// Trials completed since the run started.
    pub trials: u64,
}

impl RunStats {
    /// Marks the start of the run and zeroes the trial counter.
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
        self.trials = 0;
    }

    /// Returns the elapsed time since the run started.
    pub fn elapsed(&self) -> Duration {
        self.start_time.map(|t| t.elapsed()).unwrap_or_default()
    }

    /// Records a finished trial.
    pub fn record_trial(&mut self) {
        self.trials += 1;
    }

    /// Returns the trials per second rate.
    pub fn trials_per_second(&self) -> f64 {
        let secs = self.elapsed().as_secs_f64();
        if secs > 0.0 {
            self.trials as f64 / secs
        } else {
            0.0
        }
    }
}

/// End-of-run summary handed to progress reporters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSummary {
    /// Trials completed.
    pub trials: u64,
    /// Wall-clock time spent in the trial loop.
    pub elapsed: Duration,
    /// Oracle queries answered from the cache.
    pub cache_hits: u64,
    /// Oracle queries computed during this run.
    pub cache_misses: u64,
    /// Cache entries after the run.
    pub cache_entries: usize,
    /// Cache entries loaded from the store before the run.
    pub loaded_entries: usize,
}

impl RunSummary {
    pub(crate) fn new(
        stats: &RunStats,
        oracle: OracleStats,
        cache_entries: usize,
        loaded_entries: usize,
    ) -> Self {
        Self {
            trials: stats.trials,
            elapsed: stats.elapsed(),
            cache_hits: oracle.hits,
            cache_misses: oracle.misses,
            cache_entries,
            loaded_entries,
        }
    }

    /// Returns the trials per second rate.
    pub fn trials_per_second(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.trials as f64 / secs
        } else {
            0.0
        }
    }
}
