//! Progress reporting for long runs.
//!
//! The trial loop reports through the [`ProgressReporter`] trait so that
//! console output stays out of the algorithm.

use std::fmt::Debug;

use tracing::info;

use crate::stats::RunSummary;

/// Receives run lifecycle notifications.
pub trait ProgressReporter: Debug {
    /// Called before the first trial.
    fn on_run_started(&mut self, _total: u64) {}

    /// Called when `completed` trials reach `percent` of `total`.
    fn on_milestone(&mut self, percent: u32, completed: u64, total: u64);

    /// Called after the last trial.
    fn on_run_ended(&mut self, _summary: &RunSummary) {}
}

/// Reporter that discards every notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressReporter for NoProgress {
    fn on_milestone(&mut self, _percent: u32, _completed: u64, _total: u64) {}
}

/// Reporter that logs milestones via `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingProgressReporter;

impl ProgressReporter for LoggingProgressReporter {
    fn on_milestone(&mut self, percent: u32, completed: u64, total: u64) {
        info!(event = "milestone", percent, completed, total);
    }
}

/// Milestone thresholds for a fixed trial count.
///
/// # Example
///
/// ```
/// use matchdraw_solver::Milestones;
///
/// let mut milestones = Milestones::new(&[10, 50], 20);
/// assert_eq!(milestones.poll(1), None);
/// assert_eq!(milestones.poll(2), Some(10));
/// assert_eq!(milestones.poll(2), None);
/// assert_eq!(milestones.poll(10), Some(50));
/// assert!(milestones.is_exhausted());
/// ```
#[derive(Debug, Clone)]
pub struct Milestones {
    percents: Vec<u32>,
    total: u64,
    next: usize,
}

impl Milestones {
    /// Creates thresholds at `percents` of `total`, in the given order.
    pub fn new(percents: &[u32], total: u64) -> Self {
        Self {
            percents: percents.to_vec(),
            total,
            next: 0,
        }
    }

    /// Returns the next milestone reached by `completed`, if any.
    ///
    /// Call repeatedly until `None` to drain several milestones crossed by
    /// one trial.
    pub fn poll(&mut self, completed: u64) -> Option<u32> {
        let percent = *self.percents.get(self.next)?;
        if u128::from(completed) * 100 >= u128::from(percent) * u128::from(self.total) {
            self.next += 1;
            Some(percent)
        } else {
            None
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.next >= self.percents.len()
    }
}
