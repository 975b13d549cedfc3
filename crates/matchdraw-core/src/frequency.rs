//! Pairing counters accumulated across trials.

use crate::assignment::Assignment;

/// n×n counters of realized pairings plus the number of finished trials.
///
/// # Example
///
/// ```
/// use matchdraw_core::{Assignment, FrequencyTable};
///
/// let mut table = FrequencyTable::new(2);
/// let mut draw = Assignment::new(2);
/// draw.pair(0, 1).unwrap();
/// draw.pair(1, 0).unwrap();
/// table.record(&draw);
///
/// assert_eq!(table.trials(), 1);
/// assert_eq!(table.count(0, 1), 1);
/// assert_eq!(table.percentage(0, 1), 100.0);
/// assert_eq!(table.percentage(0, 0), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    size: usize,
    counts: Vec<u64>,
    trials: u64,
}

impl FrequencyTable {
    pub fn new(n: usize) -> Self {
        Self {
            size: n,
            counts: vec![0; n * n],
            trials: 0,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Increments the counter for `a <-> b`.
    pub fn increment(&mut self, a: usize, b: usize) {
        if a < self.size && b < self.size {
            self.counts[a * self.size + b] += 1;
        }
    }

    /// Marks one trial as finished.
    pub fn finish_trial(&mut self) {
        self.trials += 1;
    }

    /// Counts every pair of a finished trial.
    pub fn record(&mut self, assignment: &Assignment) {
        for (a, b) in assignment.pairs() {
            self.increment(a, b);
        }
        self.finish_trial();
    }

    pub fn count(&self, a: usize, b: usize) -> u64 {
        if a < self.size && b < self.size {
            self.counts[a * self.size + b]
        } else {
            0
        }
    }

    pub fn trials(&self) -> u64 {
        self.trials
    }

    /// Returns `100 × count / trials`, or zero before any trial.
    pub fn percentage(&self, a: usize, b: usize) -> f64 {
        if self.trials == 0 {
            0.0
        } else {
            100.0 * self.count(a, b) as f64 / self.trials as f64
        }
    }

    /// Returns all percentages rounded to `precision` decimal places.
    pub fn percentages(&self, precision: u32) -> Vec<Vec<f64>> {
        (0..self.size)
            .map(|a| {
                (0..self.size)
                    .map(|b| round_to(self.percentage(a, b), precision))
                    .collect()
            })
            .collect()
    }
}

fn round_to(value: f64, precision: u32) -> f64 {
    let factor = 10f64.powi(precision as i32);
    (value * factor).round() / factor
}
