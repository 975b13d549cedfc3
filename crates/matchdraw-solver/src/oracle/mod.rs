//! Feasibility oracle.
//!
//! Answers "can Side-A item `a` still take Side-B item `b` and leave a
//! complete valid matching for everyone else?" by exact backtracking over
//! the remaining items, memoizing every answer.
//!
//! The recursion always continues with the head of the remaining sequence
//! after removing `a`. Cached answers are only comparable across calls
//! because this order never changes.

mod cache;

use matchdraw_core::{CompatibilityMatrix, Remaining, MAX_ITEMS};

pub use cache::{MemoCache, MemoKey};

/// Cache effectiveness counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OracleStats {
    /// Queries answered from the cache.
    pub hits: u64,
    /// Queries that had to be computed.
    pub misses: u64,
}

impl OracleStats {
    /// Returns `hits / (hits + misses)`, or zero before any query.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// Memoized feasibility oracle.
///
/// # Example
///
/// ```
/// use matchdraw_core::{CompatibilityMatrix, Remaining};
/// use matchdraw_solver::FeasibilityOracle;
///
/// // a0 may only take b1.
/// let matrix = CompatibilityMatrix::from_fn(2, |a, b| !(a == 0 && b == 0)).unwrap();
/// let remaining = Remaining::all(2).unwrap();
/// let mut oracle = FeasibilityOracle::new();
///
/// assert!(oracle.feasible(&matrix, &remaining, 1, 0));
/// // a1 taking b1 would strand a0.
/// assert!(!oracle.feasible(&matrix, &remaining, 1, 1));
/// ```
#[derive(Debug, Default)]
pub struct FeasibilityOracle {
    cache: MemoCache,
    stats: OracleStats,
}

impl FeasibilityOracle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an oracle that starts from previously computed answers.
    pub fn with_cache(cache: MemoCache) -> Self {
        Self {
            cache,
            stats: OracleStats::default(),
        }
    }

    /// Returns true iff committing `a <-> b` still leaves a complete matching
    /// of every item in `remaining`.
    ///
    /// Requires `matrix[a][b]` to be permitted and `a` to be in `remaining`.
    /// The caller's matrix is never modified.
    pub fn feasible(
        &mut self,
        matrix: &CompatibilityMatrix,
        remaining: &Remaining,
        a: usize,
        b: usize,
    ) -> bool {
        if a >= MAX_ITEMS || b >= matrix.size() {
            return false;
        }

        let key = MemoKey::new(matrix.clone(), remaining.clone(), a, b);
        if let Some(feasible) = self.cache.get(&key) {
            self.stats.hits += 1;
            return feasible;
        }
        self.stats.misses += 1;

        let feasible = self.search(matrix, remaining, a, b);
        self.cache.insert(key, feasible);
        feasible
    }

    fn search(
        &mut self,
        matrix: &CompatibilityMatrix,
        remaining: &Remaining,
        a: usize,
        b: usize,
    ) -> bool {
        if !matrix.is_allowed(a, b) || !remaining.contains(a) {
            return false;
        }
        if remaining.len() == 1 {
            return true;
        }

        let mut next_matrix = matrix.clone();
        next_matrix.clear_column(b);
        let next_remaining = remaining.without(a);
        let Some(next) = next_remaining.head() else {
            return true;
        };

        (0..matrix.size())
            .any(|candidate| self.feasible(&next_matrix, &next_remaining, next, candidate))
    }

    pub fn stats(&self) -> OracleStats {
        self.stats
    }

    /// Zeroes the hit and miss counters, keeping the cache.
    pub fn reset_stats(&mut self) {
        self.stats = OracleStats::default();
    }

    pub fn cache(&self) -> &MemoCache {
        &self.cache
    }

    /// Adds previously computed answers to the cache.
    pub fn absorb(&mut self, cache: MemoCache) {
        self.cache.merge(cache);
    }

    pub fn into_cache(self) -> MemoCache {
        self.cache
    }
}

#[cfg(test)]
mod tests;
