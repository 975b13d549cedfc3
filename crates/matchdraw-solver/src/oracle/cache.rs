//! Memoization table shared by every oracle query of a run.

use std::collections::HashMap;

use matchdraw_core::{CompatibilityMatrix, Remaining};
use serde::{Deserialize, Serialize};

/// Everything a feasibility answer depends on.
///
/// Once computed, the answer for a key never changes, so entries are never
/// invalidated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MemoKey {
    matrix: CompatibilityMatrix,
    remaining: Remaining,
    pair: (u8, u8),
}

impl MemoKey {
    /// Builds a key; indices must be below [`matchdraw_core::MAX_ITEMS`].
    pub fn new(matrix: CompatibilityMatrix, remaining: Remaining, a: usize, b: usize) -> Self {
        debug_assert!(a < matchdraw_core::MAX_ITEMS && b < matchdraw_core::MAX_ITEMS);
        Self {
            matrix,
            remaining,
            pair: (a as u8, b as u8),
        }
    }

    pub fn matrix(&self) -> &CompatibilityMatrix {
        &self.matrix
    }

    pub fn remaining(&self) -> &Remaining {
        &self.remaining
    }

    /// Returns the tentative pairing `(a, b)`.
    pub fn pair(&self) -> (usize, usize) {
        (self.pair.0 as usize, self.pair.1 as usize)
    }
}

/// Grow-only map from [`MemoKey`] to feasibility.
///
/// # Example
///
/// ```
/// use matchdraw_core::{CompatibilityMatrix, Remaining};
/// use matchdraw_solver::{MemoCache, MemoKey};
///
/// let mut cache = MemoCache::new();
/// let key = MemoKey::new(CompatibilityMatrix::full(2).unwrap(), Remaining::all(2).unwrap(), 0, 1);
/// cache.insert(key.clone(), true);
///
/// assert_eq!(cache.get(&key), Some(true));
/// assert_eq!(cache.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoCache {
    entries: HashMap<MemoKey, bool>,
}

impl MemoCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &MemoKey) -> Option<bool> {
        self.entries.get(key).copied()
    }

    pub fn insert(&mut self, key: MemoKey, feasible: bool) {
        self.entries.insert(key, feasible);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&MemoKey, bool)> {
        self.entries.iter().map(|(key, &feasible)| (key, feasible))
    }

    /// Adds every entry of `other` not already present.
    pub fn merge(&mut self, other: MemoCache) {
        for (key, feasible) in other.entries {
            self.entries.entry(key).or_insert(feasible);
        }
    }
}
