//! Compatibility matrix with packed bit rows.
//!
//! Row `a` holds one bit per Side-B item; bit `b` set means the pairing
//! `a <-> b` is still permitted. Copying, hashing and comparing a matrix
//! costs one machine word per row, which keeps it usable as a cache key.

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{MatchDrawError, Result};

/// Largest supported item count per side (one `u64` per row).
pub const MAX_ITEMS: usize = 64;

/// Boolean n×n matrix of currently allowed pairings.
///
/// Cells are only ever cleared during a trial, never re-enabled.
///
/// # Example
///
/// ```
/// use matchdraw_core::CompatibilityMatrix;
///
/// let mut matrix = CompatibilityMatrix::full(3).unwrap();
/// matrix.forbid(0, 1);
/// matrix.clear_column(2);
///
/// assert!(matrix.is_allowed(0, 0));
/// assert!(!matrix.is_allowed(0, 1));
/// assert!(!matrix.is_allowed(1, 2));
/// assert_eq!(matrix.allowed(0).collect::<Vec<_>>(), vec![0]);
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CompatibilityMatrix {
    rows: SmallVec<[u64; 16]>,
}

impl CompatibilityMatrix {
    /// Creates a matrix with every pairing permitted.
    ///
    /// # Errors
    ///
    /// Returns [`MatchDrawError::Config`] if `n` exceeds [`MAX_ITEMS`].
    pub fn full(n: usize) -> Result<Self> {
        check_size(n)?;
        Ok(Self::filled(n))
    }

    /// Creates a matrix whose cell `(a, b)` is `allowed(a, b)`.
    ///
    /// # Errors
    ///
    /// Returns [`MatchDrawError::Config`] if `n` exceeds [`MAX_ITEMS`].
    pub fn from_fn(n: usize, allowed: impl FnMut(usize, usize) -> bool) -> Result<Self> {
        check_size(n)?;
        Ok(Self::filled_with(n, allowed))
    }

    // Callers guarantee `n <= MAX_ITEMS`.
    fn filled(n: usize) -> Self {
        let mask = row_mask(n);
        Self {
            rows: (0..n).map(|_| mask).collect(),
        }
    }

    // Callers guarantee `n <= MAX_ITEMS`.
    pub(crate) fn filled_with(n: usize, mut allowed: impl FnMut(usize, usize) -> bool) -> Self {
        let mut matrix = Self::filled(n);
        for a in 0..n {
            for b in 0..n {
                if !allowed(a, b) {
                    matrix.forbid(a, b);
                }
            }
        }
        matrix
    }

    /// Returns the number of items per side.
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if `a <-> b` is currently permitted.
    ///
    /// Out-of-range indices are never permitted.
    pub fn is_allowed(&self, a: usize, b: usize) -> bool {
        b < self.size() && self.rows.get(a).is_some_and(|&row| row & (1u64 << b) != 0)
    }

    /// Clears cell `(a, b)`.
    pub fn forbid(&mut self, a: usize, b: usize) {
        if b < self.size() {
            if let Some(row) = self.rows.get_mut(a) {
                *row &= !(1u64 << b);
            }
        }
    }

    /// Clears column `b` in every row, so no item may take `b` as partner.
    pub fn clear_column(&mut self, b: usize) {
        if b < self.size() {
            let keep = !(1u64 << b);
            for row in &mut self.rows {
                *row &= keep;
            }
        }
    }

    /// Iterates the permitted partners of `a` in ascending order.
    pub fn allowed(&self, a: usize) -> AllowedIter {
        AllowedIter {
            bits: self.rows.get(a).copied().unwrap_or(0),
        }
    }

    /// Returns the number of permitted partners of `a`.
    pub fn allowed_count(&self, a: usize) -> usize {
        self.rows.get(a).map_or(0, |row| row.count_ones() as usize)
    }

    /// Returns the `k`-th permitted partner of `a` (0-based), if any.
    pub fn nth_allowed(&self, a: usize, k: usize) -> Option<usize> {
        self.allowed(a).nth(k)
    }

    /// Returns the packed rows.
    pub fn rows(&self) -> &[u64] {
        &self.rows
    }
}

impl fmt::Debug for CompatibilityMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.size();
        let mut list = f.debug_list();
        for row in &self.rows {
            let cells: String = (0..n)
                .map(|b| if row & (1u64 << b) != 0 { '1' } else { '0' })
                .collect();
            list.entry(&format_args!("{cells}"));
        }
        list.finish()
    }
}

/// Iterator over the set bits of one matrix row.
#[derive(Debug, Clone)]
pub struct AllowedIter {
    bits: u64,
}

impl Iterator for AllowedIter {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.bits == 0 {
            return None;
        }
        let b = self.bits.trailing_zeros() as usize;
        self.bits &= self.bits - 1;
        Some(b)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let count = self.bits.count_ones() as usize;
        (count, Some(count))
    }
}

impl ExactSizeIterator for AllowedIter {}

/// Rejects item counts that do not fit one `u64` row.
pub(crate) fn check_size(n: usize) -> Result<()> {
    if n > MAX_ITEMS {
        return Err(MatchDrawError::Config(format!(
            "{n} items per side exceeds the limit of {MAX_ITEMS}"
        )));
    }
    Ok(())
}

fn row_mask(n: usize) -> u64 {
    if n >= MAX_ITEMS {
        u64::MAX
    } else {
        (1u64 << n) - 1
    }
}
