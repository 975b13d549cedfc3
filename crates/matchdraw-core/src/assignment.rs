//! Pairings realized by one trial.

use crate::error::{MatchDrawError, Result};
use crate::problem::DrawProblem;

/// Side A → Side B bijection built one pairing at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    partners: Vec<Option<usize>>,
    taken: Vec<bool>,
    order: Vec<(usize, usize)>,
}

impl Assignment {
    /// Creates an empty assignment for `n` items per side.
    pub fn new(n: usize) -> Self {
        Self {
            partners: vec![None; n],
            taken: vec![false; n],
            order: Vec::with_capacity(n),
        }
    }

    /// Records the pairing `a <-> b`.
    ///
    /// # Errors
    ///
    /// Returns [`MatchDrawError::InvalidState`] if either index is out of
    /// range or already paired.
    pub fn pair(&mut self, a: usize, b: usize) -> Result<()> {
        let n = self.partners.len();
        if a >= n || b >= n {
            return Err(MatchDrawError::InvalidState(format!(
                "pair ({a}, {b}) out of range for {n} items"
            )));
        }
        if self.partners[a].is_some() || self.taken[b] {
            return Err(MatchDrawError::InvalidState(format!(
                "pair ({a}, {b}) reuses an already matched item"
            )));
        }
        self.partners[a] = Some(b);
        self.taken[b] = true;
        self.order.push((a, b));
        Ok(())
    }

    /// Returns the partner of Side-A item `a`.
    pub fn partner(&self, a: usize) -> Option<usize> {
        self.partners.get(a).copied().flatten()
    }

    pub fn size(&self) -> usize {
        self.partners.len()
    }

    pub fn is_complete(&self) -> bool {
        self.order.len() == self.partners.len()
    }

    /// Iterates committed pairs ordered by Side-A index.
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.partners
            .iter()
            .enumerate()
            .filter_map(|(a, b)| b.map(|b| (a, b)))
    }

    /// Returns committed pairs in the order they were drawn.
    pub fn draw_order(&self) -> &[(usize, usize)] {
        &self.order
    }

    /// Returns true if this is a complete matching that respects every
    /// exclusion of `problem`.
    pub fn is_valid_for(&self, problem: &DrawProblem) -> bool {
        self.size() == problem.size()
            && self.is_complete()
            && self.pairs().all(|(a, b)| !problem.is_excluded(a, b))
    }
}
