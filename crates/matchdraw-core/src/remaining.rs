//! Side-A items still waiting for a partner.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::Result;
use crate::matrix::{check_size, MAX_ITEMS};

/// Ordered sequence of unmatched Side-A indices.
///
/// Removal preserves the order of the other elements, so the head after a
/// removal is always the lowest surviving position in the original order.
///
/// # Example
///
/// ```
/// use matchdraw_core::Remaining;
///
/// let mut remaining = Remaining::all(4).unwrap();
/// remaining.remove(0);
/// assert_eq!(remaining.head(), Some(1));
/// remaining.remove(2);
/// assert_eq!(remaining.iter().collect::<Vec<_>>(), vec![1, 3]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Remaining {
    items: SmallVec<[u8; 16]>,
}

impl Remaining {
    /// Returns every Side-A index `0..n` in ascending order.
    ///
    /// # Errors
    ///
    /// Returns [`MatchDrawError::Config`](crate::MatchDrawError::Config) if
    /// `n` exceeds [`MAX_ITEMS`].
    pub fn all(n: usize) -> Result<Self> {
        check_size(n)?;
        Ok(Self {
            items: (0..n as u8).collect(),
        })
    }

    /// Builds a sequence from explicit indices, keeping their order.
    pub fn from_indices(indices: impl IntoIterator<Item = usize>) -> Self {
        Self {
            items: indices
                .into_iter()
                .filter(|&a| a < MAX_ITEMS)
                .map(|a| a as u8)
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, a: usize) -> bool {
        a < MAX_ITEMS && self.items.contains(&(a as u8))
    }

    /// Returns the first element.
    pub fn head(&self) -> Option<usize> {
        self.items.first().map(|&a| a as usize)
    }

    /// Returns the element at `position`.
    pub fn get(&self, position: usize) -> Option<usize> {
        self.items.get(position).map(|&a| a as usize)
    }

    /// Removes `a`, keeping the order of the others. Returns false if absent.
    pub fn remove(&mut self, a: usize) -> bool {
        match self.items.iter().position(|&x| x as usize == a) {
            Some(position) => {
                self.items.remove(position);
                true
            }
            None => false,
        }
    }

    /// Returns a copy with `a` removed.
    pub fn without(&self, a: usize) -> Self {
        let mut next = self.clone();
        next.remove(a);
        next
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.items.iter().map(|&a| a as usize)
    }
}
