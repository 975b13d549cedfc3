//! Two-sided draw problem definition.

use crate::error::{MatchDrawError, Result};
use crate::item::{Item, Side};
use crate::matrix::{check_size, CompatibilityMatrix};

/// Two ordered item sets of equal size with the shared-tag exclusion rule.
///
/// # Example
///
/// ```
/// use matchdraw_core::{DrawProblem, Item};
///
/// let problem = DrawProblem::new(
///     vec![Item::new("a0", ["x"]), Item::untagged("a1")],
///     vec![Item::new("b0", ["x"]), Item::untagged("b1")],
/// ).unwrap();
///
/// let matrix = problem.initial_matrix();
/// assert!(!matrix.is_allowed(0, 0));
/// assert!(matrix.is_allowed(0, 1));
/// ```
#[derive(Debug, Clone)]
pub struct DrawProblem {
    side_a: Vec<Item>,
    side_b: Vec<Item>,
    side_a_label: String,
    side_b_label: String,
}

impl DrawProblem {
    /// Creates a problem from the two sides.
    ///
    /// # Errors
    ///
    /// Returns [`MatchDrawError::Config`] if a side is empty, the sides differ
    /// in size, or a side holds more than [`MAX_ITEMS`](crate::MAX_ITEMS) items.
    pub fn new(side_a: Vec<Item>, side_b: Vec<Item>) -> Result<Self> {
        if side_a.is_empty() || side_b.is_empty() {
            return Err(MatchDrawError::Config(
                "both sides need at least one item".to_string(),
            ));
        }
        if side_a.len() != side_b.len() {
            return Err(MatchDrawError::Config(format!(
                "sides differ in size: {} vs {}",
                side_a.len(),
                side_b.len()
            )));
        }
        check_size(side_a.len())?;
        Ok(Self {
            side_a,
            side_b,
            side_a_label: "A".to_string(),
            side_b_label: "B".to_string(),
        })
    }

    /// Sets display labels for the two sides.
    pub fn with_labels(mut self, side_a: impl Into<String>, side_b: impl Into<String>) -> Self {
        self.side_a_label = side_a.into();
        self.side_b_label = side_b.into();
        self
    }

    /// Returns the number of items per side.
    pub fn size(&self) -> usize {
        self.side_a.len()
    }

    pub fn items(&self, side: Side) -> &[Item] {
        match side {
            Side::A => &self.side_a,
            Side::B => &self.side_b,
        }
    }

    pub fn label(&self, side: Side) -> &str {
        match side {
            Side::A => &self.side_a_label,
            Side::B => &self.side_b_label,
        }
    }

    /// Returns the display name of item `index` on `side`.
    pub fn item_name(&self, side: Side, index: usize) -> &str {
        self.items(side).get(index).map_or("?", Item::name)
    }

    /// Returns true if Side-A item `a` and Side-B item `b` may never meet.
    pub fn is_excluded(&self, a: usize, b: usize) -> bool {
        match (self.side_a.get(a), self.side_b.get(b)) {
            (Some(x), Some(y)) => x.excludes(y),
            _ => true,
        }
    }

    /// Builds the trial-start matrix: a cell is cleared iff the pair shares a tag.
    pub fn initial_matrix(&self) -> CompatibilityMatrix {
        CompatibilityMatrix::filled_with(self.size(), |a, b| !self.is_excluded(a, b))
    }
}
