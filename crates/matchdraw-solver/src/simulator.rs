//! Single-trial draw generation.
//!
//! Before every random choice the options that would strand a later item
//! are pruned with the [`FeasibilityOracle`], so every surviving choice can
//! be completed and a trial never backtracks.
//!
//! Logging levels:
//! - **DEBUG**: Feasibility check before the first trial
//! - **TRACE**: Individual pairings

use matchdraw_core::{
    Assignment, CompatibilityMatrix, DrawProblem, MatchDrawError, Remaining, Result, Side,
};
use rand::Rng;
use tracing::{debug, trace};

use crate::oracle::FeasibilityOracle;

/// Generates complete, constraint-satisfying draws for one problem.
///
/// # Example
///
/// ```
/// use matchdraw_core::{DrawProblem, Item};
/// use matchdraw_solver::{DrawSimulator, FeasibilityOracle};
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let problem = DrawProblem::new(
///     vec![Item::new("a0", ["x"]), Item::untagged("a1")],
///     vec![Item::new("b0", ["x"]), Item::untagged("b1")],
/// ).unwrap();
///
/// let simulator = DrawSimulator::new(&problem);
/// let mut oracle = FeasibilityOracle::new();
/// let mut rng = StdRng::seed_from_u64(1);
///
/// let draw = simulator.draw(&mut oracle, &mut rng).unwrap();
/// assert_eq!(draw.partner(0), Some(1));
/// assert_eq!(draw.partner(1), Some(0));
/// ```
#[derive(Debug, Clone)]
pub struct DrawSimulator<'p> {
    problem: &'p DrawProblem,
    initial: CompatibilityMatrix,
}

impl<'p> DrawSimulator<'p> {
    /// Creates a simulator, building the trial-start matrix from the
    /// problem's exclusion tags.
    pub fn new(problem: &'p DrawProblem) -> Self {
        Self {
            problem,
            initial: problem.initial_matrix(),
        }
    }

    pub fn problem(&self) -> &'p DrawProblem {
        self.problem
    }

    /// Returns the matrix every trial starts from.
    pub fn initial_matrix(&self) -> &CompatibilityMatrix {
        &self.initial
    }

    /// Verifies that at least one complete matching exists.
    ///
    /// Asking the oracle about every partner of the first Side-A item
    /// explores the whole remaining set, so this catches any infeasible
    /// configuration before a trial starts.
    ///
    /// # Errors
    ///
    /// Returns [`MatchDrawError::Infeasible`] naming the first Side-A item.
    pub fn check_feasible(&self, oracle: &mut FeasibilityOracle) -> Result<()> {
        let remaining = Remaining::all(self.problem.size())?;
        let Some(first) = remaining.head() else {
            return Err(MatchDrawError::Config("the draw has no items".to_string()));
        };

        let options = (0..self.problem.size())
            .filter(|&b| oracle.feasible(&self.initial, &remaining, first, b))
            .count();
        debug!(
            event = "feasibility_check",
            item = self.problem.item_name(Side::A, first),
            options,
        );

        if options == 0 {
            return Err(self.infeasible(first));
        }
        Ok(())
    }

    /// Runs one trial and returns its complete assignment.
    ///
    /// # Errors
    ///
    /// Returns [`MatchDrawError::Infeasible`] if the exclusion rules admit no
    /// complete matching.
    pub fn draw<R: Rng + ?Sized>(
        &self,
        oracle: &mut FeasibilityOracle,
        rng: &mut R,
    ) -> Result<Assignment> {
        let n = self.problem.size();
        let mut matrix = self.initial.clone();
        let mut remaining = Remaining::all(n)?;
        let mut assignment = Assignment::new(n);

        while !remaining.is_empty() {
            let position = rng.random_range(0..remaining.len());
            let a = remaining.get(position).ok_or_else(|| {
                MatchDrawError::InvalidState(format!("no remaining item at {position}"))
            })?;

            for b in matrix.allowed(a) {
                if !oracle.feasible(&matrix, &remaining, a, b) {
                    matrix.forbid(a, b);
                }
            }

            let options = matrix.allowed_count(a);
            if options == 0 {
                return Err(self.infeasible(a));
            }
            let b = matrix
                .nth_allowed(a, rng.random_range(0..options))
                .ok_or_else(|| self.infeasible(a))?;

            matrix.clear_column(b);
            remaining.remove(a);
            assignment.pair(a, b)?;
            trace!(
                event = "pick",
                item = self.problem.item_name(Side::A, a),
                partner = self.problem.item_name(Side::B, b),
                options,
            );
        }

        Ok(assignment)
    }

    fn infeasible(&self, a: usize) -> MatchDrawError {
        MatchDrawError::Infeasible {
            item: self.problem.item_name(Side::A, a).to_string(),
        }
    }
}

#[cfg(test)]
#[path = "simulator_tests.rs"]
mod tests;
