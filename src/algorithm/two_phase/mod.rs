//! # The Simplex algorithm
//!
//! The two phase method: the first phase searches a basic feasible solution using artificial
//! variables, the second phase improves that solution until it is optimal.
use std::marker::PhantomData;

use log::{debug, trace};

use crate::algorithm::OptimizationResult;
use crate::algorithm::two_phase::phase_one::{FeasibilityResult, StartCorner};
use crate::algorithm::two_phase::strategy::pivot_rule::{Bland, PivotRule, PivotSelection};
use crate::algorithm::two_phase::tableau::Tableau;
use crate::error::SimplexError;

pub mod phase_one;
pub mod phase_two;
pub mod strategy;
pub mod tableau;

pub use phase_one::{find_start_corner, prepare_with_start_corner};
pub use phase_two::find_best_solution;

/// Configuration of the two phase method.
///
/// The pivot rule is a type parameter, Bland's rule by default. Without an iteration limit, each
/// phase runs until it reaches a terminal state.
#[derive(Debug)]
pub struct Solver<PR = Bland> {
    max_iterations: Option<usize>,
    pivot_rule: PhantomData<PR>,
}

impl Solver {
    /// Solver with Bland's rule and no iteration limit.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<PR> Default for Solver<PR> {
    fn default() -> Self {
        Self {
            max_iterations: None,
            pivot_rule: PhantomData,
        }
    }
}

impl<PR: PivotRule> Solver<PR> {
    /// Limit the number of pivots per phase.
    ///
    /// A phase that needs more pivots fails with `SimplexError::IterationLimit`.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = Some(max_iterations);
        self
    }

    /// The configured limit on the number of pivots per phase.
    pub fn max_iterations(&self) -> Option<usize> {
        self.max_iterations
    }

    /// Phase one: find a basic feasible solution of the tableau's problem.
    ///
    /// The tableau itself is not modified; an auxiliary tableau is built and solved.
    pub fn find_start_corner(&self, tableau: &Tableau) -> Result<FeasibilityResult, SimplexError> {
        phase_one::primal::<PR>(tableau, self.max_iterations)
    }

    /// Move the tableau into the basis found by phase one.
    pub fn prepare_with_start_corner(
        &self,
        start_corner: &StartCorner,
        tableau: &mut Tableau,
    ) -> Result<(), SimplexError> {
        phase_one::prepare_with_start_corner(start_corner, tableau)
    }

    /// Phase two: improve a feasible tableau in place until it is optimal or shown unbounded.
    pub fn find_best_solution(&self, tableau: &mut Tableau) -> Result<OptimizationResult, SimplexError> {
        phase_two::primal::<PR>(tableau, self.max_iterations)
    }

    /// Solve the linear program of a tableau with the two phase method.
    ///
    /// When the current basis is already feasible, the first phase is skipped.
    ///
    /// # Return value
    ///
    /// Whether the problem is infeasible, unbounded or has a finite optimum. In the latter case,
    /// the tableau is left in an optimal basis.
    pub fn solve(&self, tableau: &mut Tableau) -> Result<OptimizationResult, SimplexError> {
        if tableau.is_primal_feasible() {
            debug!("Initial basis is feasible, skipping phase one");
        } else {
            match self.find_start_corner(tableau)? {
                FeasibilityResult::Feasible(start_corner) => {
                    self.prepare_with_start_corner(&start_corner, tableau)?;
                },
                FeasibilityResult::Infeasible => return Ok(OptimizationResult::Infeasible),
            }
        }

        self.find_best_solution(tableau)
    }
}

/// Solve the linear program of a tableau with Bland's rule and no iteration limit.
///
/// See `Solver::solve`.
pub fn solve(tableau: &mut Tableau) -> Result<OptimizationResult, SimplexError> {
    Solver::new().solve(tableau)
}

/// Terminal state of the primal loop.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum PrimalResult {
    Optimal,
    Unbounded { column: usize },
}

/// Pivot until no improving column is left, or until one without a leaving row is all that's left.
pub(crate) fn pivot_until_terminal<PR: PivotRule>(
    tableau: &mut Tableau,
    max_iterations: Option<usize>,
) -> Result<PrimalResult, SimplexError> {
    let mut rule = PR::new();
    let mut iterations = 0;
    loop {
        match tableau.update_pivot_with(&mut rule)? {
            PivotSelection::Pivot { .. } => {
                if max_iterations.is_some_and(|limit| iterations >= limit) {
                    return Err(SimplexError::IterationLimit(iterations));
                }

                tableau.step()?;
                iterations += 1;
                trace!("Tableau after {} pivots:\n{}", iterations, tableau);
            },
            PivotSelection::Optimal => {
                debug!("Optimal after {} pivots", iterations);
                break Ok(PrimalResult::Optimal);
            },
            PivotSelection::Unbounded { column } => {
                debug!("Column {} is unbounded after {} pivots", column, iterations);
                break Ok(PrimalResult::Unbounded { column });
            },
        }
    }
}
