//! # Phase two: improving a basic feasible solution
use log::debug;

use crate::algorithm::{OptimizationResult, Solution};
use crate::algorithm::two_phase::{pivot_until_terminal, PrimalResult, Solver};
use crate::algorithm::two_phase::strategy::pivot_rule::PivotRule;
use crate::algorithm::two_phase::tableau::Tableau;
use crate::error::SimplexError;

/// Improve a feasible tableau using Bland's rule and no iteration limit.
///
/// See `Solver::find_best_solution`.
pub fn find_best_solution(tableau: &mut Tableau) -> Result<OptimizationResult, SimplexError> {
    Solver::new().find_best_solution(tableau)
}

/// Reduces the cost of the basic feasible solution to the minimum.
///
/// # Arguments
///
/// * `tableau`: A tableau with a feasible basis. It is pivoted in place.
/// * `max_iterations`: Limit on the number of pivots, if any.
///
/// # Return value
///
/// An `OptimizationResult` indicating whether or not the problem has a finite optimum. It cannot be
/// infeasible, as a feasible solution is known.
pub(crate) fn primal<PR: PivotRule>(
    tableau: &mut Tableau,
    max_iterations: Option<usize>,
) -> Result<OptimizationResult, SimplexError> {
    debug_assert!(tableau.is_primal_feasible());

    match pivot_until_terminal::<PR>(tableau, max_iterations)? {
        PrimalResult::Optimal => {
            let solution = Solution {
                objective_value: tableau.objective_function_value()?,
                values: tableau.solution()?,
            };
            debug!("Phase two reached objective function value {}", solution.objective_value);

            Ok(OptimizationResult::FiniteOptimum(solution))
        },
        PrimalResult::Unbounded { column } => {
            debug!("Variable {} can increase without bound", tableau.non_basis()[column]);

            Ok(OptimizationResult::Unbounded)
        },
    }
}
