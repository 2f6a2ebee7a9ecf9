//! # Phase one: finding a basic feasible solution
//!
//! When the basis of a tableau is infeasible (some constraint value is negative), an auxiliary
//! tableau is built in which a basic variable is added to every row: the artificial variables.
//! Minimizing the sum of the artificial variables either drives all of them to zero, which leaves
//! a feasible basis of the original problem, or proves that no feasible solution exists.
use std::collections::HashSet;

use log::debug;
use num_traits::{One, Zero};

use crate::algorithm::two_phase::{pivot_until_terminal, PrimalResult, Solver};
use crate::algorithm::two_phase::strategy::pivot_rule::PivotRule;
use crate::algorithm::two_phase::tableau::Tableau;
use crate::data::number_types::rational::Rational;
use crate::error::SimplexError;

/// Outcome of the first phase.
///
/// Only a feasible outcome can be used to prepare the second phase.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum FeasibilityResult {
    /// A basic feasible solution was found.
    Feasible(StartCorner),
    /// The artificial cost can't be reduced to zero: the problem has no feasible solution.
    Infeasible,
}

/// A solved auxiliary tableau whose basis contains no artificial variables.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct StartCorner {
    tableau: Tableau,
}

impl StartCorner {
    /// The solved auxiliary tableau.
    pub fn tableau(&self) -> &Tableau {
        &self.tableau
    }

    /// The basic variable of every row, using the variable indices of the original tableau.
    pub fn basis(&self) -> &[usize] {
        self.tableau.basis()
    }

    /// Take ownership of the solved auxiliary tableau.
    pub fn into_tableau(self) -> Tableau {
        self.tableau
    }
}

/// Find a basic feasible solution using Bland's rule and no iteration limit.
///
/// See `Solver::find_start_corner`.
pub fn find_start_corner(tableau: &Tableau) -> Result<FeasibilityResult, SimplexError> {
    Solver::new().find_start_corner(tableau)
}

/// Reduces the artificial cost of an auxiliary tableau to zero, if possible.
///
/// # Arguments
///
/// * `tableau`: Tableau of the original problem. It is only read.
/// * `max_iterations`: Limit on the number of pivots, if any.
///
/// # Return value
///
/// Whether the original problem has a basic feasible solution, and if so, the solved auxiliary
/// tableau.
pub(crate) fn primal<PR: PivotRule>(
    tableau: &Tableau,
    max_iterations: Option<usize>,
) -> Result<FeasibilityResult, SimplexError> {
    let mut artificial = artificial_tableau(tableau)?;
    debug!(
        "Phase one with {} artificial variables, initial artificial cost {}",
        artificial.nr_rows(), artificial.negated_objective_value(),
    );

    match pivot_until_terminal::<PR>(&mut artificial, max_iterations)? {
        PrimalResult::Optimal => {},
        PrimalResult::Unbounded { .. } => unreachable!("artificial cost is bounded from below by zero"),
    }

    if artificial.negated_objective_value().is_zero() {
        let first_artificial = tableau.nr_rows() + tableau.nr_columns();
        remove_artificial_basis_variables(&mut artificial, first_artificial)?;
        debug!("Phase one found a feasible basis: {:?}", artificial.basis());

        Ok(FeasibilityResult::Feasible(StartCorner { tableau: artificial }))
    } else {
        debug!("Phase one ended with artificial cost {}", artificial.negated_objective_value());

        Ok(FeasibilityResult::Infeasible)
    }
}

/// Build the auxiliary tableau.
///
/// The original columns are followed by an explicit identity block for the original basic
/// variables. Rows with a negative constraint value are negated, such that the artificial
/// variables, which are the basis of the new tableau, start out feasible. The cost row is the
/// column sum; the objective value is the sum of all constraint values.
pub(crate) fn artificial_tableau(tableau: &Tableau) -> Result<Tableau, SimplexError> {
    let (nr_rows, nr_columns) = (tableau.nr_rows(), tableau.nr_columns());
    let mut artificial = Tableau::new(nr_rows, nr_columns + 2 * nr_rows)?;

    for row in 0..nr_rows {
        let flip = tableau.constraint_value(row).is_negative();
        let signed = |value: &Rational| if flip { value.checked_neg() } else { Ok(*value) };

        for column in 0..nr_columns {
            artificial.set_coefficient(row, column, signed(tableau.coefficient(row, column))?);
        }
        artificial.set_coefficient(row, nr_columns + row, signed(&Rational::one())?);
        artificial.set_constraint_value(row, signed(tableau.constraint_value(row))?);
    }

    for column in 0..artificial.nr_columns() {
        let total = (0..nr_rows).try_fold(Rational::zero(), |total, row| {
            total.checked_add(artificial.coefficient(row, column))
        })?;
        artificial.set_cost(column, total);
    }
    let total = (0..nr_rows).try_fold(Rational::zero(), |total, row| {
        total.checked_add(artificial.constraint_value(row))
    })?;
    artificial.set_negated_objective_value(total);

    let non_basis = tableau.non_basis().iter()
        .chain(tableau.basis())
        .copied()
        .collect::<Vec<_>>();
    artificial.set_non_basis(&non_basis);
    let first_artificial = nr_rows + nr_columns;
    let basis = (first_artificial..first_artificial + nr_rows).collect::<Vec<_>>();
    artificial.set_basis(&basis);

    Ok(artificial)
}

/// Pivot the artificial variables that are still basic out of the basis.
///
/// With zero artificial cost, these variables all have value zero, so the pivots don't change the
/// values of the other basic variables, whatever the sign of the pivot element.
///
/// # Arguments
///
/// * `artificial`: Auxiliary tableau with zero artificial cost.
/// * `first_artificial`: Lowest variable index of an artificial variable.
fn remove_artificial_basis_variables(
    artificial: &mut Tableau,
    first_artificial: usize,
) -> Result<(), SimplexError> {
    for row in 0..artificial.nr_rows() {
        if artificial.basis()[row] < first_artificial {
            continue;
        }
        debug_assert!(artificial.constraint_value(row).is_zero());

        let column = (0..artificial.nr_columns())
            .find(|&column| {
                artificial.non_basis()[column] < first_artificial
                    && !artificial.coefficient(row, column).is_zero()
            })
            .ok_or(SimplexError::RedundantConstraint { row })?;
        artificial.step_at(row, column)?;
    }

    Ok(())
}

/// Move a tableau into the basis of a start corner.
///
/// Each variable of the start corner that is not yet basic is pivoted in by force, bypassing the
/// pivot rule. It preferably replaces the basic variable of the same row; if that variable is
/// also part of the start corner or the element is zero, the first row that does allow the
/// exchange is used instead. At most one pivot per row is performed.
///
/// # Arguments
///
/// * `start_corner`: Result of the first phase.
/// * `tableau`: The tableau of the problem that was given to the first phase.
pub fn prepare_with_start_corner(
    start_corner: &StartCorner,
    tableau: &mut Tableau,
) -> Result<(), SimplexError> {
    let target = start_corner.basis();
    debug_assert_eq!(target.len(), tableau.nr_rows());
    let in_target = target.iter().copied().collect::<HashSet<_>>();

    let mut nr_forced = 0;
    for (line, &entering) in target.iter().enumerate() {
        if tableau.basis().contains(&entering) {
            continue;
        }

        let column = tableau.non_basis().iter()
            .position(|&variable| variable == entering)
            .ok_or(SimplexError::UnknownVariable(entering))?;
        let may_leave = |row: usize| {
            !in_target.contains(&tableau.basis()[row]) && !tableau.coefficient(row, column).is_zero()
        };
        let pivot_line = Some(line)
            .filter(|&row| may_leave(row))
            .or_else(|| (0..tableau.nr_rows()).find(|&row| may_leave(row)))
            .ok_or(SimplexError::SingularBasis { variable: entering })?;

        tableau.step_at(pivot_line, column)?;
        nr_forced += 1;
    }

    debug!("Prepared phase two with {} forced pivots", nr_forced);
    debug_assert!(tableau.is_primal_feasible());

    Ok(())
}
