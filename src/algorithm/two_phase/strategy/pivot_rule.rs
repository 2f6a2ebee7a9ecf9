//! # Pivot rules
//!
//! Strategies for moving from basis to basis.
use crate::algorithm::two_phase::tableau::Tableau;
use crate::error::SimplexError;

/// Deciding how to pivot.
///
/// During the Simplex method, one needs to decide how to move from basic solution to basic
/// solution. The pivot rule describes that behavior.
///
/// Once the column has been selected, a row needs to be found. This decision is made by the
/// tableau's ratio test and is the same for every rule.
pub trait PivotRule {
    /// Create a new instance.
    fn new() -> Self;

    /// Pivot selection for the primal Simplex method.
    ///
    /// # Return value
    ///
    /// A pivot if the tableau can be improved, otherwise whether it is optimal or unbounded.
    fn select_primal_pivot(&mut self, tableau: &Tableau) -> Result<PivotSelection, SimplexError>;
}

/// Result of a pivot selection.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PivotSelection {
    /// Pivot on this element next.
    Pivot {
        /// Row of the leaving variable.
        line: usize,
        /// Column of the entering variable.
        column: usize,
    },
    /// No column has a positive relative cost.
    Optimal,
    /// The selected improving column has no positive entry: increasing the variable of `column`
    /// improves the objective without ever violating a constraint.
    Unbounded {
        /// Improving column without a leaving row.
        column: usize,
    },
}

/// Bland's rule: the improving variable with the smallest index enters the basis.
///
/// Together with the ratio test, which breaks ties on the smallest index of the leaving variable,
/// this rule never cycles. Variable indices, not column positions, decide: columns change
/// variables with every pivot. If the entering column has no leaving row, the tableau is
/// reported unbounded.
#[derive(Clone, Copy, Debug, Default)]
pub struct Bland;
impl PivotRule for Bland {
    fn new() -> Self {
        Self
    }

    fn select_primal_pivot(&mut self, tableau: &Tableau) -> Result<PivotSelection, SimplexError> {
        let entering = (0..tableau.nr_columns())
            .filter(|&column| tableau.cost(column).is_positive())
            .min_by_key(|&column| tableau.non_basis()[column]);

        let Some(column) = entering else {
            return Ok(PivotSelection::Optimal);
        };

        Ok(match tableau.select_primal_pivot_row(column)? {
            Some(line) => PivotSelection::Pivot { line, column },
            None => PivotSelection::Unbounded { column },
        })
    }
}

/// Pivot on the column with the largest relative cost, the first one in case of a tie.
///
/// Often needs fewer pivots than `Bland`, but it can cycle on degenerate problems.
#[derive(Clone, Copy, Debug, Default)]
pub struct Dantzig;
impl PivotRule for Dantzig {
    fn new() -> Self {
        Self
    }

    fn select_primal_pivot(&mut self, tableau: &Tableau) -> Result<PivotSelection, SimplexError> {
        let steepest = (0..tableau.nr_columns())
            .filter(|&column| tableau.cost(column).is_positive())
            .fold(None, |best: Option<usize>, column| match best {
                Some(best) if tableau.cost(best) >= tableau.cost(column) => Some(best),
                _ => Some(column),
            });

        let Some(column) = steepest else {
            return Ok(PivotSelection::Optimal);
        };

        Ok(match tableau.select_primal_pivot_row(column)? {
            Some(line) => PivotSelection::Pivot { line, column },
            None => PivotSelection::Unbounded { column },
        })
    }
}
