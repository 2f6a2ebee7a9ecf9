//! # Data structures for Simplex
//!
//! Contains the simplex tableau and logic for elementary operations which can be performed upon it.
//!
//! The tableau is kept in canonical form: only the columns of the non basic variables are stored,
//! the basic variables implicitly have an identity matrix as their columns.
use std::cmp::Ordering;
use std::fmt::{Display, Formatter, Result as FormatResult};

use itertools::Itertools;
use log::trace;
use num_traits::{One, Zero};

use crate::algorithm::two_phase::strategy::pivot_rule::{Bland, PivotRule, PivotSelection};
use crate::data::number_types::rational::Rational;
use crate::error::{ArithmeticError, SimplexError};

/// The data structure that is used by the Simplex algorithm: the Simplex tableau.
///
/// It owns all values that describe the current solution basis. No value is ever shared with
/// another tableau; the first phase of the two phase method copies what it needs.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Tableau {
    nr_rows: usize,
    nr_columns: usize,

    /// Coefficients of the non basic variables, `nr_rows` rows of `nr_columns` values each.
    constraints: Vec<Rational>,
    /// Right hand side, equal to the values of the basic variables.
    constraint_values: Vec<Rational>,
    /// Relative cost of each non basic variable. Positive values indicate improving directions.
    cost: Vec<Rational>,
    /// The objective function value is tracked negated.
    negated_objective: Rational,

    /// Variable index that is basic in each row.
    basis: Vec<usize>,
    /// Variable index of each non basic column.
    non_basis: Vec<usize>,

    /// Selected `(line, column)` for the next step, if any.
    pivot: Option<(usize, usize)>,
}

impl Tableau {
    /// Create a new tableau filled with zeros.
    ///
    /// # Arguments
    ///
    /// * `equations`: Number of rows.
    /// * `variables`: Total number of variables, basic and non basic. Should be at least
    /// `equations`.
    ///
    /// # Return value
    ///
    /// A tableau with `variables - equations` non basic columns and no pivot, or an error when
    /// the dimensions are inconsistent or memory for the cells can't be obtained.
    pub fn new(equations: usize, variables: usize) -> Result<Self, SimplexError> {
        let nr_columns = variables.checked_sub(equations)
            .ok_or_else(|| SimplexError::Dimension(format!(
                "{} variables are not enough to have a basic variable in each of {} equations",
                variables, equations,
            )))?;
        let nr_cells = equations.checked_mul(nr_columns)
            .ok_or_else(|| SimplexError::Dimension(format!(
                "a tableau of {} by {} is too large", equations, nr_columns,
            )))?;

        Ok(Self {
            nr_rows: equations,
            nr_columns,

            constraints: filled(Rational::zero(), nr_cells)?,
            constraint_values: filled(Rational::zero(), equations)?,
            cost: filled(Rational::zero(), nr_columns)?,
            negated_objective: Rational::zero(),

            basis: filled(0, equations)?,
            non_basis: filled(0, nr_columns)?,

            pivot: None,
        })
    }

    /// Create the tableau of `maximize c^T x` subject to `Ax <= b`, `x >= 0`.
    ///
    /// A slack variable is added for every constraint. The structural variables get indices
    /// `0..n` and are non basic, the slacks get indices `n..n + m` and form the basis.
    ///
    /// # Arguments
    ///
    /// * `cost`: Objective function coefficients `c` of length `n`.
    /// * `constraints`: Rows of `A`, each of length `n`.
    /// * `constraint_values`: Right hand side `b`, one value per row of `A`.
    pub fn from_canonical(
        cost: Vec<Rational>,
        constraints: Vec<Vec<Rational>>,
        constraint_values: Vec<Rational>,
    ) -> Result<Self, SimplexError> {
        let (nr_rows, nr_columns) = (constraints.len(), cost.len());
        if constraint_values.len() != nr_rows {
            return Err(SimplexError::Dimension(format!(
                "{} constraints but {} right hand side values", nr_rows, constraint_values.len(),
            )));
        }
        if let Some((row, values)) = constraints.iter().find_position(|row| row.len() != nr_columns) {
            return Err(SimplexError::Dimension(format!(
                "constraint {} has {} coefficients, expected {}", row, values.len(), nr_columns,
            )));
        }

        let mut tableau = Self::new(nr_rows, nr_rows + nr_columns)?;
        for (cell, value) in tableau.constraints.iter_mut().zip_eq(constraints.into_iter().flatten()) {
            *cell = value;
        }
        tableau.constraint_values = constraint_values;
        tableau.cost = cost;
        for (index, variable) in tableau.non_basis.iter_mut().enumerate() {
            *variable = index;
        }
        for (index, variable) in tableau.basis.iter_mut().enumerate() {
            *variable = nr_columns + index;
        }

        Ok(tableau)
    }

    /// Select the next pivot with Bland's rule and store it.
    ///
    /// See `update_pivot_with`.
    pub fn update_pivot(&mut self) -> Result<PivotSelection, SimplexError> {
        self.update_pivot_with(&mut Bland)
    }

    /// Select the next pivot and store it.
    ///
    /// # Return value
    ///
    /// The selection. The stored pivot is only set when the selection is a
    /// `PivotSelection::Pivot`; for an optimal or unbounded tableau it is cleared.
    pub fn update_pivot_with<PR: PivotRule>(
        &mut self,
        rule: &mut PR,
    ) -> Result<PivotSelection, SimplexError> {
        let selection = rule.select_primal_pivot(self)?;
        self.pivot = match selection {
            PivotSelection::Pivot { line, column } => Some((line, column)),
            PivotSelection::Optimal | PivotSelection::Unbounded { .. } => None,
        };

        Ok(selection)
    }

    /// Determine the row to pivot on, given the column.
    ///
    /// This is the row with the smallest ratio between the constraint value and a positive entry
    /// of the column. When several rows attain that ratio, the row whose basic variable has the
    /// smallest index is chosen, as Bland's rule requires.
    ///
    /// # Arguments
    ///
    /// * `column`: Index of a non basic column, in range `0` until `self.nr_columns()`.
    ///
    /// # Return value
    ///
    /// Index of the row to pivot on. If not found, the column has no positive entry and the
    /// objective is unbounded in that direction.
    pub fn select_primal_pivot_row(&self, column: usize) -> Result<Option<usize>, ArithmeticError> {
        debug_assert!(column < self.nr_columns);

        let mut minimum: Option<(usize, Rational)> = None;
        for row in 0..self.nr_rows {
            let xij = self.coefficient(row, column);
            if xij.is_positive() {
                let ratio = self.constraint_values[row].checked_div(xij)?;
                let better = minimum.as_ref().is_none_or(|(minimum_row, minimum_ratio)| {
                    match ratio.cmp(minimum_ratio) {
                        Ordering::Less => true,
                        Ordering::Equal => self.basis[row] < self.basis[*minimum_row],
                        Ordering::Greater => false,
                    }
                });
                if better {
                    minimum = Some((row, ratio));
                }
            }
        }

        Ok(minimum.map(|(row, _)| row))
    }

    /// Pivot on the stored pivot element.
    ///
    /// The entering variable becomes basic in the pivot line, the leaving variable takes over the
    /// pivot column. The stored pivot is consumed.
    ///
    /// When an error is returned, the tableau is left as it was, including the stored pivot.
    pub fn step(&mut self) -> Result<(), SimplexError> {
        let (line, column) = self.pivot.ok_or(SimplexError::NoPivot)?;
        self.bring_into_basis(line, column)?;
        self.pivot = None;

        Ok(())
    }

    /// Pivot on the given element, bypassing pivot selection.
    ///
    /// A stored pivot is cleared on success. When an error is returned, the tableau is left as
    /// it was.
    pub fn step_at(&mut self, line: usize, column: usize) -> Result<(), SimplexError> {
        self.bring_into_basis(line, column)?;
        self.pivot = None;

        Ok(())
    }

    /// Gauss-Jordan elimination of the pivot column, followed by the exchange of variables.
    ///
    /// All new values are computed into fresh buffers, which only replace the current ones once
    /// every operation succeeded.
    fn bring_into_basis(&mut self, line: usize, column: usize) -> Result<(), SimplexError> {
        if line >= self.nr_rows || column >= self.nr_columns {
            return Err(SimplexError::PivotOutOfRange { line, column });
        }

        let width = self.nr_columns;
        let pivot_value = *self.coefficient(line, column);

        // Pivot row divided by the pivot value, so the pivot column entry is one during elimination
        let mut pivot_row = filled(Rational::zero(), width)?;
        let old_pivot_row = &self.constraints[line * width..(line + 1) * width];
        for (value, old_value) in pivot_row.iter_mut().zip_eq(old_pivot_row) {
            *value = old_value.checked_div(&pivot_value)?;
        }
        let pivot_constraint_value = self.constraint_values[line].checked_div(&pivot_value)?;

        let mut constraints = filled(Rational::zero(), self.constraints.len())?;
        let mut constraint_values = filled(Rational::zero(), self.nr_rows)?;
        let rows = constraints.chunks_exact_mut(width)
            .zip_eq(self.constraints.chunks_exact(width))
            .zip_eq(constraint_values.iter_mut().zip_eq(&self.constraint_values))
            .enumerate();
        for (row, ((new_row, old_row), (new_value, old_value))) in rows {
            if row == line {
                new_row.copy_from_slice(&pivot_row);
                new_row[column] = Rational::one().checked_div(&pivot_value)?;
                *new_value = pivot_constraint_value;
            } else {
                let factor = old_row[column];
                eliminate(new_row, old_row, &factor, &pivot_row)?;
                new_row[column] = factor.checked_div(&pivot_value)?.checked_neg()?;
                *new_value = old_value.checked_sub_mul(&factor, &pivot_constraint_value)?;
            }
        }

        let factor = self.cost[column];
        let mut cost = filled(Rational::zero(), width)?;
        eliminate(&mut cost, &self.cost, &factor, &pivot_row)?;
        cost[column] = factor.checked_div(&pivot_value)?.checked_neg()?;
        let negated_objective = self.negated_objective
            .checked_sub_mul(&factor, &pivot_constraint_value)?;

        self.constraints = constraints;
        self.constraint_values = constraint_values;
        self.cost = cost;
        self.negated_objective = negated_objective;

        trace!(
            "Pivot on ({}, {}): variable {} enters, variable {} leaves",
            line, column, self.non_basis[column], self.basis[line],
        );
        std::mem::swap(&mut self.basis[line], &mut self.non_basis[column]);
        debug_assert!(self.is_valid_partition());

        Ok(())
    }

    /// Get the current basic solution.
    ///
    /// # Return value
    ///
    /// A vector of length `nr_rows + nr_columns`, indexed by variable: the constraint value of its
    /// row for a basic variable and zero for a non basic variable.
    pub fn solution(&self) -> Result<Vec<Rational>, SimplexError> {
        let mut solution = filled(Rational::zero(), self.nr_rows + self.nr_columns)?;
        for (&variable, value) in self.basis.iter().zip_eq(&self.constraint_values) {
            solution[variable] = *value;
        }

        Ok(solution)
    }

    /// Get the value of the objective function in the current basic solution.
    pub fn objective_function_value(&self) -> Result<Rational, ArithmeticError> {
        self.negated_objective.checked_neg()
    }

    /// The objective function value as it is stored in the tableau: negated.
    pub fn negated_objective_value(&self) -> &Rational {
        &self.negated_objective
    }

    /// Whether the basis variables and non basis variables together are a permutation of all
    /// variable indices.
    ///
    /// Quadratic in the number of variables, but it doesn't allocate.
    pub fn is_valid_partition(&self) -> bool {
        let nr_variables = self.nr_rows + self.nr_columns;
        let variables = || self.basis.iter().chain(&self.non_basis);

        variables().enumerate().all(|(index, &variable)| {
            variable < nr_variables && !variables().take(index).any(|&other| other == variable)
        })
    }

    /// Whether the current basic solution satisfies all nonnegativity constraints.
    pub fn is_primal_feasible(&self) -> bool {
        self.constraint_values.iter().all(|value| !value.is_negative())
    }

    /// Number of rows in the tableau.
    pub fn nr_rows(&self) -> usize {
        self.nr_rows
    }

    /// Number of non basic columns in the tableau.
    pub fn nr_columns(&self) -> usize {
        self.nr_columns
    }

    /// Coefficient of a non basic variable in a row.
    pub fn coefficient(&self, row: usize, column: usize) -> &Rational {
        debug_assert!(row < self.nr_rows);
        debug_assert!(column < self.nr_columns);

        &self.constraints[row * self.nr_columns + column]
    }

    /// Right hand side of a row; the value of the variable that is basic in that row.
    pub fn constraint_value(&self, row: usize) -> &Rational {
        &self.constraint_values[row]
    }

    /// Relative cost of a non basic column.
    pub fn cost(&self, column: usize) -> &Rational {
        &self.cost[column]
    }

    /// Variable indices of the basic variables, by row.
    pub fn basis(&self) -> &[usize] {
        &self.basis
    }

    /// Variable indices of the non basic variables, by column.
    pub fn non_basis(&self) -> &[usize] {
        &self.non_basis
    }

    /// The stored `(line, column)` pivot, if one is selected.
    pub fn pivot(&self) -> Option<(usize, usize)> {
        self.pivot
    }

    /// Row of the stored pivot.
    pub fn pivot_line(&self) -> Option<usize> {
        self.pivot.map(|(line, _)| line)
    }

    /// Column of the stored pivot.
    pub fn pivot_column(&self) -> Option<usize> {
        self.pivot.map(|(_, column)| column)
    }

    /// Seed a coefficient. No validation is performed.
    pub fn set_coefficient(&mut self, row: usize, column: usize, value: Rational) {
        debug_assert!(row < self.nr_rows);
        debug_assert!(column < self.nr_columns);

        self.constraints[row * self.nr_columns + column] = value;
    }

    /// Seed a right hand side value.
    pub fn set_constraint_value(&mut self, row: usize, value: Rational) {
        self.constraint_values[row] = value;
    }

    /// Seed a relative cost.
    pub fn set_cost(&mut self, column: usize, value: Rational) {
        self.cost[column] = value;
    }

    /// Seed the negated objective function value.
    pub fn set_negated_objective_value(&mut self, value: Rational) {
        self.negated_objective = value;
    }

    /// Seed the basic variable of every row.
    ///
    /// # Panics
    ///
    /// If the length differs from the number of rows.
    pub fn set_basis(&mut self, basis: &[usize]) {
        self.basis.copy_from_slice(basis);
    }

    /// Seed the variable of every non basic column.
    ///
    /// # Panics
    ///
    /// If the length differs from the number of columns.
    pub fn set_non_basis(&mut self, non_basis: &[usize]) {
        self.non_basis.copy_from_slice(non_basis);
    }
}

/// Writes `source - factor * pivot_row` into `target`.
fn eliminate(
    target: &mut [Rational],
    source: &[Rational],
    factor: &Rational,
    pivot_row: &[Rational],
) -> Result<(), ArithmeticError> {
    if factor.is_zero() {
        target.copy_from_slice(source);
        return Ok(());
    }

    for ((value, source_value), pivot_row_value) in target.iter_mut().zip_eq(source).zip_eq(pivot_row) {
        *value = source_value.checked_sub_mul(factor, pivot_row_value)?;
    }

    Ok(())
}

/// Vector of a given length, allocated without aborting when memory runs out.
fn filled<T: Clone>(value: T, len: usize) -> Result<Vec<T>, SimplexError> {
    let mut values = Vec::new();
    values.try_reserve_exact(len)?;
    values.resize(len, value);

    Ok(values)
}

impl Display for Tableau {
    fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
        let width = 10;
        let render = |values: &[Rational]| values.iter()
            .map(|value| format!("{:>width$}", value))
            .join(" ");

        writeln!(f, "{} | {:>width$}", render(&self.cost), self.negated_objective)?;
        writeln!(f, "{}", "-".repeat((self.nr_columns + 1) * (width + 1) + 2))?;
        for row in 0..self.nr_rows {
            let values = &self.constraints[row * self.nr_columns..(row + 1) * self.nr_columns];
            writeln!(f, "{} | {:>width$}", render(values), self.constraint_values[row])?;
        }

        match self.pivot {
            Some((line, column)) => writeln!(f, "Pivot: line {}, column {}", line, column)?,
            None => writeln!(f, "Pivot: none")?,
        }
        match self.objective_function_value() {
            Ok(value) => writeln!(f, "Objective function value: {}", value)?,
            Err(error) => writeln!(f, "Objective function value: {}", error)?,
        }
        writeln!(f, "Basis: [{}]", self.basis.iter().join(", "))?;
        write!(f, "Non basis: [{}]", self.non_basis.iter().join(", "))
    }
}
