//! # Algorithms
use std::fmt::{Display, Formatter, Result as FormatResult};

use itertools::Itertools;

use crate::data::number_types::rational::Rational;

pub mod two_phase;

/// A linear program is either infeasible, unbounded or has a finite optimum.
///
/// This is determined as the result of an algorithm.
#[allow(missing_docs)]
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum OptimizationResult {
    Infeasible,
    FiniteOptimum(Solution),
    Unbounded,
}

/// An optimal basic solution.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Solution {
    /// Value of the objective function.
    pub objective_value: Rational,
    /// Value of every variable, structural and slack, indexed by variable.
    pub values: Vec<Rational>,
}

impl Display for Solution {
    fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
        writeln!(f, "Objective function value: {}", self.objective_value)?;
        write!(f, "[ {} ]", self.values.iter().join(", "))
    }
}
