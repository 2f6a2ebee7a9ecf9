//! # Error reporting
//!
//! Failures of the exact arithmetic and of the tableau engine. Whether a linear program is
//! infeasible or unbounded is not an error; see `algorithm::OptimizationResult` for those outcomes.
use std::collections::TryReserveError;

use thiserror::Error;

/// An `ArithmeticError` is created when an operation on rational numbers has no representable
/// result.
#[derive(Error, Debug, Clone, Copy, Eq, PartialEq)]
pub enum ArithmeticError {
    /// The divisor (or the denominator of a newly created value) equals zero.
    #[error("division by zero")]
    DivisionByZero,
    /// The reduced result does not fit in the fixed size numerator or denominator.
    #[error("rational arithmetic overflowed its 64 bit numerator or denominator")]
    Overflow,
}

/// A `SimplexError` is created when the tableau engine can't continue.
///
/// It is the highest error in the error hierarchy.
#[derive(Error, Debug)]
pub enum SimplexError {
    /// A pivot or an update of the cost row failed to compute.
    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),
    /// Memory for the cells of a tableau could not be obtained.
    #[error("could not allocate memory for the tableau: {0}")]
    Allocation(#[from] TryReserveError),
    /// The sizes handed to a constructor don't describe a tableau.
    ///
    /// The contained `String` is a message for the end user.
    #[error("inconsistent dimensions: {0}")]
    Dimension(String),
    /// A step was requested while no pivot was selected.
    #[error("no pivot element has been selected")]
    NoPivot,
    /// The requested pivot element lies outside of the tableau.
    #[error("pivot ({line}, {column}) lies outside of the tableau")]
    PivotOutOfRange {
        /// Requested row.
        line: usize,
        /// Requested non basic column.
        column: usize,
    },
    /// The primal loop did not reach a terminal state within the configured number of pivots.
    #[error("no terminal state reached within {0} pivots")]
    IterationLimit(usize),
    /// A variable of a start corner is not known to the tableau it should be transplanted into.
    #[error("variable {0} is not a variable of this tableau")]
    UnknownVariable(usize),
    /// A variable of a start corner can't be brought into the basis of the tableau.
    #[error("variable {variable} can not be brought into the basis, the start corner is singular")]
    SingularBasis {
        /// Index of the variable that should have entered the basis.
        variable: usize,
    },
    /// An artificial variable could not be removed from the basis of an auxiliary tableau.
    #[error("row {row} only has artificial entries and is redundant")]
    RedundantConstraint {
        /// Row of the auxiliary tableau.
        row: usize,
    },
}
