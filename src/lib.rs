//! # An exact linear program solver
//!
//! Linear programs in canonical form, `maximize c^T x` subject to `Ax <= b` and `x >= 0`, are
//! solved with the two phase Simplex method on a dense tableau, following the book Combinatorial
//! Optimization by Christos H. Papadimitriou and Kenneth Steiglitz.
//!
//! All computations are done with exact fractions of 64 bit integers. When a value doesn't fit,
//! an error is returned rather than an approximation.
//!
//! ```
//! use rational_simplex::{OptimizationResult, R, Tableau, solve};
//!
//! let mut tableau = Tableau::from_canonical(
//!     vec![R!(300), R!(500)],
//!     vec![vec![R!(1), R!(2)], vec![R!(1), R!(1)], vec![R!(0), R!(3)]],
//!     vec![R!(170), R!(150), R!(180)],
//! )?;
//!
//! match solve(&mut tableau)? {
//!     OptimizationResult::FiniteOptimum(solution) => assert_eq!(solution.objective_value, R!(49000)),
//!     _ => unreachable!(),
//! }
//! # Ok::<(), rational_simplex::SimplexError>(())
//! ```
#![warn(missing_docs)]

pub mod algorithm;
pub mod data;
pub mod error;

pub use algorithm::{OptimizationResult, Solution};
pub use algorithm::two_phase::{find_best_solution, find_start_corner, prepare_with_start_corner, solve, Solver};
pub use algorithm::two_phase::phase_one::{FeasibilityResult, StartCorner};
pub use algorithm::two_phase::strategy::pivot_rule::{Bland, Dantzig, PivotRule, PivotSelection};
pub use algorithm::two_phase::tableau::Tableau;
pub use data::number_types::rational::Rational;
pub use error::{ArithmeticError, SimplexError};

#[cfg(test)]
mod tests;
