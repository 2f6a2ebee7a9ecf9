//! # Strategies
//!
//! Decisions that the Simplex method leaves open, such as which improving column to pick.
pub mod pivot_rule;
