//! # Integration tests that require a look inside the crate.
//!
//! Convention for function names:
//!
//! * `fn tableau_form()`
//! * `fn artificial_tableau_form()`
//! * `fn start_corner_form()`
//! * `fn optimal_form()`
pub mod problem_1;
pub mod problem_2;
