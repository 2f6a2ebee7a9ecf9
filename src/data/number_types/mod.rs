//! # Number types
//!
//! The simplex method is run over an ordered field. Only exact rational numbers are provided, so
//! that every pivot can be verified exactly; there is no tolerance anywhere in this crate.
pub mod rational;
