//! # Number representations
//!
//! The values the algorithms compute with. The tableau and its operations live in
//! `algorithm::two_phase`.
pub mod number_types;
