//! # exacta-integers
//!
//! Arbitrary precision integers for the exacta numeric engine.
//!
//! This crate wraps `dashu` to provide:
//! - Arbitrary precision integers (`Integer`) with floored division,
//!   integer square roots and magnitude estimators
//! - The error type shared by every exacta crate (`Error`)
//!
//! ## Performance Notes
//!
//! - Small integers (fitting in a machine word) use stack allocation
//! - Large integers are heap-allocated with GMP-like performance

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod integer;

#[cfg(test)]
mod proptests;

pub use error::{Error, ParseKind, Result};
pub use integer::Integer;
