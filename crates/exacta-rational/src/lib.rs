//! # exacta-rational
//!
//! Exact rational arithmetic with sentinel values.
//!
//! A [`Rational`] is either a reduced fraction with a positive denominator,
//! NaN, or one of the two infinities. Every operation has a defined result
//! for every combination of operands:
//!
//! ```text
//!   NaN ⊕ x            = NaN        (for every operator)
//!   ∞ + ∞              = ∞
//!   ∞ + (−∞)           = NaN
//!   0 × ∞              = NaN
//!   x / 0   (x ≠ 0)    = ±∞         (sign of x)
//! ```
//!
//! Sorting uses the total order `NaN < −∞ < finite < +∞`.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod rational;

#[cfg(feature = "serde")]
mod serde_impl;

#[cfg(test)]
mod proptests;

pub use rational::Rational;
