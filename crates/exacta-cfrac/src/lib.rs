//! # exacta-cfrac
//!
//! Simple continued fractions
//!
//! ```text
//!   floor + 1/(q1 + 1/(q2 + 1/(q3 + ...)))
//! ```
//!
//! written `[floor; q1, q2, (q3, q4)]`, where the parenthesised block repeats
//! forever. Rationals expand to finite fractions and square roots of
//! non-square integers to purely periodic ones.
//!
//! Quotient and convergent sequences are lazy iterators that borrow the
//! fraction; every call starts a fresh, independent cursor.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod continued_fraction;
pub mod iter;

#[cfg(test)]
mod proptests;

pub use continued_fraction::ContinuedFraction;
pub use iter::{Convergents, Quotients, Terms};
