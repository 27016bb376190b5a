//! # exacta-decimal
//!
//! Arbitrary precision decimals of the form `coefficient × 10^exponent`.
//!
//! Addition, subtraction and multiplication are exact. Division extends the
//! quotient digit chunk by digit chunk up to the precision ceiling of a
//! [`DecimalContext`]; a quotient that has not terminated by then is rounded
//! half-up on its last retained digit instead of failing.
//!
//! ```text
//!   BigDecimal(5) / BigDecimal(2)   = 2.5         (exact)
//!   BigDecimal(1) / BigDecimal(3)   = 0.333…3     (1500 digits, rounded)
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod context;
pub mod decimal;

#[cfg(feature = "serde")]
mod serde_impl;

#[cfg(test)]
mod proptests;

pub use context::DecimalContext;
pub use decimal::BigDecimal;
