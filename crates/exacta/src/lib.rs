//! # Exacta
//!
//! Exact numerics for Rust: rationals that never lose a digit, scaled
//! decimals with bounded-precision division, and continued fractions that
//! connect the two.
//!
//! ## Features
//!
//! - **Rationals with sentinels**: `NaN` and signed infinities are ordinary
//!   values, so `1/0` is `Infinity` rather than a panic
//! - **Scaled decimals**: exact `+ - *`, division rounded half-up at a
//!   configurable precision ceiling
//! - **Continued fractions**: finite expansions of rationals, periodic
//!   expansions of square roots, lazy convergents
//!
//! ## Quick Start
//!
//! ```rust
//! use exacta::prelude::*;
//!
//! let third = Rational::from_i64(1, 3);
//! assert_eq!(&third + &third + &third, Rational::one());
//!
//! let root = ContinuedFraction::sqrt(&Integer::new(2)).unwrap();
//! assert_eq!(root.to_string(), "[1; (2)]");
//! assert_eq!(root.convergent(3), Some(Rational::from_i64(17, 12)));
//!
//! let decimal = to_decimal(&Rational::from_i64(5, 8), &DecimalContext::default()).unwrap();
//! assert_eq!(decimal.to_string(), "0.625");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use exacta_cfrac as cfrac;
pub use exacta_decimal as decimal;
pub use exacta_integers as integers;
pub use exacta_rational as rational;

pub use exacta_integers::{Error, Result};

use exacta_decimal::{BigDecimal, DecimalContext};
use exacta_rational::Rational;

/// Converts a finite rational to a decimal by dividing numerator by
/// denominator under `ctx`.
///
/// Rationals whose denominator has prime factors other than 2 and 5 have no
/// terminating expansion and come back rounded to `ctx.precision` digits.
///
/// # Errors
///
/// Returns [`Error::Arithmetic`] for `NaN` and the infinities, and
/// [`Error::InvalidArgument`] if `ctx` is unusable.
pub fn to_decimal(value: &Rational, ctx: &DecimalContext) -> Result<BigDecimal> {
    if !value.is_finite() {
        return Err(Error::Arithmetic(format!(
            "{value} has no decimal representation"
        )));
    }
    let numerator = BigDecimal::from_integer(value.numerator());
    let denominator = BigDecimal::from_integer(value.denominator());
    numerator.div_with(&denominator, ctx)
}

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::to_decimal;
    pub use exacta_cfrac::{ContinuedFraction, Convergents, Quotients};
    pub use exacta_decimal::{BigDecimal, DecimalContext};
    pub use exacta_integers::{Error, Integer, Result};
    pub use exacta_rational::Rational;
    pub use num_traits::{One, Zero};
}

#[cfg(test)]
mod proptests;
