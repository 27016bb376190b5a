//! Arbitrary precision integers.
//!
//! This module provides a wrapper around `dashu::Integer` with the
//! operations the exact number types are built from: floored division,
//! gcd, exponentiation, integer square roots and cheap magnitude estimates.

use dashu::base::{Abs, BitTest, Gcd, Signed as DashuSigned};
use dashu::integer::IBig;
use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};
use std::str::FromStr;

use crate::error::{Error, ParseKind, Result};

/// Number of mantissa bits an `f64` holds exactly.
const F64_EXACT_BITS: usize = 53;

/// An arbitrary precision integer.
///
/// This type wraps `dashu::IBig`. The `/` and `%` operators truncate toward
/// zero like the primitive integers; [`Integer::div_rem_floor`] rounds toward
/// negative infinity instead.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Integer(IBig);

impl Integer {
    /// Creates a new integer from an i64.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self(IBig::from(value))
    }

    /// Creates an integer from a string in the given base.
    ///
    /// Accepts an optional sign followed by one or more digits of `radix`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `radix` is outside `2..=36`, and
    /// a parse error if the string is not a valid integer.
    pub fn from_str_radix(s: &str, radix: u32) -> Result<Self> {
        if !(2..=36).contains(&radix) {
            return Err(Error::InvalidArgument(format!("unsupported radix {radix}")));
        }
        let unsigned = s.strip_prefix(['+', '-']).unwrap_or(s);
        if unsigned.is_empty() || !unsigned.chars().all(|c| c.is_digit(radix)) {
            return Err(Error::parse(ParseKind::Integer, s));
        }
        let digits = s.strip_prefix('+').unwrap_or(s);
        IBig::from_str_radix(digits, radix)
            .map(Self)
            .map_err(|_| Error::parse(ParseKind::Integer, s))
    }

    /// Converts an integral, finite float exactly.
    ///
    /// Returns `None` for NaN, infinities and values with a fractional part.
    #[must_use]
    pub fn try_from_f64(value: f64) -> Option<Self> {
        if !value.is_finite() || value.fract() != 0.0 {
            return None;
        }
        if value == 0.0 {
            return Some(Self::zero());
        }

        let bits = value.to_bits();
        let biased = ((bits >> 52) & 0x7ff) as usize;
        // Subnormals are never integral, so the implicit bit is always set.
        let mantissa = Self(IBig::from((bits & ((1u64 << 52) - 1)) | (1u64 << 52)));
        let magnitude = if biased >= 1075 {
            mantissa * Self::new(2).pow_usize(biased - 1075)
        } else {
            mantissa / Self::new(2).pow_usize(1075 - biased)
        };

        Some(if value < 0.0 { -magnitude } else { magnitude })
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self(self.0.clone().abs())
    }

    /// Returns the sign: -1, 0, or 1.
    #[must_use]
    pub fn signum(&self) -> i8 {
        if self.0.is_zero() {
            0
        } else if DashuSigned::is_positive(&self.0) {
            1
        } else {
            -1
        }
    }

    /// Returns true if this integer is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        DashuSigned::is_negative(&self.0)
    }

    /// Returns true if this integer is strictly positive.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.signum() > 0
    }

    /// Returns the number of bits needed to represent this integer.
    #[must_use]
    pub fn bit_len(&self) -> usize {
        self.0.bit_len()
    }

    /// Computes the greatest common divisor.
    ///
    /// The result is never negative, and `gcd(0, 0) == 0`.
    #[must_use]
    pub fn gcd(&self, other: &Self) -> Self {
        if self.is_zero() && other.is_zero() {
            return Self::zero();
        }
        Self(IBig::from(self.0.clone().gcd(other.0.clone())))
    }

    /// Computes the least common multiple.
    #[must_use]
    pub fn lcm(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }
        let g = self.gcd(other);
        Self(&self.0 / &g.0 * &other.0).abs()
    }

    /// Floored division with remainder.
    ///
    /// The quotient is rounded toward negative infinity, so the remainder is
    /// zero or carries the sign of `divisor`.
    ///
    /// # Panics
    ///
    /// Panics if `divisor` is zero.
    #[must_use]
    pub fn div_rem_floor(&self, divisor: &Self) -> (Self, Self) {
        assert!(!divisor.is_zero(), "attempt to divide by zero");
        let quotient = &self.0 / &divisor.0;
        let remainder = &self.0 % &divisor.0;
        if !remainder.is_zero()
            && DashuSigned::is_negative(&remainder) != DashuSigned::is_negative(&divisor.0)
        {
            (Self(quotient - IBig::ONE), Self(remainder + &divisor.0))
        } else {
            (Self(quotient), Self(remainder))
        }
    }

    /// Floored quotient; see [`Integer::div_rem_floor`].
    ///
    /// # Panics
    ///
    /// Panics if `divisor` is zero.
    #[must_use]
    pub fn div_floor(&self, divisor: &Self) -> Self {
        self.div_rem_floor(divisor).0
    }

    /// Computes self^exp for non-negative exp.
    #[must_use]
    pub fn pow(&self, exp: u32) -> Self {
        self.pow_usize(exp as usize)
    }

    /// Computes self^exp with a machine-word exponent.
    #[must_use]
    pub fn pow_usize(&self, exp: usize) -> Self {
        Self(self.0.pow(exp))
    }

    /// Returns 10^exp.
    #[must_use]
    pub fn pow10(exp: usize) -> Self {
        Self(IBig::from(10u8).pow(exp))
    }

    /// Integer square root, rounded down.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the integer is negative.
    pub fn sqrt_floor(&self) -> Result<Self> {
        if self.is_negative() {
            return Err(Error::InvalidArgument(format!(
                "square root of negative integer {self}"
            )));
        }
        if self.bit_len() <= 1 {
            return Ok(self.clone());
        }

        // Newton iteration from an overestimate decreases monotonically
        // until it reaches the floor of the root.
        let two = Self::new(2);
        let mut x = two.pow_usize(self.bit_len().div_ceil(2));
        loop {
            let y = (&x + &(self / &x)) / &two;
            if y >= x {
                return Ok(x);
            }
            x = y;
        }
    }

    /// Returns true if this integer is the square of an integer.
    #[must_use]
    pub fn is_perfect_square(&self) -> bool {
        match self.sqrt_floor() {
            Ok(root) => &root * &root == *self,
            Err(_) => false,
        }
    }

    /// Number of base-10 digits in the absolute value; zero has one digit.
    ///
    /// `decimal_digits() - 1` is exactly `floor(log10(|self|))` for non-zero
    /// values. The count is read off the bit length unless the value sits
    /// close to a power of ten, where it is settled by comparison.
    #[must_use]
    pub fn decimal_digits(&self) -> usize {
        let bits = self.bit_len();
        if bits == 0 {
            return 1;
        }

        // |self| lies in [2^(bits-1), 2^bits).
        #[allow(clippy::cast_precision_loss)]
        let (low, high, slack) = (
            (bits - 1) as f64 * std::f64::consts::LOG10_2,
            bits as f64 * std::f64::consts::LOG10_2,
            1e-9 + bits as f64 * 1e-15,
        );
        let decade = low.floor();
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let decade_digits = decade as usize;
        if low - decade > slack && high < decade + 1.0 - slack {
            return decade_digits + 1;
        }

        let mut digits = decade_digits.saturating_sub(1);
        let magnitude = self.abs();
        let ten = Self::new(10);
        let mut bound = Self::pow10(digits);
        while magnitude >= bound {
            digits += 1;
            bound = bound * &ten;
        }
        digits
    }

    /// Natural logarithm of the absolute value.
    ///
    /// Approximate, but stays finite far beyond the range of `f64`. Returns
    /// negative infinity for zero.
    #[must_use]
    pub fn ln(&self) -> f64 {
        let (top, shift) = self.abs().leading_bits();
        #[allow(clippy::cast_precision_loss)]
        let shift = shift as f64;
        top.ln() + shift * std::f64::consts::LN_2
    }

    /// Nearest `f64`, saturating to an infinity when out of range.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        let (top, shift) = self.abs().leading_bits();
        let magnitude = match i32::try_from(shift) {
            Ok(shift) => top * 2f64.powi(shift),
            Err(_) => f64::INFINITY,
        };
        if self.is_negative() {
            -magnitude
        } else {
            magnitude
        }
    }

    /// Splits a non-negative value into `top * 2^shift` with `top` exact in
    /// an `f64`.
    fn leading_bits(&self) -> (f64, usize) {
        let shift = self.bit_len().saturating_sub(F64_EXACT_BITS);
        let top = if shift == 0 {
            self.clone()
        } else {
            self / &Self::new(2).pow_usize(shift)
        };
        #[allow(clippy::cast_precision_loss)]
        let top = top.to_i64().map_or(f64::NAN, |t| t as f64);
        (top, shift)
    }

    /// Attempts to convert to an i64.
    ///
    /// Returns `None` if the value doesn't fit in an i64.
    #[must_use]
    pub fn to_i64(&self) -> Option<i64> {
        self.0.clone().try_into().ok()
    }

    /// Attempts to convert to a u64.
    #[must_use]
    pub fn to_u64(&self) -> Option<u64> {
        self.0.clone().try_into().ok()
    }

    /// Attempts to convert to a usize.
    #[must_use]
    pub fn to_usize(&self) -> Option<usize> {
        self.0.clone().try_into().ok()
    }
}

impl Zero for Integer {
    fn zero() -> Self {
        Self(IBig::ZERO)
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl One for Integer {
    fn one() -> Self {
        Self(IBig::ONE)
    }

    fn is_one(&self) -> bool {
        self.0 == IBig::ONE
    }
}

impl fmt::Debug for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Integer({})", self.0)
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Integer {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_radix(s, 10)
    }
}

// Arithmetic operations
impl Add for Integer {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Add<&Integer> for Integer {
    type Output = Self;

    fn add(self, rhs: &Integer) -> Self::Output {
        Self(self.0 + &rhs.0)
    }
}

impl Add for &Integer {
    type Output = Integer;

    fn add(self, rhs: Self) -> Self::Output {
        Integer(&self.0 + &rhs.0)
    }
}

impl Sub for Integer {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Sub<&Integer> for Integer {
    type Output = Self;

    fn sub(self, rhs: &Integer) -> Self::Output {
        Self(self.0 - &rhs.0)
    }
}

impl Sub for &Integer {
    type Output = Integer;

    fn sub(self, rhs: Self) -> Self::Output {
        Integer(&self.0 - &rhs.0)
    }
}

impl Mul for Integer {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl Mul<&Integer> for Integer {
    type Output = Self;

    fn mul(self, rhs: &Integer) -> Self::Output {
        Self(self.0 * &rhs.0)
    }
}

impl Mul for &Integer {
    type Output = Integer;

    fn mul(self, rhs: Self) -> Self::Output {
        Integer(&self.0 * &rhs.0)
    }
}

impl Div for Integer {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        Self(self.0 / rhs.0)
    }
}

impl Div<&Integer> for Integer {
    type Output = Self;

    fn div(self, rhs: &Integer) -> Self::Output {
        Self(self.0 / &rhs.0)
    }
}

impl Div for &Integer {
    type Output = Integer;

    fn div(self, rhs: Self) -> Self::Output {
        Integer(&self.0 / &rhs.0)
    }
}

impl Rem for Integer {
    type Output = Self;

    fn rem(self, rhs: Self) -> Self::Output {
        Self(self.0 % rhs.0)
    }
}

impl Rem for &Integer {
    type Output = Integer;

    fn rem(self, rhs: Self) -> Self::Output {
        Integer(&self.0 % &rhs.0)
    }
}

impl Neg for Integer {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Neg for &Integer {
    type Output = Integer;

    fn neg(self) -> Self::Output {
        Integer(-&self.0)
    }
}

impl From<i64> for Integer {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<i32> for Integer {
    fn from(value: i32) -> Self {
        Self::new(i64::from(value))
    }
}

impl From<u64> for Integer {
    fn from(value: u64) -> Self {
        Self(IBig::from(value))
    }
}

impl From<usize> for Integer {
    fn from(value: usize) -> Self {
        Self(IBig::from(value))
    }
}

impl From<IBig> for Integer {
    fn from(value: IBig) -> Self {
        Self(value)
    }
}
