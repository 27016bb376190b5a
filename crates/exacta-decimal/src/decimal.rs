//! Scaled decimals.
//!
//! A [`BigDecimal`] stores `coefficient × 10^exponent` with every trailing
//! zero of the coefficient folded into the exponent, so two decimals are
//! equal exactly when their fields are.

use num_traits::{One, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;
use tracing::trace;

use exacta_integers::{Error, Integer, ParseKind, Result};

use crate::DecimalContext;

/// An arbitrary precision decimal number.
///
/// Invariant: the coefficient is zero or not divisible by ten, and zero has
/// exponent zero.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BigDecimal {
    coefficient: Integer,
    exponent: Integer,
}

/// Returns 10^gap for an exponent difference.
///
/// # Panics
///
/// Panics if the gap does not fit in a `usize`; such a scale could not be
/// allocated anyway.
fn scale(gap: &Integer) -> Integer {
    match gap.to_usize() {
        Some(gap) => Integer::pow10(gap),
        None => panic!("decimal exponent gap {gap} is out of range"),
    }
}

impl BigDecimal {
    /// Creates `coefficient × 10^exponent` in canonical form.
    #[must_use]
    pub fn new(coefficient: Integer, exponent: Integer) -> Self {
        if coefficient.is_zero() {
            return Self::zero();
        }

        let ten = Integer::new(10);
        let mut coefficient = coefficient;
        let mut exponent = exponent;
        loop {
            let (quotient, remainder) = coefficient.div_rem_floor(&ten);
            if !remainder.is_zero() {
                break;
            }
            coefficient = quotient;
            exponent = exponent + Integer::one();
        }
        Self {
            coefficient,
            exponent,
        }
    }

    /// Creates a decimal from an integer.
    #[must_use]
    pub fn from_integer(n: Integer) -> Self {
        Self::new(n, Integer::zero())
    }

    /// Returns the coefficient.
    #[must_use]
    pub fn coefficient(&self) -> &Integer {
        &self.coefficient
    }

    /// Returns the power of ten the coefficient is scaled by.
    #[must_use]
    pub fn exponent(&self) -> &Integer {
        &self.exponent
    }

    /// Returns the sign: -1, 0, or 1.
    #[must_use]
    pub fn signum(&self) -> i8 {
        self.coefficient.signum()
    }

    /// Returns true if negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.coefficient.is_negative()
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self {
            coefficient: self.coefficient.abs(),
            exponent: self.exponent.clone(),
        }
    }

    /// Returns true if the value has no fractional part.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        !self.exponent.is_negative()
    }

    /// Integer part, rounding toward zero.
    #[must_use]
    pub fn trunc(&self) -> Integer {
        if self.is_integer() {
            return &self.coefficient * &scale(&self.exponent);
        }
        let shift = -&self.exponent;
        if shift >= Integer::from(self.coefficient.decimal_digits()) {
            return Integer::zero();
        }
        &self.coefficient / &scale(&shift)
    }

    /// Estimated base-10 magnitude, `floor(log10(|coefficient|)) + exponent`.
    ///
    /// Zero has magnitude zero.
    #[must_use]
    pub fn magnitude(&self) -> Integer {
        Integer::from(self.coefficient.decimal_digits() - 1) + &self.exponent
    }

    /// Computes self^exp.
    #[must_use]
    pub fn pow(&self, exp: u32) -> Self {
        Self::new(
            self.coefficient.pow(exp),
            &self.exponent * &Integer::from(u64::from(exp)),
        )
    }

    /// Rewrites both operands over their smaller exponent.
    ///
    /// Returns the two scaled coefficients and the shared exponent.
    fn aligned(&self, other: &Self) -> (Integer, Integer, Integer) {
        match self.exponent.cmp(&other.exponent) {
            Ordering::Equal => (
                self.coefficient.clone(),
                other.coefficient.clone(),
                self.exponent.clone(),
            ),
            Ordering::Less => (
                self.coefficient.clone(),
                &other.coefficient * &scale(&(&other.exponent - &self.exponent)),
                self.exponent.clone(),
            ),
            Ordering::Greater => (
                &self.coefficient * &scale(&(&self.exponent - &other.exponent)),
                other.coefficient.clone(),
                other.exponent.clone(),
            ),
        }
    }

    /// Divides with the default context.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Arithmetic`] if `rhs` is zero.
    pub fn checked_div(&self, rhs: &Self) -> Result<Self> {
        self.div_with(rhs, &DecimalContext::default())
    }

    /// Divides, extending the quotient by at most `ctx.precision` digits.
    ///
    /// A quotient that has not terminated within the budget is rounded
    /// half-up on its last retained digit.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Arithmetic`] if `rhs` is zero and
    /// [`Error::InvalidArgument`] if the context is unusable.
    pub fn div_with(&self, rhs: &Self, ctx: &DecimalContext) -> Result<Self> {
        if rhs.is_zero() {
            return Err(Error::Arithmetic(format!("division of {self} by zero")));
        }
        ctx.validate()?;
        if self.is_zero() {
            return Ok(Self::zero());
        }
        if rhs.is_one() {
            return Ok(self.clone());
        }

        let negative = self.is_negative() != rhs.is_negative();
        let divisor = rhs.coefficient.abs();
        let mut exponent = &self.exponent - &rhs.exponent;
        let (mut quotient, mut remainder) = self.coefficient.abs().div_rem_floor(&divisor);

        let mut extended = 0;
        while !remainder.is_zero() && extended < ctx.precision {
            let step = ctx.chunk_digits.min(ctx.precision - extended);
            let shift = Integer::pow10(step);
            let (digits, rest) = (remainder * &shift).div_rem_floor(&divisor);
            quotient = quotient * &shift + digits;
            remainder = rest;
            exponent = exponent - Integer::from(step);
            extended += step;
        }

        if !remainder.is_zero() {
            let next_digit = (remainder * Integer::new(10)).div_floor(&divisor);
            trace!(
                precision = ctx.precision,
                next_digit = %next_digit,
                "decimal division hit the precision ceiling; rounding half-up"
            );
            if next_digit >= Integer::new(5) {
                quotient = quotient + Integer::one();
            }
        }

        let coefficient = if negative { -quotient } else { quotient };
        Ok(Self::new(coefficient, exponent))
    }

    /// Renders the value, switching to `<coefficient>e<exponent>` when the
    /// exponent magnitude exceeds `ctx.display_exponent_limit`.
    #[must_use]
    pub fn to_string_with(&self, ctx: &DecimalContext) -> String {
        if self.is_zero() {
            return "0".to_owned();
        }

        let exponent = self
            .exponent
            .to_i64()
            .filter(|e| e.unsigned_abs() <= ctx.display_exponent_limit);
        let Some(exponent) = exponent else {
            return format!("{}e{}", self.coefficient, self.exponent);
        };

        let sign = if self.is_negative() { "-" } else { "" };
        let digits = self.coefficient.abs().to_string();
        let mut out = String::with_capacity(digits.len() + 4);
        out.push_str(sign);

        if exponent >= 0 {
            out.push_str(&digits);
            out.extend(std::iter::repeat('0').take(exponent.unsigned_abs() as usize));
        } else {
            let shift = exponent.unsigned_abs() as usize;
            if shift < digits.len() {
                let (whole, fraction) = digits.split_at(digits.len() - shift);
                out.push_str(whole);
                out.push('.');
                out.push_str(fraction);
            } else {
                out.push_str("0.");
                out.extend(std::iter::repeat('0').take(shift - digits.len()));
                out.push_str(&digits);
            }
        }
        out
    }
}

impl Zero for BigDecimal {
    fn zero() -> Self {
        Self {
            coefficient: Integer::zero(),
            exponent: Integer::zero(),
        }
    }

    fn is_zero(&self) -> bool {
        self.coefficient.is_zero()
    }
}

impl One for BigDecimal {
    fn one() -> Self {
        Self {
            coefficient: Integer::one(),
            exponent: Integer::zero(),
        }
    }

    fn is_one(&self) -> bool {
        self.coefficient.is_one() && self.exponent.is_zero()
    }
}

impl Default for BigDecimal {
    fn default() -> Self {
        Self::zero()
    }
}

impl Ord for BigDecimal {
    fn cmp(&self, other: &Self) -> Ordering {
        let sign = self.signum();
        match sign.cmp(&other.signum()) {
            Ordering::Equal => {}
            unequal => return unequal,
        }
        if sign == 0 {
            return Ordering::Equal;
        }

        // Differing magnitudes settle the order without scaling.
        let by_magnitude = self.magnitude().cmp(&other.magnitude());
        if by_magnitude != Ordering::Equal {
            return if sign > 0 {
                by_magnitude
            } else {
                by_magnitude.reverse()
            };
        }

        let (lhs, rhs, _) = self.aligned(other);
        lhs.cmp(&rhs)
    }
}

impl PartialOrd for BigDecimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for BigDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigDecimal({}e{})", self.coefficient, self.exponent)
    }
}

impl fmt::Display for BigDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_with(&DecimalContext::default()))
    }
}

impl FromStr for BigDecimal {
    type Err = Error;

    /// Parses `[+-]digits[.digits][(e|E)[+-]digits]`.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::parse(ParseKind::Decimal, s);
        let text = s.trim();

        let (mantissa, exponent) = match text.find(['e', 'E']) {
            Some(at) => (&text[..at], text[at + 1..].parse::<Integer>().map_err(|_| invalid())?),
            None => (text, Integer::zero()),
        };
        let (sign, unsigned) = match mantissa.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", mantissa.strip_prefix('+').unwrap_or(mantissa)),
        };
        let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));
        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if whole.len() + fraction.len() == 0 || !all_digits(whole) || !all_digits(fraction) {
            return Err(invalid());
        }

        let coefficient: Integer = format!("{sign}{whole}{fraction}")
            .parse()
            .map_err(|_| invalid())?;
        Ok(Self::new(coefficient, exponent - Integer::from(fraction.len())))
    }
}

impl TryFrom<f64> for BigDecimal {
    type Error = Error;

    /// Converts through the shortest decimal that round-trips to `value`.
    fn try_from(value: f64) -> Result<Self> {
        if !value.is_finite() {
            return Err(Error::InvalidArgument(format!(
                "{value} has no decimal representation"
            )));
        }
        value.to_string().parse()
    }
}

impl From<Integer> for BigDecimal {
    fn from(n: Integer) -> Self {
        Self::from_integer(n)
    }
}

impl From<i64> for BigDecimal {
    fn from(n: i64) -> Self {
        Self::from_integer(Integer::new(n))
    }
}

impl From<i32> for BigDecimal {
    fn from(n: i32) -> Self {
        Self::from_integer(Integer::from(n))
    }
}

impl From<u64> for BigDecimal {
    fn from(n: u64) -> Self {
        Self::from_integer(Integer::from(n))
    }
}

// Arithmetic operations

impl Add for &BigDecimal {
    type Output = BigDecimal;

    fn add(self, rhs: Self) -> Self::Output {
        if self.is_zero() {
            return rhs.clone();
        }
        if rhs.is_zero() {
            return self.clone();
        }
        let (lhs, rhs, exponent) = self.aligned(rhs);
        BigDecimal::new(lhs + rhs, exponent)
    }
}

impl Add for BigDecimal {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        &self + &rhs
    }
}

impl Add<&BigDecimal> for BigDecimal {
    type Output = Self;

    fn add(self, rhs: &BigDecimal) -> Self::Output {
        &self + rhs
    }
}

impl Sub for &BigDecimal {
    type Output = BigDecimal;

    fn sub(self, rhs: Self) -> Self::Output {
        if rhs.is_zero() {
            return self.clone();
        }
        let (lhs, rhs, exponent) = self.aligned(rhs);
        BigDecimal::new(lhs - rhs, exponent)
    }
}

impl Sub for BigDecimal {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        &self - &rhs
    }
}

impl Sub<&BigDecimal> for BigDecimal {
    type Output = Self;

    fn sub(self, rhs: &BigDecimal) -> Self::Output {
        &self - rhs
    }
}

impl Mul for &BigDecimal {
    type Output = BigDecimal;

    fn mul(self, rhs: Self) -> Self::Output {
        if self.is_zero() || rhs.is_zero() {
            return BigDecimal::zero();
        }
        if self.is_one() {
            return rhs.clone();
        }
        if rhs.is_one() {
            return self.clone();
        }
        BigDecimal::new(
            &self.coefficient * &rhs.coefficient,
            &self.exponent + &rhs.exponent,
        )
    }
}

impl Mul for BigDecimal {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        &self * &rhs
    }
}

impl Mul<&BigDecimal> for BigDecimal {
    type Output = Self;

    fn mul(self, rhs: &BigDecimal) -> Self::Output {
        &self * rhs
    }
}

impl Div for &BigDecimal {
    type Output = BigDecimal;

    /// # Panics
    ///
    /// Panics if `rhs` is zero; use [`BigDecimal::checked_div`] to get an
    /// error instead.
    fn div(self, rhs: Self) -> Self::Output {
        match self.checked_div(rhs) {
            Ok(quotient) => quotient,
            Err(err) => panic!("{err}"),
        }
    }
}

impl Div for BigDecimal {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        &self / &rhs
    }
}

impl Neg for BigDecimal {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            coefficient: -self.coefficient,
            exponent: self.exponent,
        }
    }
}

impl Neg for &BigDecimal {
    type Output = BigDecimal;

    fn neg(self) -> Self::Output {
        BigDecimal {
            coefficient: -&self.coefficient,
            exponent: self.exponent.clone(),
        }
    }
}
