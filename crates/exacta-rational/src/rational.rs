//! Arbitrary precision rational numbers with NaN and signed infinities.
//!
//! Finite values are always stored in lowest terms with a positive
//! denominator. [`Rational::new`] is the only place that builds a finite
//! value, and every arithmetic result goes through it.

use num_traits::{One, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::iter::{Product, Sum};
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};
use std::str::FromStr;

use exacta_integers::{Error, Integer, ParseKind, Result};

#[derive(Clone, PartialEq, Eq, Hash)]
enum Repr {
    NaN,
    NegativeInfinity,
    Finite {
        numerator: Integer,
        denominator: Integer,
    },
    PositiveInfinity,
}

/// An arbitrary precision rational number, extended with NaN and ±Infinity.
///
/// `Rational` is totally ordered for sorting purposes:
/// `NaN < -Infinity < finite values < +Infinity`, and `NaN == NaN`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Rational(Repr);

impl Rational {
    /// Creates a rational from numerator and denominator, reducing it to
    /// canonical form.
    ///
    /// A zero denominator yields a sentinel: `+Infinity`, `-Infinity` or
    /// `NaN` depending on the sign of the numerator.
    #[must_use]
    pub fn new(numerator: Integer, denominator: Integer) -> Self {
        if denominator.is_zero() {
            return match numerator.signum() {
                1 => Self::infinity(),
                -1 => Self::neg_infinity(),
                _ => Self::nan(),
            };
        }
        if numerator.is_zero() {
            return Self::zero();
        }

        let g = numerator.gcd(&denominator);
        let (numerator, denominator) = (numerator / &g, denominator / &g);
        let (numerator, denominator) = if denominator.is_negative() {
            (-numerator, -denominator)
        } else {
            (numerator, denominator)
        };
        Self(Repr::Finite {
            numerator,
            denominator,
        })
    }

    /// Creates a rational from an integer (denominator = 1).
    #[must_use]
    pub fn from_integer(n: Integer) -> Self {
        Self(Repr::Finite {
            numerator: n,
            denominator: Integer::one(),
        })
    }

    /// Creates a rational from i64 numerator and denominator.
    #[must_use]
    pub fn from_i64(numerator: i64, denominator: i64) -> Self {
        Self::new(Integer::new(numerator), Integer::new(denominator))
    }

    /// Not a number.
    #[must_use]
    pub fn nan() -> Self {
        Self(Repr::NaN)
    }

    /// Positive infinity.
    #[must_use]
    pub fn infinity() -> Self {
        Self(Repr::PositiveInfinity)
    }

    /// Negative infinity.
    #[must_use]
    pub fn neg_infinity() -> Self {
        Self(Repr::NegativeInfinity)
    }

    /// Returns the numerator.
    ///
    /// Sentinels report their encoding: 0 for NaN, ±1 for ±Infinity.
    #[must_use]
    pub fn numerator(&self) -> Integer {
        match &self.0 {
            Repr::NaN => Integer::zero(),
            Repr::NegativeInfinity => Integer::new(-1),
            Repr::PositiveInfinity => Integer::one(),
            Repr::Finite { numerator, .. } => numerator.clone(),
        }
    }

    /// Returns the denominator; 0 for every sentinel.
    #[must_use]
    pub fn denominator(&self) -> Integer {
        match &self.0 {
            Repr::Finite { denominator, .. } => denominator.clone(),
            _ => Integer::zero(),
        }
    }

    /// Returns true if this is NaN.
    #[must_use]
    pub fn is_nan(&self) -> bool {
        matches!(self.0, Repr::NaN)
    }

    /// Returns true for either infinity.
    #[must_use]
    pub fn is_infinite(&self) -> bool {
        matches!(self.0, Repr::PositiveInfinity | Repr::NegativeInfinity)
    }

    /// Returns true if this is neither NaN nor infinite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        matches!(self.0, Repr::Finite { .. })
    }

    /// Returns true if this rational is an integer.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        matches!(&self.0, Repr::Finite { denominator, .. } if denominator.is_one())
    }

    /// Converts to an integer if the denominator is 1.
    #[must_use]
    pub fn to_integer(&self) -> Option<Integer> {
        match &self.0 {
            Repr::Finite {
                numerator,
                denominator,
            } if denominator.is_one() => Some(numerator.clone()),
            _ => None,
        }
    }

    /// Returns the sign: -1, 0, or 1.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Arithmetic`] for NaN, which has no sign.
    pub fn signum(&self) -> Result<i8> {
        match &self.0 {
            Repr::NaN => Err(Error::Arithmetic("NaN has no sign".into())),
            Repr::NegativeInfinity => Ok(-1),
            Repr::PositiveInfinity => Ok(1),
            Repr::Finite { numerator, .. } => Ok(numerator.signum()),
        }
    }

    /// Sign of a value already known not to be NaN.
    fn sign_of_number(&self) -> i8 {
        self.signum().unwrap_or(0)
    }

    fn infinity_with_sign(sign: i8) -> Self {
        match sign {
            1 => Self::infinity(),
            -1 => Self::neg_infinity(),
            _ => Self::nan(),
        }
    }

    /// Returns true if negative (including -Infinity).
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.sign_of_number() < 0
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        if self.is_negative() {
            -self
        } else {
            self.clone()
        }
    }

    /// Returns the reciprocal (1/x).
    ///
    /// `1/0` is `+Infinity` and `1/±Infinity` is zero.
    #[must_use]
    pub fn recip(&self) -> Self {
        Self::one() / self
    }

    /// Largest integer not greater than this value.
    ///
    /// NaN and the infinities are returned unchanged.
    #[must_use]
    pub fn floor(&self) -> Self {
        match &self.0 {
            Repr::Finite {
                numerator,
                denominator,
            } => Self::from_integer(numerator.div_floor(denominator)),
            _ => self.clone(),
        }
    }

    /// Smallest integer not less than this value.
    #[must_use]
    pub fn ceil(&self) -> Self {
        -(-self).floor()
    }

    /// Integer part, rounding toward zero.
    #[must_use]
    pub fn trunc(&self) -> Self {
        if self.is_negative() {
            self.ceil()
        } else {
            self.floor()
        }
    }

    /// Computes self^exp by square-and-multiply.
    ///
    /// Any non-NaN value raised to zero is one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `exp` is negative.
    pub fn pow(&self, exp: i64) -> Result<Self> {
        if exp < 0 {
            return Err(Error::InvalidArgument(format!(
                "negative exponent {exp}; take the reciprocal first"
            )));
        }
        if self.is_nan() {
            return Ok(Self::nan());
        }

        let mut result = Self::one();
        let mut base = self.clone();
        let mut exp = exp.unsigned_abs();

        while exp > 0 {
            if exp & 1 == 1 {
                result = &result * &base;
            }
            exp >>= 1;
            if exp > 0 {
                base = &base * &base;
            }
        }

        Ok(result)
    }

    /// Floored division with remainder.
    ///
    /// For finite operands the quotient is `floor(self / rhs)` and
    /// `self == quotient * rhs + remainder`, with the remainder zero or
    /// carrying the sign of `rhs`. See the [`Rem`] impl for the sentinel
    /// cases.
    #[must_use]
    pub fn div_rem(&self, rhs: &Self) -> (Self, Self) {
        let remainder = self % rhs;
        let quotient = match (&self.0, &rhs.0) {
            (Repr::Finite { .. }, Repr::NegativeInfinity | Repr::PositiveInfinity)
                if remainder.is_infinite() =>
            {
                Self::from_integer(Integer::new(-1))
            }
            _ => (self / rhs).floor(),
        };
        (quotient, remainder)
    }

    /// Converts to the nearest `f64`.
    ///
    /// Numerators and denominators too large for a float are combined as
    /// `exp(ln(n) - ln(d))` so the result does not overflow.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        const EXACT_BITS: usize = 53;
        match &self.0 {
            Repr::NaN => f64::NAN,
            Repr::NegativeInfinity => f64::NEG_INFINITY,
            Repr::PositiveInfinity => f64::INFINITY,
            Repr::Finite {
                numerator,
                denominator,
            } => {
                if numerator.is_zero() {
                    return 0.0;
                }
                if numerator.bit_len() <= EXACT_BITS && denominator.bit_len() <= EXACT_BITS {
                    return numerator.to_f64() / denominator.to_f64();
                }
                let magnitude = (numerator.ln() - denominator.ln()).exp();
                if numerator.is_negative() {
                    -magnitude
                } else {
                    magnitude
                }
            }
        }
    }

    /// Rank in the sorting order: NaN, -Infinity, finite, +Infinity.
    fn rank(&self) -> u8 {
        match self.0 {
            Repr::NaN => 0,
            Repr::NegativeInfinity => 1,
            Repr::Finite { .. } => 2,
            Repr::PositiveInfinity => 3,
        }
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Self::from_integer(Integer::zero())
    }

    fn is_zero(&self) -> bool {
        matches!(&self.0, Repr::Finite { numerator, .. } if numerator.is_zero())
    }
}

impl One for Rational {
    fn one() -> Self {
        Self::from_integer(Integer::one())
    }

    fn is_one(&self) -> bool {
        matches!(
            &self.0,
            Repr::Finite { numerator, denominator } if numerator.is_one() && denominator.is_one()
        )
    }
}

impl Default for Rational {
    fn default() -> Self {
        Self::zero()
    }
}

impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        match (&self.0, &other.0) {
            (
                Repr::Finite {
                    numerator: a,
                    denominator: b,
                },
                Repr::Finite {
                    numerator: c,
                    denominator: d,
                },
            ) => (&(a * d) - &(c * b)).signum().cmp(&0),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rational({self})")
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Repr::NaN => f.write_str("NaN"),
            Repr::NegativeInfinity => f.write_str("-Infinity"),
            Repr::PositiveInfinity => f.write_str("Infinity"),
            Repr::Finite {
                numerator,
                denominator,
            } if denominator.is_one() => write!(f, "{numerator}"),
            Repr::Finite {
                numerator,
                denominator,
            } => write!(f, "{numerator}/{denominator}"),
        }
    }
}

impl FromStr for Rational {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let text = s.trim();
        match text {
            "NaN" | "nan" => return Ok(Self::nan()),
            "Infinity" | "+Infinity" | "inf" | "+inf" => return Ok(Self::infinity()),
            "-Infinity" | "-inf" => return Ok(Self::neg_infinity()),
            _ => {}
        }

        let invalid = |_| Error::parse(ParseKind::Rational, s);
        match text.split_once('/') {
            Some((numerator, denominator)) => {
                let numerator = numerator.trim().parse::<Integer>().map_err(invalid)?;
                let denominator = denominator.trim().parse::<Integer>().map_err(invalid)?;
                Ok(Self::new(numerator, denominator))
            }
            None => text.parse::<Integer>().map(Self::from_integer).map_err(invalid),
        }
    }
}

// Arithmetic operations
//
// Each operation spells out the sentinel cases before the cross-multiplied
// formula for two finite operands.

fn add_rational(lhs: &Rational, rhs: &Rational) -> Rational {
    match (&lhs.0, &rhs.0) {
        (Repr::NaN, _) | (_, Repr::NaN) => Rational::nan(),
        (Repr::PositiveInfinity, Repr::NegativeInfinity)
        | (Repr::NegativeInfinity, Repr::PositiveInfinity) => Rational::nan(),
        (Repr::PositiveInfinity, _) | (_, Repr::PositiveInfinity) => Rational::infinity(),
        (Repr::NegativeInfinity, _) | (_, Repr::NegativeInfinity) => Rational::neg_infinity(),
        (
            Repr::Finite {
                numerator: a,
                denominator: b,
            },
            Repr::Finite {
                numerator: c,
                denominator: d,
            },
        ) => {
            let denominator = b.lcm(d);
            let numerator = a * &(&denominator / b) + c * &(&denominator / d);
            Rational::new(numerator, denominator)
        }
    }
}

fn mul_rational(lhs: &Rational, rhs: &Rational) -> Rational {
    match (&lhs.0, &rhs.0) {
        (Repr::NaN, _) | (_, Repr::NaN) => Rational::nan(),
        (
            Repr::Finite {
                numerator: a,
                denominator: b,
            },
            Repr::Finite {
                numerator: c,
                denominator: d,
            },
        ) => Rational::new(a * c, b * d),
        // At least one infinity: zero times infinity has no value.
        _ => Rational::infinity_with_sign(lhs.sign_of_number() * rhs.sign_of_number()),
    }
}

fn div_rational(lhs: &Rational, rhs: &Rational) -> Rational {
    match (&lhs.0, &rhs.0) {
        (Repr::NaN, _) | (_, Repr::NaN) => Rational::nan(),
        (
            Repr::PositiveInfinity | Repr::NegativeInfinity,
            Repr::PositiveInfinity | Repr::NegativeInfinity,
        ) => Rational::nan(),
        (Repr::PositiveInfinity | Repr::NegativeInfinity, Repr::Finite { numerator, .. }) => {
            if numerator.is_zero() {
                lhs.clone()
            } else {
                Rational::infinity_with_sign(lhs.sign_of_number() * numerator.signum())
            }
        }
        (Repr::Finite { .. }, Repr::PositiveInfinity | Repr::NegativeInfinity) => Rational::zero(),
        // A zero divisor lands on the sentinel branch of `new`.
        (
            Repr::Finite {
                numerator: a,
                denominator: b,
            },
            Repr::Finite {
                numerator: c,
                denominator: d,
            },
        ) => Rational::new(a * d, b * c),
    }
}

fn rem_rational(lhs: &Rational, rhs: &Rational) -> Rational {
    match (&lhs.0, &rhs.0) {
        (Repr::NaN, _)
        | (_, Repr::NaN)
        | (Repr::PositiveInfinity | Repr::NegativeInfinity, _) => Rational::nan(),
        (Repr::Finite { numerator, .. }, Repr::PositiveInfinity | Repr::NegativeInfinity) => {
            // Limit of a - b * floor(a / b) as b grows without bound.
            if numerator.is_zero() || numerator.signum() == rhs.sign_of_number() {
                lhs.clone()
            } else {
                rhs.clone()
            }
        }
        (
            Repr::Finite {
                numerator: a,
                denominator: b,
            },
            Repr::Finite {
                numerator: c,
                denominator: d,
            },
        ) => {
            if c.is_zero() {
                return Rational::nan();
            }
            let scaled_lhs = a * d;
            let scaled_rhs = b * c;
            let (_, remainder) = scaled_lhs.div_rem_floor(&scaled_rhs);
            Rational::new(remainder, b * d)
        }
    }
}

fn neg_rational(value: &Rational) -> Rational {
    match &value.0 {
        Repr::NaN => Rational::nan(),
        Repr::NegativeInfinity => Rational::infinity(),
        Repr::PositiveInfinity => Rational::neg_infinity(),
        Repr::Finite {
            numerator,
            denominator,
        } => Rational(Repr::Finite {
            numerator: -numerator,
            denominator: denominator.clone(),
        }),
    }
}

macro_rules! forward_binop {
    ($trait:ident, $method:ident, $body:ident) => {
        impl $trait for Rational {
            type Output = Rational;

            fn $method(self, rhs: Rational) -> Rational {
                $body(&self, &rhs)
            }
        }

        impl $trait<&Rational> for Rational {
            type Output = Rational;

            fn $method(self, rhs: &Rational) -> Rational {
                $body(&self, rhs)
            }
        }

        impl $trait<Rational> for &Rational {
            type Output = Rational;

            fn $method(self, rhs: Rational) -> Rational {
                $body(self, &rhs)
            }
        }

        impl $trait for &Rational {
            type Output = Rational;

            fn $method(self, rhs: &Rational) -> Rational {
                $body(self, rhs)
            }
        }
    };
}

forward_binop!(Add, add, add_rational);
forward_binop!(Mul, mul, mul_rational);
forward_binop!(Div, div, div_rational);
forward_binop!(Rem, rem, rem_rational);

fn sub_rational(lhs: &Rational, rhs: &Rational) -> Rational {
    add_rational(lhs, &neg_rational(rhs))
}

forward_binop!(Sub, sub, sub_rational);

impl Neg for Rational {
    type Output = Self;

    fn neg(self) -> Self::Output {
        neg_rational(&self)
    }
}

impl Neg for &Rational {
    type Output = Rational;

    fn neg(self) -> Self::Output {
        neg_rational(self)
    }
}

impl Sum for Rational {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, x| acc + x)
    }
}

impl<'a> Sum<&'a Rational> for Rational {
    fn sum<I: Iterator<Item = &'a Rational>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, x| acc + x)
    }
}

impl Product for Rational {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::one(), |acc, x| acc * x)
    }
}

// Conversions

impl From<Integer> for Rational {
    fn from(n: Integer) -> Self {
        Self::from_integer(n)
    }
}

impl From<i64> for Rational {
    fn from(n: i64) -> Self {
        Self::from_integer(Integer::new(n))
    }
}

impl From<i32> for Rational {
    fn from(n: i32) -> Self {
        Self::from_integer(Integer::from(n))
    }
}

impl From<f64> for Rational {
    /// Exact value of a float, found by doubling it until it is integral.
    ///
    /// NaN and the infinities map to the matching sentinels.
    fn from(value: f64) -> Self {
        if value.is_nan() {
            return Self::nan();
        }
        if value.is_infinite() {
            return if value > 0.0 {
                Self::infinity()
            } else {
                Self::neg_infinity()
            };
        }

        let two = Integer::new(2);
        let mut scaled = value;
        let mut denominator = Integer::one();
        while scaled.fract() != 0.0 {
            scaled *= 2.0;
            denominator = denominator * &two;
        }

        match Integer::try_from_f64(scaled) {
            Some(numerator) => Self::new(numerator, denominator),
            None => Self::nan(),
        }
    }
}

impl From<&Rational> for f64 {
    fn from(value: &Rational) -> Self {
        value.to_f64()
    }
}

impl TryFrom<&Rational> for i64 {
    type Error = Error;

    /// Truncates toward zero.
    fn try_from(value: &Rational) -> Result<Self> {
        match &value.0 {
            Repr::Finite {
                numerator,
                denominator,
            } => (numerator / denominator).to_i64().ok_or_else(|| {
                Error::Arithmetic(format!("{value} does not fit in a 64-bit integer"))
            }),
            _ => Err(Error::Arithmetic(format!(
                "{value} has no integer value"
            ))),
        }
    }
}

impl TryFrom<&Rational> for Integer {
    type Error = Error;

    /// Truncates toward zero.
    fn try_from(value: &Rational) -> Result<Self> {
        value
            .trunc()
            .to_integer()
            .ok_or_else(|| Error::Arithmetic(format!("{value} has no integer value")))
    }
}
