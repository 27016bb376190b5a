//! The continued fraction value type and its constructors.

use num_traits::{One, Zero};
use rustc_hash::FxHashMap;
use std::fmt;
use tracing::trace;

use exacta_integers::{Error, Integer, Result};
use exacta_rational::Rational;

use crate::iter::{Convergents, Quotients, Terms};

/// A simple continued fraction with an optional repeating tail.
///
/// The quotient sequence is `non_periodic` followed by `periodic` repeated
/// forever. Every quotient after the floor is positive.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct ContinuedFraction {
    floor: Integer,
    non_periodic: Vec<Integer>,
    periodic: Vec<Integer>,
}

fn check_quotients(quotients: &[Integer]) -> Result<()> {
    match quotients.iter().find(|q| !q.is_positive()) {
        Some(q) => Err(Error::InvalidArgument(format!(
            "continued fraction quotient {q} is not positive"
        ))),
        None => Ok(()),
    }
}

impl ContinuedFraction {
    /// Creates a continued fraction from its parts.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if any quotient is zero or
    /// negative.
    pub fn new(floor: Integer, non_periodic: Vec<Integer>, periodic: Vec<Integer>) -> Result<Self> {
        check_quotients(&non_periodic)?;
        check_quotients(&periodic)?;
        Ok(Self {
            floor,
            non_periodic,
            periodic,
        })
    }

    /// Creates a finite continued fraction from its terms, floor first.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingInput`] if `terms` is empty and
    /// [`Error::InvalidArgument`] if a quotient after the floor is not
    /// positive.
    pub fn from_terms<I>(terms: I) -> Result<Self>
    where
        I: IntoIterator<Item = Integer>,
    {
        let mut terms = terms.into_iter();
        let floor = terms.next().ok_or(Error::MissingInput("continued fraction terms"))?;
        Self::new(floor, terms.collect(), Vec::new())
    }

    /// Expands a rational by the Euclidean algorithm.
    ///
    /// The expansion is always finite.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Arithmetic`] for NaN and the infinities.
    pub fn from_rational(value: &Rational) -> Result<Self> {
        if !value.is_finite() {
            return Err(Error::Arithmetic(format!(
                "{value} has no continued fraction expansion"
            )));
        }

        let mut terms = Vec::new();
        let mut current = value.clone();
        loop {
            let whole = current.floor();
            let remainder = &current - &whole;
            // Floors of finite rationals are finite integers.
            terms.extend(whole.to_integer());
            if remainder.is_zero() {
                break;
            }
            current = remainder.recip();
        }

        let mut terms = terms.into_iter();
        let floor = terms.next().unwrap_or_else(Integer::zero);
        Ok(Self {
            floor,
            non_periodic: terms.collect(),
            periodic: Vec::new(),
        })
    }

    /// Expands the square root of `n`.
    ///
    /// Perfect squares give a fraction with no quotients; every other `n`
    /// gives a purely periodic expansion.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `n` is negative.
    pub fn sqrt(n: &Integer) -> Result<Self> {
        let a0 = n.sqrt_floor()?;
        if &a0 * &a0 == *n {
            return Ok(Self {
                floor: a0,
                non_periodic: Vec::new(),
                periodic: Vec::new(),
            });
        }

        // State (m, d) after each step, mapped to the index of the quotient
        // it produced. `a` is a function of (m, d), so the pair suffices.
        let mut seen: FxHashMap<(Integer, Integer), usize> = FxHashMap::default();
        let mut quotients = Vec::new();
        let (mut m, mut d, mut a) = (Integer::zero(), Integer::one(), a0.clone());
        loop {
            m = &(&d * &a) - &m;
            d = (n - &(&m * &m)) / d;
            a = (&a0 + &m) / &d;

            if let Some(&start) = seen.get(&(m.clone(), d.clone())) {
                let periodic = quotients.split_off(start);
                trace!(n = %n, period = periodic.len(), "closed square root period");
                return Ok(Self {
                    floor: a0,
                    non_periodic: quotients,
                    periodic,
                });
            }
            seen.insert((m.clone(), d.clone()), quotients.len());
            quotients.push(a.clone());
        }
    }

    /// Returns the integer part.
    #[must_use]
    pub fn floor(&self) -> &Integer {
        &self.floor
    }

    /// Returns the quotients before the repeating block.
    #[must_use]
    pub fn non_periodic(&self) -> &[Integer] {
        &self.non_periodic
    }

    /// Returns the repeating block; empty for finite fractions.
    #[must_use]
    pub fn periodic(&self) -> &[Integer] {
        &self.periodic
    }

    /// Returns true if the quotients repeat forever.
    #[must_use]
    pub fn is_periodic(&self) -> bool {
        !self.periodic.is_empty()
    }

    /// Returns true if the fraction has finitely many quotients.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.periodic.is_empty()
    }

    /// The quotients after the floor.
    ///
    /// Infinite when the fraction is periodic; the caller decides when to
    /// stop.
    #[must_use]
    pub fn quotients(&self) -> Quotients<'_> {
        Quotients::new(self)
    }

    /// The floor followed by the quotients.
    #[must_use]
    pub fn terms(&self) -> Terms<'_> {
        Terms::new(self)
    }

    /// The convergents, starting with `floor/1`.
    #[must_use]
    pub fn convergents(&self) -> Convergents<'_> {
        Convergents::new(self)
    }

    /// Returns the `n`-th convergent, or `None` past the end of a finite
    /// fraction.
    #[must_use]
    pub fn convergent(&self, n: usize) -> Option<Rational> {
        self.convergents().nth(n)
    }

    /// Returns the exact value of a finite fraction.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Arithmetic`] if the fraction is periodic, since its
    /// value is irrational.
    pub fn to_rational(&self) -> Result<Rational> {
        if self.is_periodic() {
            return Err(Error::Arithmetic(format!(
                "periodic continued fraction {self} has no rational value"
            )));
        }
        Ok(self
            .convergents()
            .last()
            .unwrap_or_else(|| Rational::from_integer(self.floor.clone())))
    }
}

impl From<Integer> for ContinuedFraction {
    fn from(floor: Integer) -> Self {
        Self {
            floor,
            non_periodic: Vec::new(),
            periodic: Vec::new(),
        }
    }
}

impl TryFrom<&Rational> for ContinuedFraction {
    type Error = Error;

    fn try_from(value: &Rational) -> Result<Self> {
        Self::from_rational(value)
    }
}

impl fmt::Display for ContinuedFraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}", self.floor)?;
        let mut separator = "; ";
        for q in &self.non_periodic {
            write!(f, "{separator}{q}")?;
            separator = ", ";
        }
        if !self.periodic.is_empty() {
            f.write_str(separator)?;
            f.write_str("(")?;
            for (i, q) in self.periodic.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{q}")?;
            }
            f.write_str(")")?;
        }
        f.write_str("]")
    }
}
