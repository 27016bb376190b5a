//! Lazy quotient and convergent sequences.
//!
//! Each iterator borrows the fraction and owns its own cursor, so any number
//! of traversals (on any number of threads) proceed independently.

use std::iter::FusedIterator;

use exacta_integers::Integer;
use exacta_rational::Rational;

use crate::ContinuedFraction;

/// Quotients after the floor, cycling through the periodic block forever.
#[derive(Clone, Debug)]
pub struct Quotients<'a> {
    non_periodic: &'a [Integer],
    periodic: &'a [Integer],
    index: usize,
}

impl<'a> Quotients<'a> {
    pub(crate) fn new(cf: &'a ContinuedFraction) -> Self {
        Self {
            non_periodic: cf.non_periodic(),
            periodic: cf.periodic(),
            index: 0,
        }
    }
}

impl<'a> Iterator for Quotients<'a> {
    type Item = &'a Integer;

    fn next(&mut self) -> Option<Self::Item> {
        let item = match self.index.checked_sub(self.non_periodic.len()) {
            None => &self.non_periodic[self.index],
            Some(_) if self.periodic.is_empty() => return None,
            Some(offset) => &self.periodic[offset % self.periodic.len()],
        };
        // Wrap within the cycle so an endless traversal never overflows.
        self.index += 1;
        if self.index == self.non_periodic.len() + self.periodic.len() && !self.periodic.is_empty() {
            self.index = self.non_periodic.len();
        }
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.periodic.is_empty() {
            let left = self.non_periodic.len().saturating_sub(self.index);
            (left, Some(left))
        } else {
            (usize::MAX, None)
        }
    }
}

impl FusedIterator for Quotients<'_> {}

/// The floor followed by the quotients.
#[derive(Clone, Debug)]
pub struct Terms<'a> {
    floor: Option<&'a Integer>,
    quotients: Quotients<'a>,
}

impl<'a> Terms<'a> {
    pub(crate) fn new(cf: &'a ContinuedFraction) -> Self {
        Self {
            floor: Some(cf.floor()),
            quotients: cf.quotients(),
        }
    }
}

impl<'a> Iterator for Terms<'a> {
    type Item = &'a Integer;

    fn next(&mut self) -> Option<Self::Item> {
        self.floor.take().or_else(|| self.quotients.next())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (low, high) = self.quotients.size_hint();
        let extra = usize::from(self.floor.is_some());
        (
            low.saturating_add(extra),
            high.and_then(|h| h.checked_add(extra)),
        )
    }
}

impl FusedIterator for Terms<'_> {}

/// Convergents `h_n / k_n` of a continued fraction.
///
/// The recurrence `h_n = q_n h_{n-1} + h_{n-2}` (likewise `k`) is seeded with
/// zero and positive infinity: their encodings `0/1` and `1/0` are exactly
/// `h_{-2}/k_{-2}` and `h_{-1}/k_{-1}`, so the floor needs no special case.
#[derive(Clone, Debug)]
pub struct Convergents<'a> {
    terms: Terms<'a>,
    previous: Rational,
    current: Rational,
}

impl<'a> Convergents<'a> {
    pub(crate) fn new(cf: &'a ContinuedFraction) -> Self {
        Self {
            terms: cf.terms(),
            previous: Rational::from_integer(Integer::new(0)),
            current: Rational::infinity(),
        }
    }
}

impl Iterator for Convergents<'_> {
    type Item = Rational;

    fn next(&mut self) -> Option<Self::Item> {
        let q = self.terms.next()?;
        let numerator = q * &self.current.numerator() + self.previous.numerator();
        let denominator = q * &self.current.denominator() + self.previous.denominator();
        let next = Rational::new(numerator, denominator);
        self.previous = std::mem::replace(&mut self.current, next);
        Some(self.current.clone())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.terms.size_hint()
    }
}

impl FusedIterator for Convergents<'_> {}
