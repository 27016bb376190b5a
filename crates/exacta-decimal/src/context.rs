//! Precision and presentation settings for decimal arithmetic.

use exacta_integers::{Error, Result};

/// Settings that bound inexact decimal operations.
///
/// Only division and rendering consult a context; every other operation is
/// exact. `BigDecimal`'s operator impls use [`DecimalContext::default`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DecimalContext {
    /// Maximum number of digits a quotient is extended by before it is
    /// rounded.
    pub precision: usize,
    /// Digits produced per long-division step.
    pub chunk_digits: usize,
    /// Largest exponent magnitude rendered positionally; beyond it values
    /// print as `<coefficient>e<exponent>`.
    pub display_exponent_limit: u64,
}

impl DecimalContext {
    /// Default precision ceiling, in digits.
    pub const DEFAULT_PRECISION: usize = 1500;
    /// Default long-division chunk size, in digits.
    pub const DEFAULT_CHUNK_DIGITS: usize = 100;
    /// Default exponent magnitude for positional rendering.
    pub const DEFAULT_DISPLAY_EXPONENT_LIMIT: u64 = 2000;

    /// Returns a copy with a different precision ceiling.
    #[must_use]
    pub fn with_precision(self, precision: usize) -> Self {
        Self { precision, ..self }
    }

    /// Returns a copy with a different division chunk size.
    #[must_use]
    pub fn with_chunk_digits(self, chunk_digits: usize) -> Self {
        Self {
            chunk_digits,
            ..self
        }
    }

    /// Returns a copy with a different rendering threshold.
    #[must_use]
    pub fn with_display_exponent_limit(self, display_exponent_limit: u64) -> Self {
        Self {
            display_exponent_limit,
            ..self
        }
    }

    /// Checks that the context can drive a division.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the chunk size is zero.
    pub fn validate(&self) -> Result<()> {
        if self.chunk_digits == 0 {
            return Err(Error::InvalidArgument(
                "division chunk size must be at least one digit".into(),
            ));
        }
        Ok(())
    }
}

impl Default for DecimalContext {
    fn default() -> Self {
        Self {
            precision: Self::DEFAULT_PRECISION,
            chunk_digits: Self::DEFAULT_CHUNK_DIGITS,
            display_exponent_limit: Self::DEFAULT_DISPLAY_EXPONENT_LIMIT,
        }
    }
}
