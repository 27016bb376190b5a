//! Errors reported by exacta operations.

use thiserror::Error;

/// A specialized `Result` for exacta operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// What kind of value a failed parse was trying to produce.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseKind {
    /// An arbitrary precision integer.
    Integer,
    /// A rational number or one of its sentinels.
    Rational,
    /// A scaled decimal.
    Decimal,
}

impl std::fmt::Display for ParseKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseKind::Integer => f.write_str("integer"),
            ParseKind::Rational => f.write_str("rational"),
            ParseKind::Decimal => f.write_str("decimal"),
        }
    }
}

/// Errors that can occur in exact arithmetic.
///
/// Invalid arguments are rejected at the call boundary. Arithmetic errors
/// mean every input was well formed on its own but the combination has no
/// mathematical value.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// An argument is outside the operation's domain.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A required input sequence was absent.
    #[error("missing input: {0}")]
    MissingInput(&'static str),

    /// The result is mathematically undefined.
    #[error("arithmetic error: {0}")]
    Arithmetic(String),

    /// Text could not be decoded into a value.
    #[error("cannot parse {input:?} as {kind}")]
    Parse {
        /// The type that was being parsed.
        kind: ParseKind,
        /// The rejected input.
        input: String,
    },
}

impl Error {
    /// Builds a parse error for `input`.
    pub fn parse(kind: ParseKind, input: &str) -> Self {
        Error::Parse {
            kind,
            input: input.to_owned(),
        }
    }

    /// Returns true if this error reports a mathematically undefined result.
    #[must_use]
    pub fn is_arithmetic(&self) -> bool {
        matches!(self, Error::Arithmetic(_))
    }
}
