//! Error taxonomy for the algebraic core.
//!
//! Mirrors `mathhook-core`'s hand-rolled `MathError`/`PolynomialError`: a flat enum,
//! a manual `Display` impl, and a blanket `std::error::Error` impl. No `thiserror`.

use std::fmt;

/// Everything that can go wrong in this crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroebnerError {
    /// A `Rational` was constructed or divided with a zero denominator.
    ArithmeticError,
    /// A `Monomial` division was attempted where the divisor does not divide the dividend.
    DivisibilityError { dividend: String, divisor: String },
    /// The leading term of the zero polynomial was requested, or a reduction was
    /// attempted by the zero polynomial.
    EmptyPolynomial,
    /// A `Monomial` was constructed with a negative exponent.
    InvalidExponent { index: usize, value: i64 },
    /// The Buchberger engine exceeded its defensive iteration bound.
    ///
    /// This is never expected to trigger for a well-formed ideal over finitely many
    /// variables (termination is guaranteed by Dickson's lemma); it exists to fail fast
    /// rather than loop forever on a malformed input.
    MaxIterationsExceeded { limit: usize },
}

impl fmt::Display for GroebnerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroebnerError::ArithmeticError => write!(f, "arithmetic error: zero denominator"),
            GroebnerError::DivisibilityError { dividend, divisor } => write!(
                f,
                "monomial {dividend} is not divisible by monomial {divisor}"
            ),
            GroebnerError::EmptyPolynomial => {
                write!(f, "operation is undefined on the zero polynomial")
            }
            GroebnerError::InvalidExponent { index, value } => write!(
                f,
                "invalid exponent {value} for variable {index}: exponents must be nonnegative"
            ),
            GroebnerError::MaxIterationsExceeded { limit } => write!(
                f,
                "Buchberger engine exceeded its iteration bound ({limit})"
            ),
        }
    }
}

impl std::error::Error for GroebnerError {}

/// Shorthand result type used throughout the crate.
pub type Result<T> = std::result::Result<T, GroebnerError>;
