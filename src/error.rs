//! Error types for natural-number conversion.
//!
//! Two kinds of failure exist:
//! - [`ValidationError`]: a natural-number precondition was violated. Only raised while safe mode is on, except for
//!   textual input that does not parse as an integer at all.
//! - [`ConvertError::UnknownDigit`]: a decimal aggregator met a digit or numeral outside `0`-`9`.
//!
//! Every failure aborts the operation; no partial results are returned.

use cvnum_core::ErrorKind;
use miette::Diagnostic;
use num_bigint::BigInt;
use thiserror::Error;

/// A violated natural-number precondition.
///
/// Messages embed the effective label and the violated bound, e.g. ``The base `1` is too small (min = 2).``
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("The {label} `{value}` is not an integer.")]
    NotAnInteger { label: String, value: String },

    #[error("The {label} `{value}` is too small (min = {min}).")]
    TooSmall { label: String, value: BigInt, min: BigInt },

    #[error("The {label} `{value}` is too big (max = {max}).")]
    TooBig { label: String, value: BigInt, max: BigInt },
}

/// Crate-level error returned by every fallible conversion.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum ConvertError {
    #[error(transparent)]
    #[diagnostic(code(cvnum::validation), help("inputs must be natural numbers and bases at least 2"))]
    Validation(#[from] ValidationError),

    #[error("unknown digit `{token}`.")]
    #[diagnostic(code(cvnum::unknown_digit), help("decimal aggregation only accepts the digits 0 to 9"))]
    UnknownDigit { token: String },
}

impl ConvertError {
    /// Canonical error category, used as the `Kind:` prefix in user-facing output.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConvertError::Validation(_) => ErrorKind::ValidationError,
            ConvertError::UnknownDigit { .. } => ErrorKind::UnknownDigitError,
        }
    }

    pub(crate) fn unknown_digit(token: impl ToString) -> Self {
        ConvertError::UnknownDigit { token: token.to_string() }
    }
}

/// Result alias for conversion operations.
pub type ConvertResult<T> = Result<T, ConvertError>;
