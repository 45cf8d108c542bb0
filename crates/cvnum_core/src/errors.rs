//! Canonical error vocabulary.
//!
//! Error kinds have stable, user-facing spellings so the library, the CLI and any tooling built on top of them
//! print the same `Kind: message` prefixes.

/// Category of a conversion failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A natural-number precondition was violated (not an integer, below the minimum, above the maximum).
    ValidationError,
    /// A decimal aggregator met an element that is not a decimal digit or numeral.
    UnknownDigitError,
}

/// Every error kind, in declaration order.
pub const ERROR_KINDS: &[ErrorKind] = &[ErrorKind::ValidationError, ErrorKind::UnknownDigitError];

impl ErrorKind {
    /// Canonical spelling of the kind.
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorKind::ValidationError => "ValidationError",
            ErrorKind::UnknownDigitError => "UnknownDigitError",
        }
    }
}

/// Resolve a canonical spelling back to its kind.
pub fn from_str(name: &str) -> Option<ErrorKind> {
    ERROR_KINDS.iter().copied().find(|kind| kind.as_str() == name)
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
