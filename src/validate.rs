//! Natural-number precondition checks.
//!
//! Validation is a strategy chosen at configuration time rather than a per-call flag:
//! - [`Enforcing`] rejects values outside the requested [`Bounds`] with a [`ValidationError`].
//! - [`Permissive`] accepts everything in constant time. Callers must not rely on any check happening.
//!
//! [`strategy_for`] maps the safe-mode flag onto the matching strategy.

use num_bigint::BigInt;

use crate::error::ValidationError;

/// Inclusive bounds a natural number must lie within.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bounds {
    pub min: BigInt,
    /// `None` means unbounded above.
    pub max: Option<BigInt>,
}

impl Bounds {
    /// Any natural number: `0..`.
    pub fn natural() -> Self {
        Self::at_least(0)
    }

    /// Values from `min` upward.
    pub fn at_least(min: impl Into<BigInt>) -> Self {
        Self {
            min: min.into(),
            max: None,
        }
    }

    /// Values in `min..=max`.
    pub fn between(min: impl Into<BigInt>, max: impl Into<BigInt>) -> Self {
        Self {
            min: min.into(),
            max: Some(max.into()),
        }
    }

    /// Bounds for a positional base: `2..`.
    pub fn base() -> Self {
        Self::at_least(2)
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::natural()
    }
}

/// A natural-number validation strategy.
pub trait NaturalCheck: std::fmt::Debug + Send + Sync {
    /// Check `value` against `bounds`, naming it `label` in any failure.
    fn check(&self, value: &BigInt, bounds: &Bounds, label: &str) -> Result<(), ValidationError>;

    /// Whether this strategy actually enforces anything.
    fn is_enforcing(&self) -> bool;
}

/// Strategy that enforces the bounds.
#[derive(Debug, Clone, Copy, Default)]
pub struct Enforcing;

impl NaturalCheck for Enforcing {
    fn check(&self, value: &BigInt, bounds: &Bounds, label: &str) -> Result<(), ValidationError> {
        if *value < bounds.min {
            return Err(ValidationError::TooSmall {
                label: label.to_string(),
                value: value.clone(),
                min: bounds.min.clone(),
            });
        }
        match &bounds.max {
            Some(max) if value > max => Err(ValidationError::TooBig {
                label: label.to_string(),
                value: value.clone(),
                max: max.clone(),
            }),
            _ => Ok(()),
        }
    }

    fn is_enforcing(&self) -> bool {
        true
    }
}

/// Strategy that accepts every value without looking at it.
#[derive(Debug, Clone, Copy, Default)]
pub struct Permissive;

impl NaturalCheck for Permissive {
    #[inline]
    fn check(&self, _value: &BigInt, _bounds: &Bounds, _label: &str) -> Result<(), ValidationError> {
        Ok(())
    }

    fn is_enforcing(&self) -> bool {
        false
    }
}

static ENFORCING: Enforcing = Enforcing;
static PERMISSIVE: Permissive = Permissive;

/// Select the validation strategy for a safe-mode setting.
pub fn strategy_for(safe_mode: bool) -> &'static dyn NaturalCheck {
    if safe_mode { &ENFORCING } else { &PERMISSIVE }
}
