//! The converter facade.
//!
//! [`NatConverter`] exposes every decimal ↔ base conversion as a thin composition of the validator, the digit
//! extractor, the alphabet encoder and the decimal aggregators. Each entry point validates at its own boundary
//! only; composed entry points rely on the checks of the primitives they call.
//!
//! ## Examples
//!
//! ```rust
//! use cvnum::NatConverter;
//!
//! let conv = NatConverter::default();
//! assert_eq!(conv.nat_to_base_string(123, 16, "").unwrap(), "7B");
//! assert_eq!(conv.nat_to_base_digits(255, 2).unwrap(), vec![1; 8]);
//! assert_eq!(conv.nat_to_base_string(123, 37, "-").unwrap(), "03-0C");
//! ```

use num_bigint::{BigInt, BigUint};

use crate::aggregate;
use crate::config::ConverterConfig;
use crate::digits::{self, DECIMAL_BASE, Digit};
use crate::error::{ConvertResult, ValidationError};
use crate::numerals::Numeralizer;
use crate::validate::{self, Bounds, NaturalCheck};

/// Label used when validating a base.
pub const BASE_LABEL: &str = "base";

/// Converter between decimal naturals and arbitrary positional bases.
///
/// Conversions only read the configuration. Changing safe mode takes `&mut self`, so it can never interleave with
/// a conversion running on the same instance.
#[derive(Debug, Clone)]
pub struct NatConverter {
    config: ConverterConfig,
    checker: &'static dyn NaturalCheck,
}

impl Default for NatConverter {
    fn default() -> Self {
        Self::new(ConverterConfig::default())
    }
}

impl NatConverter {
    pub fn new(config: ConverterConfig) -> Self {
        let checker = validate::strategy_for(config.safe_mode);
        Self { config, checker }
    }

    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    pub fn safe_mode(&self) -> bool {
        self.config.safe_mode
    }

    /// Turn precondition checks on or off, swapping the validation strategy.
    pub fn set_safe_mode(&mut self, safe_mode: bool) {
        tracing::debug!(safe_mode, "natural-number checks {}", if safe_mode { "enforced" } else { "skipped" });
        self.config.safe_mode = safe_mode;
        self.checker = validate::strategy_for(safe_mode);
    }

    pub fn error_label(&self) -> &str {
        &self.config.error_label
    }

    // ------------------------------------------------------------------------
    // Validation
    // ------------------------------------------------------------------------

    /// Check that `value` is a natural number within `bounds`.
    ///
    /// `label` names the value in failure messages; `None` falls back to the configured error label. With safe mode
    /// off this always succeeds.
    pub fn check_natural(&self, value: &BigInt, bounds: &Bounds, label: Option<&str>) -> ConvertResult<()> {
        let label = label.unwrap_or(&self.config.error_label);
        self.checker.check(value, bounds, label)?;
        Ok(())
    }

    /// Parse decimal text into a natural number.
    ///
    /// Text that is not an integer is always rejected, since there is no value to convert. Bounds are checked
    /// by the active strategy.
    pub fn parse_natural(&self, text: &str, label: Option<&str>) -> ConvertResult<BigInt> {
        let label = label.unwrap_or(&self.config.error_label);
        let value = text
            .trim()
            .parse::<BigInt>()
            .map_err(|_| ValidationError::NotAnInteger {
                label: label.to_string(),
                value: text.to_string(),
            })?;
        self.checker.check(&value, &Bounds::natural(), label)?;
        Ok(value)
    }

    fn natural(&self, value: BigInt) -> ConvertResult<BigUint> {
        self.check_natural(&value, &Bounds::natural(), None)?;
        // Only reachable with a negative value when checks are off; such input has no defined result.
        Ok(value.magnitude().clone())
    }

    fn check_base(&self, base: u64) -> ConvertResult<()> {
        self.check_natural(&BigInt::from(base), &Bounds::base(), Some(BASE_LABEL))
    }

    // ------------------------------------------------------------------------
    // Decimal value → decimal digits / numerals
    // ------------------------------------------------------------------------

    /// Decimal numerals of `value`, most-significant first.
    pub fn numerals_of(&self, value: impl Into<BigInt>) -> ConvertResult<Vec<String>> {
        let value = self.natural(value.into())?;
        Ok(value.to_string().chars().map(String::from).collect())
    }

    /// Decimal digits of `value`, most-significant first.
    pub fn digits_of(&self, value: impl Into<BigInt>) -> ConvertResult<Vec<Digit>> {
        let value = self.natural(value.into())?;
        Ok(digits::decimal_digits(&value))
    }

    // ------------------------------------------------------------------------
    // Decimal value → base
    // ------------------------------------------------------------------------

    /// Digits of `value` in `base`, most-significant first.
    #[tracing::instrument(level = "debug", skip_all, fields(base = base))]
    pub fn nat_to_base_digits(&self, value: impl Into<BigInt>, base: u64) -> ConvertResult<Vec<Digit>> {
        let value = self.natural(value.into())?;
        if base == DECIMAL_BASE {
            return Ok(digits::decimal_digits(&value));
        }
        self.check_base(base)?;
        Ok(digits::extract_digits(&value, base))
    }

    /// Encoder turning digits of `base` into numerals.
    ///
    /// No check is done on `base`.
    pub fn numeralizer(&self, base: u64) -> Numeralizer {
        Numeralizer::new(base)
    }

    /// Numerals of `value` in `base`, most-significant first.
    #[tracing::instrument(level = "debug", skip_all, fields(base = base))]
    pub fn nat_to_base_numerals(&self, value: impl Into<BigInt>, base: u64) -> ConvertResult<Vec<String>> {
        let value = self.natural(value.into())?;
        if base == DECIMAL_BASE {
            return Ok(value.to_string().chars().map(String::from).collect());
        }
        self.check_base(base)?;
        Ok(self.numeralizer(base).numerals_of(&value))
    }

    /// `value` written in `base`, numerals joined with `sep`.
    ///
    /// Numerals of bases above 36 have a fixed width, so an empty separator stays unambiguous.
    pub fn nat_to_base_string(&self, value: impl Into<BigInt>, base: u64, sep: &str) -> ConvertResult<String> {
        Ok(self.nat_to_base_numerals(value, base)?.join(sep))
    }

    // ------------------------------------------------------------------------
    // Decimal digits / numerals → natural
    // ------------------------------------------------------------------------

    /// Natural written by decimal `digits`.
    pub fn digits_to_nat(&self, digits: &[Digit]) -> ConvertResult<BigUint> {
        aggregate::decimal_digits_to_natural(digits)
    }

    /// Natural written by decimal `numerals`.
    pub fn numerals_to_nat<S: AsRef<str>>(&self, numerals: &[S]) -> ConvertResult<BigUint> {
        aggregate::decimal_numerals_to_natural(numerals)
    }

    // ------------------------------------------------------------------------
    // Decimal digits → base
    // ------------------------------------------------------------------------

    pub fn digits_to_base_digits(&self, digits: &[Digit], base: u64) -> ConvertResult<Vec<Digit>> {
        self.nat_to_base_digits(self.digits_to_nat(digits)?, base)
    }

    pub fn digits_to_base_numerals(&self, digits: &[Digit], base: u64) -> ConvertResult<Vec<String>> {
        self.nat_to_base_numerals(self.digits_to_nat(digits)?, base)
    }

    pub fn digits_to_base_string(&self, digits: &[Digit], base: u64, sep: &str) -> ConvertResult<String> {
        self.nat_to_base_string(self.digits_to_nat(digits)?, base, sep)
    }

    // ------------------------------------------------------------------------
    // Decimal numerals → base
    // ------------------------------------------------------------------------

    pub fn numerals_to_base_digits<S: AsRef<str>>(&self, numerals: &[S], base: u64) -> ConvertResult<Vec<Digit>> {
        self.nat_to_base_digits(self.numerals_to_nat(numerals)?, base)
    }

    pub fn numerals_to_base_numerals<S: AsRef<str>>(&self, numerals: &[S], base: u64) -> ConvertResult<Vec<String>> {
        self.nat_to_base_numerals(self.numerals_to_nat(numerals)?, base)
    }

    pub fn numerals_to_base_string<S: AsRef<str>>(
        &self,
        numerals: &[S],
        base: u64,
        sep: &str,
    ) -> ConvertResult<String> {
        self.nat_to_base_string(self.numerals_to_nat(numerals)?, base, sep)
    }
}
