//! Decimal aggregation: decimal digit or numeral sequence → natural number.
//!
//! Both aggregators accept decimal input only. They invert [`digits_of`](crate::NatConverter::digits_of) and
//! [`numerals_of`](crate::NatConverter::numerals_of), not the base conversions: reading an arbitrary-base digit
//! or numeral sequence back into a natural is not provided.
//!
//! An empty digit sequence aggregates to `0`. An empty numeral sequence writes no decimal integer and is rejected.

use cvnum_core::alphabet;
use num_bigint::BigUint;

use crate::digits::{DECIMAL_BASE, Digit, weighted_sum};
use crate::error::{ConvertError, ConvertResult};

/// Natural written by decimal `digits`, most-significant first.
///
/// ## Errors
/// - [`ConvertError::UnknownDigit`] naming the first element outside `0..=9`.
pub fn decimal_digits_to_natural(digits: &[Digit]) -> ConvertResult<BigUint> {
    if let Some(&bad) = digits.iter().find(|&&d| d >= DECIMAL_BASE) {
        return Err(ConvertError::unknown_digit(bad));
    }
    Ok(weighted_sum(digits, DECIMAL_BASE))
}

/// Natural written by decimal `numerals`, most-significant first.
///
/// Each numeral must be exactly one of the characters `0`-`9`.
///
/// ## Errors
/// - [`ConvertError::UnknownDigit`] naming the first numeral that is not a decimal numeral.
/// - [`ConvertError::UnknownDigit`] with an empty token when `numerals` is empty.
pub fn decimal_numerals_to_natural<S: AsRef<str>>(numerals: &[S]) -> ConvertResult<BigUint> {
    if numerals.is_empty() {
        return Err(ConvertError::unknown_digit(""));
    }
    let digits = numerals
        .iter()
        .map(|numeral| decimal_numeral(numeral.as_ref()))
        .collect::<ConvertResult<Vec<_>>>()?;
    Ok(weighted_sum(&digits, DECIMAL_BASE))
}

fn decimal_numeral(numeral: &str) -> ConvertResult<Digit> {
    let mut chars = numeral.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => alphabet::decimal_value(ch).ok_or_else(|| ConvertError::unknown_digit(numeral)),
        _ => Err(ConvertError::unknown_digit(numeral)),
    }
}
