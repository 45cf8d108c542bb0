//! Digit extraction: natural number → base digit sequence.
//!
//! Digit sequences are ordered most-significant first. These functions perform no validation; the
//! [`NatConverter`](crate::NatConverter) facade checks its inputs before calling them.

use cvnum_core::alphabet;
use num_bigint::BigUint;
use num_traits::Zero;

/// One positional digit, meaningful only together with its base.
pub type Digit = u64;

/// Decimal base, served from the native decimal rendering instead of repeated division.
pub const DECIMAL_BASE: u64 = 10;

/// Decimal digits of `value`, most-significant first.
pub fn decimal_digits(value: &BigUint) -> Vec<Digit> {
    value
        .to_string()
        .chars()
        .filter_map(alphabet::decimal_value)
        .collect()
}

/// Digits of `value` written in `base`, most-significant first.
///
/// - `base == 10` takes the decimal fast path.
/// - `value == 0` yields `[0]` for every base.
/// - Bases `0` and `1` have no positional digits; they yield an empty sequence.
pub fn extract_digits(value: &BigUint, base: u64) -> Vec<Digit> {
    if base == DECIMAL_BASE {
        return decimal_digits(value);
    }
    if value.is_zero() {
        return vec![0];
    }
    if base < 2 {
        return Vec::new();
    }

    let mut rest = value.clone();
    let mut digits = Vec::new();

    while !rest.is_zero() {
        let rem = &rest % base;
        // rem < base fits a single u64 limb; zero has no limbs.
        digits.push(rem.iter_u64_digits().next().unwrap_or(0));
        rest /= base;
    }

    digits.reverse();
    digits
}

/// Rebuild a natural from its digits in `base` by positional weighted sum.
pub(crate) fn weighted_sum(digits: &[Digit], base: u64) -> BigUint {
    digits
        .iter()
        .fold(BigUint::zero(), |acc, &d| acc * base + d)
}
