//! Property-based tests for the converter
//!
//! These tests use proptest to verify the conversion invariants across many randomly
//! generated naturals and bases.

use cvnum::NatConverter;
use cvnum_core::alphabet;
use num_bigint::BigUint;
use proptest::prelude::*;

/// Rebuild a natural from its base digits by positional weighted sum.
fn reconstruct(digits: &[u64], base: u64) -> BigUint {
    digits
        .iter()
        .fold(BigUint::from(0u32), |acc, &d| acc * base + d)
}

fn expected_width(base: u64) -> usize {
    // Characters needed for the largest digit, `base - 1`, in base 36.
    BigUint::from(base - 1).to_str_radix(36).len()
}

// Uniform over every base above 36, plus the bases around each power of 36.
fn large_base() -> impl Strategy<Value = u64> {
    prop_oneof![
        37u64..=u64::MAX,
        (2u32..=12, 0u64..=2).prop_map(|(k, offset)| 36u64.pow(k) - 1 + offset),
    ]
}

proptest! {
    /// Property: base digits reconstruct the value
    #[test]
    fn digits_round_trip(value in any::<u128>(), base in 2u64..5000) {
        let conv = NatConverter::default();
        let digits = conv.nat_to_base_digits(value, base).unwrap();
        prop_assert!(digits.iter().all(|&d| d < base));
        prop_assert_eq!(reconstruct(&digits, base), BigUint::from(value));
    }

    /// Property: digits are minimal (no leading zero unless the value is zero)
    #[test]
    fn digits_have_no_leading_zero(value in 1u64..=u64::MAX, base in 2u64..100) {
        let conv = NatConverter::default();
        let digits = conv.nat_to_base_digits(value, base).unwrap();
        prop_assert_ne!(digits[0], 0);
    }

    /// Property: base 10 takes the decimal path
    #[test]
    fn base_ten_matches_decimal_digits(value in any::<u64>()) {
        let conv = NatConverter::default();
        let expected: Vec<u64> = value
            .to_string()
            .chars()
            .map(|c| u64::from(c.to_digit(10).unwrap()))
            .collect();
        prop_assert_eq!(conv.nat_to_base_digits(value, 10).unwrap(), expected.clone());
        prop_assert_eq!(conv.digits_of(value).unwrap(), expected);
    }

    /// Property: zero is `[0]` in every base
    #[test]
    fn zero_in_every_base(base in 2u64..=u64::MAX) {
        let conv = NatConverter::default();
        prop_assert_eq!(conv.nat_to_base_digits(0, base).unwrap(), vec![0]);
    }

    /// Property: numerals of large bases all have the group width
    #[test]
    fn large_base_numerals_have_fixed_width(value in any::<u64>(), base in large_base()) {
        let conv = NatConverter::default();
        let width = expected_width(base);
        for numeral in conv.nat_to_base_numerals(value, base).unwrap() {
            prop_assert_eq!(numeral.len(), width);
        }
    }

    /// Property: small-base numerals are single alphabet characters matching their digits
    #[test]
    fn small_base_numerals_match_digits(value in any::<u64>(), base in 2u64..=36) {
        let conv = NatConverter::default();
        let digits = conv.nat_to_base_digits(value, base).unwrap();
        let numerals = conv.nat_to_base_numerals(value, base).unwrap();
        prop_assert_eq!(digits.len(), numerals.len());
        for (digit, numeral) in digits.iter().zip(&numerals) {
            let mut chars = numeral.chars();
            let ch = chars.next().unwrap();
            prop_assert!(chars.next().is_none());
            prop_assert!(ch.is_ascii_digit() || ch.is_ascii_uppercase());
            prop_assert_eq!(alphabet::numeral_value(ch), Some(*digit));
        }
    }

    /// Property: string output of bases up to 36 agrees with the standard radix rendering
    #[test]
    fn small_base_string_matches_radix_rendering(value in any::<u128>(), base in 2u32..=36) {
        let conv = NatConverter::default();
        let rendered = conv.nat_to_base_string(value, u64::from(base), "").unwrap();
        prop_assert_eq!(rendered, BigUint::from(value).to_str_radix(base).to_uppercase());
    }

    /// Property: large-base strings split back into their numerals by width
    #[test]
    fn large_base_string_splits_by_width(value in any::<u64>(), base in large_base()) {
        let conv = NatConverter::default();
        let numerals = conv.nat_to_base_numerals(value, base).unwrap();
        let joined = conv.nat_to_base_string(value, base, "").unwrap();
        let width = expected_width(base);
        let split: Vec<String> = joined
            .as_bytes()
            .chunks(width)
            .map(|chunk| String::from_utf8(chunk.to_vec()).unwrap())
            .collect();
        prop_assert_eq!(split, numerals);
    }

    /// Property: every decimal input shape converts to the same result
    #[test]
    fn input_shapes_agree(value in any::<u64>(), base in 2u64..2000) {
        let conv = NatConverter::default();
        let digits = conv.digits_of(value).unwrap();
        let numerals = conv.numerals_of(value).unwrap();
        let direct = conv.nat_to_base_numerals(value, base).unwrap();
        prop_assert_eq!(conv.digits_to_base_numerals(&digits, base).unwrap(), direct.clone());
        prop_assert_eq!(conv.numerals_to_base_numerals(&numerals, base).unwrap(), direct);
        prop_assert_eq!(
            conv.digits_to_base_digits(&digits, base).unwrap(),
            conv.numerals_to_base_digits(&numerals, base).unwrap()
        );
    }

    /// Property: negative values always fail in safe mode
    #[test]
    fn negative_values_rejected(value in i64::MIN..0, base in 2u64..100) {
        let conv = NatConverter::default();
        prop_assert!(conv.nat_to_base_digits(value, base).is_err());
        prop_assert!(conv.nat_to_base_numerals(value, base).is_err());
    }
}
