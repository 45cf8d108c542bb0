//! Alphabet encoding: base digit → textual numeral.
//!
//! Bases up to 36 write each digit with a single character from `0-9A-Z`. Larger bases write each digit as a
//! fixed-width group: the digit is re-expressed in base 36, each sub-digit written with one character, and the
//! result left-padded with `0` to the base's [group width](cvnum_core::group_width). Fixed widths keep numeral
//! sequences splittable without a separator.

use cvnum_core::alphabet::{self, PAD_CHAR, SINGLE_CHAR_CAPACITY};
use num_bigint::BigUint;

use crate::digits::{Digit, extract_digits};

/// Per-base digit encoder.
///
/// Building one computes the group width once; [`encode`](Self::encode) can then be applied to every digit.
/// No check is done on `base`: the facade validates it beforehand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Numeralizer {
    base: u64,
    width: usize,
}

impl Numeralizer {
    pub fn new(base: u64) -> Self {
        let width = alphabet::group_width(base);
        tracing::trace!(base, width, "numeralizer built");
        Self { base, width }
    }

    /// Number of characters in every numeral this encoder produces.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Write one digit as a numeral padded to the group width.
    pub fn encode(&self, digit: Digit) -> String {
        let raw = encode_unpadded(digit);
        if raw.len() >= self.width {
            return raw;
        }
        let mut padded = String::with_capacity(self.width);
        padded.extend(std::iter::repeat_n(PAD_CHAR, self.width - raw.len()));
        padded.push_str(&raw);
        padded
    }

    /// Write a digit sequence as numerals, preserving order.
    pub fn encode_all(&self, digits: &[Digit]) -> Vec<String> {
        digits.iter().map(|&d| self.encode(d)).collect()
    }

    /// Numerals of `value` written in this encoder's base.
    pub fn numerals_of(&self, value: &BigUint) -> Vec<String> {
        self.encode_all(&extract_digits(value, self.base))
    }
}

/// Write `digit` with the single-character alphabet, recursing through base 36 for digits that do not fit.
fn encode_unpadded(digit: Digit) -> String {
    match alphabet::numeral_char(digit) {
        Some(ch) => ch.to_string(),
        None => extract_digits(&BigUint::from(digit), SINGLE_CHAR_CAPACITY)
            .into_iter()
            .map(encode_unpadded)
            .collect(),
    }
}
