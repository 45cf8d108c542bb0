//! Single-character numeral alphabet.
//!
//! Digits `0..=9` are written with the decimal numerals, digits `10..=35` with the uppercase Latin letters. Digits
//! at or above [`SINGLE_CHAR_CAPACITY`] cannot be written with one character; callers re-express them in base 36 and
//! pad the result to [`group_width`] characters.
//!
//! ## Examples
//!
//! ```rust
//! use cvnum_core::alphabet::{group_width, numeral_char, numeral_value};
//!
//! assert_eq!(numeral_char(11), Some('B'));
//! assert_eq!(numeral_value('B'), Some(11));
//! assert_eq!(group_width(16), 1);
//! assert_eq!(group_width(37), 2);
//! ```

/// Numeral characters indexed by the digit they write.
pub const NUMERALS: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Number of digits that fit in a single numeral character.
pub const SINGLE_CHAR_CAPACITY: u64 = NUMERALS.len() as u64;

/// Number of decimal numerals at the start of [`NUMERALS`].
pub const DECIMAL_RADIX: u64 = 10;

/// Padding character for multi-character numeral groups.
pub const PAD_CHAR: char = '0';

/// Return the single numeral character for `digit`, or `None` when the digit needs a multi-character group.
#[inline]
pub fn numeral_char(digit: u64) -> Option<char> {
    usize::try_from(digit)
        .ok()
        .and_then(|idx| NUMERALS.get(idx))
        .map(|&b| char::from(b))
}

/// Return the digit written by a single numeral character (uppercase only).
#[inline]
pub fn numeral_value(ch: char) -> Option<u64> {
    NUMERALS.iter().position(|&b| char::from(b) == ch).map(|idx| idx as u64)
}

/// Return the digit written by a decimal numeral character (`0`-`9`).
#[inline]
pub fn decimal_value(ch: char) -> Option<u64> {
    numeral_value(ch).filter(|&d| d < DECIMAL_RADIX)
}

/// Return the fixed number of characters used by every numeral of `base`.
///
/// Bases up to [`SINGLE_CHAR_CAPACITY`] use one character. Larger bases use `ceil(log_36(base))` characters, the
/// count of base-36 "superdigits" needed to cover the base: the smallest `w` with `36^w >= base`.
///
/// Evaluated with integers so that every digit `< base` fits in the group, powers of 36 included.
pub fn group_width(base: u64) -> usize {
    let mut width = 1;
    let mut reach = SINGLE_CHAR_CAPACITY;
    while reach < base {
        width += 1;
        match reach.checked_mul(SINGLE_CHAR_CAPACITY) {
            Some(next) => reach = next,
            // 36^13 exceeds u64::MAX, so every remaining base fits.
            None => break,
        }
    }
    width
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimal_numerals_come_first() {
        for d in 0..10 {
            assert_eq!(numeral_char(d), char::from_digit(d as u32, 10));
        }
    }

    #[test]
    fn letters_follow_decimals() {
        assert_eq!(numeral_char(10), Some('A'));
        assert_eq!(numeral_char(15), Some('F'));
        assert_eq!(numeral_char(35), Some('Z'));
        assert_eq!(numeral_char(36), None);
        assert_eq!(numeral_char(u64::MAX), None);
    }

    #[test]
    fn lowercase_is_not_a_numeral() {
        assert_eq!(numeral_value('b'), None);
        assert_eq!(numeral_value('-'), None);
    }

    #[test]
    fn decimal_value_rejects_letters() {
        assert_eq!(decimal_value('7'), Some(7));
        assert_eq!(decimal_value('A'), None);
    }

    #[test]
    fn group_width_small_bases() {
        for base in 2..=36 {
            assert_eq!(group_width(base), 1, "base {base}");
        }
    }

    #[test]
    fn group_width_large_bases() {
        assert_eq!(group_width(37), 2);
        assert_eq!(group_width(100), 2);
        assert_eq!(group_width(1295), 2);
        assert_eq!(group_width(1297), 3);
        assert_eq!(group_width(65_536), 4);
        assert_eq!(group_width(1 << 32), 7);
        assert_eq!(group_width(u64::MAX), 13);
    }

    #[test]
    fn group_width_around_powers_of_36() {
        for k in 1..=12_usize {
            let power = SINGLE_CHAR_CAPACITY.pow(k as u32);
            // Digits of base 36^k + 1 reach 36^k, which needs k + 1 characters.
            assert_eq!(group_width(power - 1), if k == 1 { 1 } else { k }, "36^{k} - 1");
            assert_eq!(group_width(power), k, "36^{k}");
            assert_eq!(group_width(power + 1), k + 1, "36^{k} + 1");
        }
    }
}
