use std::collections::HashSet;

use cvnum_core::alphabet::{self, NUMERALS, SINGLE_CHAR_CAPACITY};
use cvnum_core::errors::{self, ERROR_KINDS};

#[test]
fn numerals_unique_and_resolvable() {
    let mut seen = HashSet::new();

    for (digit, &byte) in NUMERALS.iter().enumerate() {
        let ch = char::from(byte);
        assert!(seen.insert(ch), "duplicate numeral {ch:?}");
        assert_eq!(
            alphabet::numeral_value(ch),
            Some(digit as u64),
            "numeral {ch:?} does not resolve to its digit"
        );
        assert_eq!(alphabet::numeral_char(digit as u64), Some(ch));
    }

    assert_eq!(seen.len() as u64, SINGLE_CHAR_CAPACITY);
}

#[test]
fn numerals_are_ascii_ordered() {
    assert!(
        NUMERALS.windows(2).all(|pair| pair[0] < pair[1]),
        "numeral table must be sorted so string order matches digit order"
    );
    assert!(NUMERALS.iter().all(|b| b.is_ascii_digit() || b.is_ascii_uppercase()));
}

#[test]
fn error_kind_spellings_unique_and_resolvable() {
    let mut seen = HashSet::new();

    for &kind in ERROR_KINDS {
        assert!(seen.insert(kind.as_str()), "duplicate spelling {}", kind.as_str());
        assert_eq!(errors::from_str(kind.as_str()), Some(kind));
        assert_eq!(kind.to_string(), kind.as_str());
    }

    assert_eq!(errors::from_str("KeyError"), None);
}
