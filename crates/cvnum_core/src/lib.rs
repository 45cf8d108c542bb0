//! Provide the numeral alphabet and canonical error vocabulary shared by the `cvnum` converter.
//!
//! This crate is intentionally small and dependency-free. It holds the deterministic pieces that every conversion
//! path must agree on:
//! - the single-character numeral alphabet (`0`-`9` then `A`-`Z`) and its inverse lookup,
//! - the fixed group width used for numerals of bases above 36,
//! - the stable spellings of the error kinds surfaced to users.
//!
//! ## Notes
//!
//! - This is a “semantic core” crate: **no IO**, no global state, and no converter-specific types.

pub mod alphabet;
pub mod errors;

pub use alphabet::{SINGLE_CHAR_CAPACITY, decimal_value, group_width, numeral_char, numeral_value};
pub use errors::ErrorKind;
