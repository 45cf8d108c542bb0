#![forbid(unsafe_code)]
//! Natural number conversion between decimal and arbitrary positional bases.
//!
//! A natural can be given as a decimal value, a sequence of decimal digits or a sequence of decimal numerals, and
//! rendered in any base `>= 2` as a digit sequence, a numeral sequence or a string. Bases up to 36 use the
//! single-character alphabet `0-9A-Z`; larger bases use fixed-width, zero-padded groups of base-36 characters.
//!
//! The entry point is [`NatConverter`]; the lower layers ([`digits`], [`numerals`], [`aggregate`]) are public for
//! callers that have already validated their inputs.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` with `?` / `map_err`. Library and CLI modules enforce
//!   `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **Safe mode off**: inputs outside the contract (negative values, bases below 2) give unspecified results but
//!   never panic or loop.

#![deny(clippy::unwrap_used)]

pub mod aggregate;
pub mod cli;
pub mod config;
pub mod converter;
pub mod digits;
pub mod error;
pub mod numerals;
pub mod validate;
pub mod version;

pub use config::ConverterConfig;
pub use converter::NatConverter;
pub use digits::Digit;
pub use error::{ConvertError, ConvertResult, ValidationError};
pub use numerals::Numeralizer;
pub use validate::{Bounds, NaturalCheck};

pub use cvnum_core::ErrorKind;
