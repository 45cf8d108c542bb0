//! CLI command implementations
//!
//! All command functions return `CliResult<String>` with the text to print instead of
//! writing to stdout. Printing and exits happen in the top-level `run()`.

use crate::converter::{BASE_LABEL, NatConverter};
use crate::digits::Digit;
use crate::error::ConvertResult;
use crate::validate::Bounds;

use super::{CliResult, OutputShape, TargetArgs};

/// Separator for digit and numeral sequence output.
const SEQUENCE_SEP: &str = " ";

/// Convert a decimal value given as text.
pub fn convert_value(conv: &NatConverter, value: &str, target: &TargetArgs) -> CliResult<String> {
    let value = conv.parse_natural(value, None)?;
    let rendered = match target.output {
        OutputShape::String => conv.nat_to_base_string(value, target.base, &target.sep),
        OutputShape::Digits => conv.nat_to_base_digits(value, target.base).map(join_digits),
        OutputShape::Numerals => conv.nat_to_base_numerals(value, target.base).map(join_numerals),
    };
    Ok(rendered?)
}

/// Convert a decimal digit sequence.
pub fn convert_digits(conv: &NatConverter, digits: &[Digit], target: &TargetArgs) -> CliResult<String> {
    let rendered = match target.output {
        OutputShape::String => conv.digits_to_base_string(digits, target.base, &target.sep),
        OutputShape::Digits => conv.digits_to_base_digits(digits, target.base).map(join_digits),
        OutputShape::Numerals => conv.digits_to_base_numerals(digits, target.base).map(join_numerals),
    };
    Ok(rendered?)
}

/// Convert a decimal numeral sequence.
pub fn convert_numerals(conv: &NatConverter, numerals: &[String], target: &TargetArgs) -> CliResult<String> {
    let rendered = match target.output {
        OutputShape::String => conv.numerals_to_base_string(numerals, target.base, &target.sep),
        OutputShape::Digits => conv.numerals_to_base_digits(numerals, target.base).map(join_digits),
        OutputShape::Numerals => conv.numerals_to_base_numerals(numerals, target.base).map(join_numerals),
    };
    Ok(rendered?)
}

/// Report how many characters each numeral of `base` takes.
pub fn group_width(conv: &NatConverter, base: u64) -> CliResult<String> {
    check_base(conv, base)?;
    Ok(conv.numeralizer(base).width().to_string())
}

fn check_base(conv: &NatConverter, base: u64) -> ConvertResult<()> {
    conv.check_natural(&base.into(), &Bounds::base(), Some(BASE_LABEL))
}

fn join_digits(digits: Vec<Digit>) -> String {
    digits
        .iter()
        .map(Digit::to_string)
        .collect::<Vec<_>>()
        .join(SEQUENCE_SEP)
}

fn join_numerals(numerals: Vec<String>) -> String {
    numerals.join(SEQUENCE_SEP)
}
