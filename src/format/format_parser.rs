use nom::{
    IResult, Parser,
    bytes::complete::take_till,
    character::complete::{alphanumeric0, char, multispace0},
    multi::many0,
    sequence::{delimited, preceded},
};

use crate::constants::SPECIFIER_MARKER;

/// Splits a format string into its specifier names.
///
/// Everything before the first marker is literal prompt text and is skipped.
/// Whitespace after a name only separates it from the next marker. Whatever
/// the parser could not consume is left in the remaining input for the
/// caller to report.
pub(super) fn specifier_names(input: &str) -> IResult<&str, Vec<&str>> {
    preceded(literal_prefix, many0(specifier_name)).parse(input)
}

fn literal_prefix(input: &str) -> IResult<&str, &str> {
    take_till(|c: char| c == SPECIFIER_MARKER).parse(input)
}

fn specifier_name(input: &str) -> IResult<&str, &str> {
    delimited(char(SPECIFIER_MARKER), alphanumeric0, multispace0).parse(input)
}
