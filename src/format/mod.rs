use std::fmt;

use crate::error::ConfigError;

mod format_parser;

/// One conversion requested by a format string.
///
/// The set is closed: each variant maps to exactly one destination type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Specifier {
    /// `%c`, a single byte.
    Char,
    /// `%d`, `i32`.
    Int,
    /// `%u`, `u32`.
    UInt,
    /// `%hi`, `i16`.
    Short,
    /// `%hu`, `u16`.
    UShort,
    /// `%ld`, `i64`.
    Long,
    /// `%lu`, `u64`.
    ULong,
    /// `%f`, `f32`.
    Float,
    /// `%lf`, `f64`.
    Double,
    /// `%s`, a bounded string.
    Str,
}

impl Specifier {
    /// Resolves a specifier name. Matching is exact and case-sensitive.
    pub fn from_name(name: &str) -> Result<Self, ConfigError> {
        match name {
            "c" => Ok(Self::Char),
            "d" => Ok(Self::Int),
            "f" => Ok(Self::Float),
            "hi" => Ok(Self::Short),
            "hu" => Ok(Self::UShort),
            "ld" => Ok(Self::Long),
            "lf" => Ok(Self::Double),
            "lu" => Ok(Self::ULong),
            "u" => Ok(Self::UInt),
            "s" => Ok(Self::Str),
            other => Err(ConfigError::UnknownSpecifier(other.to_owned())),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Char => "c",
            Self::Int => "d",
            Self::UInt => "u",
            Self::Short => "hi",
            Self::UShort => "hu",
            Self::Long => "ld",
            Self::ULong => "lu",
            Self::Float => "f",
            Self::Double => "lf",
            Self::Str => "s",
        }
    }

    /// Whether the scanner should reject non-numeric bytes for this specifier.
    pub fn is_numeric(self) -> bool {
        !matches!(self, Self::Char | Self::Str)
    }

    /// Human-readable name of the destination this specifier writes into.
    pub fn destination_kind(self) -> &'static str {
        match self {
            Self::Char => "a u8",
            Self::Int => "an i32",
            Self::UInt => "a u32",
            Self::Short => "an i16",
            Self::UShort => "a u16",
            Self::Long => "an i64",
            Self::ULong => "a u64",
            Self::Float => "an f32",
            Self::Double => "an f64",
            Self::Str => "a string buffer",
        }
    }
}

impl fmt::Display for Specifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A parsed format string: the ordered list of conversions it requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatString {
    specifiers: Vec<Specifier>,
}

impl FormatString {
    /// Parses `format`, rejecting unknown specifier names and any text
    /// between specifiers other than whitespace.
    pub fn parse(format: &str) -> Result<Self, ConfigError> {
        let malformed = |rest: &str| ConfigError::MalformedFormat {
            format: format.to_owned(),
            offset: format.len() - rest.len(),
        };

        let (rest, names) = format_parser::specifier_names(format).map_err(|e| match e {
            nom::Err::Error(inner) | nom::Err::Failure(inner) => malformed(inner.input),
            nom::Err::Incomplete(_) => malformed(""),
        })?;
        if !rest.is_empty() {
            return Err(malformed(rest));
        }

        let specifiers = names
            .into_iter()
            .map(Specifier::from_name)
            .collect::<Result<Vec<_>, _>>()?;
        return Ok(Self { specifiers });
    }

    pub fn specifiers(&self) -> &[Specifier] {
        &self.specifiers
    }

    pub fn len(&self) -> usize {
        self.specifiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specifiers.is_empty()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_all_specifier_names() {
        let format = FormatString::parse("%c%d%f%hi%hu%ld%lf%lu%u%s").unwrap();
        assert_eq!(
            format.specifiers(),
            &[
                Specifier::Char,
                Specifier::Int,
                Specifier::Float,
                Specifier::Short,
                Specifier::UShort,
                Specifier::Long,
                Specifier::Double,
                Specifier::ULong,
                Specifier::UInt,
                Specifier::Str,
            ]
        );
    }

    #[test]
    fn test_names_round_trip_through_display() {
        for name in ["c", "d", "f", "hi", "hu", "ld", "lf", "lu", "u", "s"] {
            assert_eq!(Specifier::from_name(name).unwrap().to_string(), name);
        }
    }

    #[test]
    fn test_no_marker_means_no_specifiers() {
        assert!(FormatString::parse("").unwrap().is_empty());
        assert!(FormatString::parse("just text").unwrap().is_empty());
    }

    #[test]
    fn test_names_are_case_sensitive() {
        assert_eq!(
            FormatString::parse("%D"),
            Err(ConfigError::UnknownSpecifier("D".to_owned()))
        );
    }

    #[test]
    fn test_unknown_and_empty_names_are_rejected() {
        assert_eq!(
            FormatString::parse("%d%x"),
            Err(ConfigError::UnknownSpecifier("x".to_owned()))
        );
        assert_eq!(
            FormatString::parse("%"),
            Err(ConfigError::UnknownSpecifier(String::new()))
        );
    }

    #[test]
    fn test_separator_text_is_malformed() {
        assert_eq!(
            FormatString::parse("%d,%d"),
            Err(ConfigError::MalformedFormat {
                format: "%d,%d".to_owned(),
                offset: 2,
            })
        );
    }
}
