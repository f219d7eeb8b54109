//! Core types for the prompt macro implementation.
//!
//! This module mirrors the runtime specifier set so format strings can be
//! checked while the macro expands.

/// A conversion requested by one `%name` in a format string.
///
/// # Design Note
///
/// Only used during macro expansion. The generated code names the runtime
/// `Destination` variant through [`SpecifierKind::variant`], so the compiler
/// checks every argument's type against it.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum SpecifierKind {
    Char,
    Int,
    UInt,
    Short,
    UShort,
    Long,
    ULong,
    Float,
    Double,
    Str,
}

impl SpecifierKind {
    /// Resolves a specifier name, exactly and case-sensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "c" => Some(Self::Char),
            "d" => Some(Self::Int),
            "f" => Some(Self::Float),
            "hi" => Some(Self::Short),
            "hu" => Some(Self::UShort),
            "ld" => Some(Self::Long),
            "lf" => Some(Self::Double),
            "lu" => Some(Self::ULong),
            "u" => Some(Self::UInt),
            "s" => Some(Self::Str),
            _ => None,
        }
    }

    /// Name of the matching `safe_prompt::Destination` variant.
    pub fn variant(self) -> &'static str {
        match self {
            Self::Char => "Char",
            Self::Int => "Int",
            Self::UInt => "UInt",
            Self::Short => "Short",
            Self::UShort => "UShort",
            Self::Long => "Long",
            Self::ULong => "ULong",
            Self::Float => "Float",
            Self::Double => "Double",
            Self::Str => "Str",
        }
    }

    /// Number of macro arguments this specifier consumes: `%s` takes a
    /// buffer and its capacity, everything else a single `&mut` slot.
    pub fn arity(self) -> usize {
        match self {
            Self::Str => 2,
            _ => 1,
        }
    }
}
