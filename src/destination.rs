//! Typed output slots for the dispatcher.

use crate::convert;
use crate::error::ConfigError;
use crate::format::{FormatString, Specifier};
use crate::scanner::Token;

/// One caller-owned output location, exclusively borrowed for a single call.
///
/// Each variant corresponds to exactly one [`Specifier`]. A `Str` slot
/// carries its declared capacity: like a C buffer of that size it receives at
/// most `capacity - 1` bytes. Bytes are copied as read, so input in a
/// single-byte encoding such as Latin-1 arrives unchanged.
#[derive(Debug)]
pub enum Destination<'a> {
    Char(&'a mut u8),
    Int(&'a mut i32),
    UInt(&'a mut u32),
    Short(&'a mut i16),
    UShort(&'a mut u16),
    Long(&'a mut i64),
    ULong(&'a mut u64),
    Float(&'a mut f32),
    Double(&'a mut f64),
    Str(&'a mut Vec<u8>, usize),
}

impl Destination<'_> {
    /// The specifier this slot can receive.
    pub fn specifier(&self) -> Specifier {
        match self {
            Self::Char(_) => Specifier::Char,
            Self::Int(_) => Specifier::Int,
            Self::UInt(_) => Specifier::UInt,
            Self::Short(_) => Specifier::Short,
            Self::UShort(_) => Specifier::UShort,
            Self::Long(_) => Specifier::Long,
            Self::ULong(_) => Specifier::ULong,
            Self::Float(_) => Specifier::Float,
            Self::Double(_) => Specifier::Double,
            Self::Str(..) => Specifier::Str,
        }
    }

    /// Converts `token` and writes it into the slot.
    ///
    /// Numbers clamp to the slot's range; `Char` takes the first byte and is
    /// left alone when the token is empty.
    pub(crate) fn store(&mut self, token: &Token) {
        let bytes = token.as_bytes();
        match self {
            Self::Char(slot) => {
                if let Some(&first) = bytes.first() {
                    **slot = first;
                }
            }
            Self::Int(slot) => **slot = convert::to_i32(bytes),
            Self::UInt(slot) => **slot = convert::to_u32(bytes),
            Self::Short(slot) => **slot = convert::to_i16(bytes),
            Self::UShort(slot) => **slot = convert::to_u16(bytes),
            Self::Long(slot) => **slot = convert::to_i64(bytes),
            Self::ULong(slot) => **slot = convert::to_u64(bytes),
            Self::Float(slot) => **slot = convert::to_f32(bytes),
            Self::Double(slot) => **slot = convert::to_f64(bytes),
            Self::Str(buf, capacity) => store_bytes(buf, bytes, *capacity),
        }
    }
}

/// Replaces `buf` with at most `capacity - 1` leading bytes of `bytes`.
fn store_bytes(buf: &mut Vec<u8>, bytes: &[u8], capacity: usize) {
    let end = bytes.len().min(capacity.saturating_sub(1));
    buf.clear();
    buf.extend_from_slice(&bytes[..end]);
}

/// Checks that `destinations` line up one-to-one with the specifiers of
/// `format`.
pub(crate) fn check_destinations(
    format: &FormatString,
    destinations: &[Destination<'_>],
) -> Result<(), ConfigError> {
    if format.len() != destinations.len() {
        return Err(ConfigError::ArgumentCount {
            specifiers: format.len(),
            destinations: destinations.len(),
        });
    }
    for (index, (&expected, destination)) in format.specifiers().iter().zip(destinations).enumerate() {
        let found = destination.specifier();
        if found != expected {
            return Err(ConfigError::DestinationMismatch {
                index,
                expected,
                found: found.destination_kind(),
            });
        }
    }
    Ok(())
}

macro_rules! impl_from_slot {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl<'a> From<&'a mut $ty> for Destination<'a> {
                fn from(slot: &'a mut $ty) -> Self {
                    Self::$variant(slot)
                }
            }
        )*
    };
}

impl_from_slot! {
    u8 => Char,
    i32 => Int,
    u32 => UInt,
    i16 => Short,
    u16 => UShort,
    i64 => Long,
    u64 => ULong,
    f32 => Float,
    f64 => Double,
}
