//! Decimal conversion of scanned tokens with clamping to the destination
//! width.
//!
//! Parsing follows the leading-prefix rules of the C `strto*` family: an
//! optional sign, then as many digits as are present. Anything after the
//! prefix is ignored and a token with no digits converts to zero. Values
//! outside the destination's range never wrap into a different signed value;
//! they land on the nearest boundary.

/// Parses the leading decimal integer of `text`.
///
/// The accumulator saturates at the `i128` bounds, which lie far outside
/// every destination width, so clamping afterwards still sees the right side.
pub fn parse_integer_prefix(text: &[u8]) -> i128 {
    let (negative, digits) = match text.split_first() {
        Some((b'-', rest)) => (true, rest),
        Some((b'+', rest)) => (false, rest),
        _ => (false, text),
    };

    let mut value: i128 = 0;
    for &byte in digits.iter().take_while(|b| b.is_ascii_digit()) {
        let digit = i128::from(byte - b'0');
        value = value.saturating_mul(10);
        value = if negative {
            value.saturating_sub(digit)
        } else {
            value.saturating_add(digit)
        };
    }
    value
}

/// Length of the leading `[sign] digits [. digits]` run of `text`, or zero
/// when that run contains no digit.
fn float_prefix_len(text: &[u8]) -> usize {
    let mut end = usize::from(matches!(text.first(), Some(b'-' | b'+')));
    let int_digits = text[end..].iter().take_while(|b| b.is_ascii_digit()).count();
    end += int_digits;

    let mut frac_digits = 0;
    if text.get(end) == Some(&b'.') {
        frac_digits = text[end + 1..].iter().take_while(|b| b.is_ascii_digit()).count();
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits + frac_digits == 0 { 0 } else { end }
}

fn float_prefix(text: &[u8]) -> &str {
    // The prefix is pure ASCII by construction.
    std::str::from_utf8(&text[..float_prefix_len(text)]).unwrap_or_default()
}

fn saturate<T: TryFrom<i128>>(value: i128, min: T, max: T) -> T {
    T::try_from(value).unwrap_or(if value < 0 { min } else { max })
}

/// Unsigned conversion as `strtoul` plus a cast would do it, minus the wrap
/// at the extremes: a negative value above `-(MAX)-1` wraps modulo `MAX+1`
/// (so `-1` is `MAX`), anything at or below it, or above `MAX`, is `MAX`.
fn clamp_unsigned<T>(value: i128, max: T) -> T
where
    T: TryFrom<i128> + Into<u128> + Copy,
{
    let modulus = i128::try_from(max.into()).map_or(i128::MAX, |m| m + 1);
    if value >= modulus || value <= -modulus {
        return max;
    }
    let wrapped = if value < 0 { value + modulus } else { value };
    T::try_from(wrapped).unwrap_or(max)
}

pub fn to_i16(text: &[u8]) -> i16 {
    saturate(parse_integer_prefix(text), i16::MIN, i16::MAX)
}

pub fn to_i32(text: &[u8]) -> i32 {
    saturate(parse_integer_prefix(text), i32::MIN, i32::MAX)
}

pub fn to_i64(text: &[u8]) -> i64 {
    saturate(parse_integer_prefix(text), i64::MIN, i64::MAX)
}

pub fn to_u16(text: &[u8]) -> u16 {
    clamp_unsigned(parse_integer_prefix(text), u16::MAX)
}

pub fn to_u32(text: &[u8]) -> u32 {
    clamp_unsigned(parse_integer_prefix(text), u32::MAX)
}

pub fn to_u64(text: &[u8]) -> u64 {
    clamp_unsigned(parse_integer_prefix(text), u64::MAX)
}

/// Overflowing magnitudes clamp to `±f32::MAX` instead of becoming infinite.
pub fn to_f32(text: &[u8]) -> f32 {
    let value: f32 = float_prefix(text).parse().unwrap_or_default();
    if value.is_infinite() {
        f32::MAX.copysign(value)
    } else {
        value
    }
}

/// Overflowing magnitudes clamp to `±f64::MAX` instead of becoming infinite.
pub fn to_f64(text: &[u8]) -> f64 {
    let value: f64 = float_prefix(text).parse().unwrap_or_default();
    if value.is_infinite() {
        f64::MAX.copysign(value)
    } else {
        value
    }
}
