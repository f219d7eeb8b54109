//! Capacity constants and format-language markers.
//!
//! This module centralizes the sizes of the transient token buffers used by
//! the dispatcher, so every conversion path agrees on the same limits.

// ============================================================================
// Format Language
// ============================================================================

/// Marker that introduces a specifier in a format string (`%d`, `%lu`, ...).
pub const SPECIFIER_MARKER: char = '%';

// ============================================================================
// Token Capacities
// ============================================================================

/// Capacity of the internal token used for numeric conversions.
///
/// `f64::MAX` written in plain decimal notation is 309 digits before the
/// point; with a sign, a point and a fractional part this still fits with
/// room to spare. One slot is reserved for the terminator, as for every
/// token.
pub const NUMERIC_TOKEN_CAPACITY: usize = 512;

/// Capacity of the internal token used for `%c`.
///
/// Only the first byte is stored, but the token is kept as large as the
/// numeric one so a long line is discarded the same way.
pub const CHAR_TOKEN_CAPACITY: usize = NUMERIC_TOKEN_CAPACITY;

// ============================================================================
// Memory Pre-Allocation Hints
// ============================================================================

/// Upper bound on the up-front allocation of a token whose declared
/// capacity is larger; the buffer grows on demand past it.
pub const TOKEN_INITIAL_CAPACITY: usize = 64;
