//! Security limits and capacity constants for the prompt macros.
//!
//! This module centralizes the compile-time limits that keep macro expansion
//! bounded on hostile or accidental input.

// ============================================================================
// Security Limits (Compile-Time DoS Protection)
// ============================================================================

/// Maximum length of a format string in bytes.
///
/// This limit prevents compile-time DoS attacks via extremely long format strings
/// while allowing all legitimate use cases.
pub const MAX_FORMAT_STRING_LEN: usize = 10_000;

/// Maximum number of specifiers in a format string.
///
/// Each specifier expands to one destination expression, so this bounds the
/// generated code.
pub const MAX_SPECIFIERS: usize = 256;

/// Maximum length of a specifier name kept for error messages.
///
/// Real names are at most two characters; anything longer is unknown anyway.
pub const MAX_SPECIFIER_NAME_LEN: usize = 16;

// ============================================================================
// Memory Pre-Allocation Hints
// ============================================================================

/// Initial capacity hint for the specifier vector.
///
/// Most format strings have 1-3 specifiers, so this avoids initial reallocations.
pub const SPECIFIERS_INITIAL_CAPACITY: usize = 4;

/// Initial capacity hint for a specifier name.
pub const NAME_CAPACITY: usize = 2;
