//! Formatted, bounded console input: a safe replacement for `scanf`.
//!
//! A call prints a prompt message, then reads one value per specifier of a
//! small format language from the input stream, converts it and stores it in
//! a typed, caller-owned slot.
//!
//! ```no_run
//! use safe_prompt::{Destination, ScanOutcome, prompt};
//!
//! let mut height = 0.0f32;
//! let mut weight = 0.0f32;
//! let outcome = prompt(
//!     "Enter height followed by weight: ",
//!     "%f %f",
//!     &mut [Destination::Float(&mut height), Destination::Float(&mut weight)],
//! )?;
//! if outcome != ScanOutcome::Converted(2) {
//!     eprintln!("please enter two numbers");
//! }
//! # Ok::<(), safe_prompt::PromptError>(())
//! ```
//!
//! # Format Language
//!
//! Text before the first `%` is ignored. Each `%name` requests one value;
//! whitespace between specifiers is allowed.
//!
//! | Specifier | Destination |
//! |-----------|-------------|
//! | `%c`  | `u8` (first byte of the input) |
//! | `%d`  | `i32` |
//! | `%u`  | `u32` |
//! | `%hi` | `i16` |
//! | `%hu` | `u16` |
//! | `%ld` | `i64` |
//! | `%lu` | `u64` |
//! | `%f`  | `f32` |
//! | `%lf` | `f64` |
//! | `%s`  | `Vec<u8>` plus a capacity |
//!
//! # Input Rules
//!
//! - Values are separated by spaces; every call consumes input through the
//!   end of the line, so nothing typed for one prompt leaks into the next.
//! - Numbers keep only their leading `[0-9.-]` run and are clamped to the
//!   destination's range instead of overflowing. For unsigned destinations,
//!   `-1` reads as the maximum value.
//! - A `%s` slot of capacity `n` receives at most `n - 1` bytes; longer input
//!   is truncated and bytes are stored as read. An empty string is a valid
//!   answer.
//! - An empty numeric or character answer stops the call and returns the
//!   number of values stored so far.
//! - End-of-stream stops the call with [`ScanOutcome::EndOfStream`].
//!
//! # Errors
//!
//! Only caller mistakes ([`ConfigError`]: unknown specifier, wrong number or
//! type of destinations) and I/O failures are errors. With the [`prompt!`]
//! macro the configuration checks happen at compile time.
//!
//! # Logging
//!
//! Scanner and dispatcher decisions are emitted as `tracing` events at the
//! `trace` and `debug` levels. No subscriber is installed by this crate.

#![forbid(unsafe_code)]
#![allow(clippy::needless_return)]

// ============================================================================
// Module Organization
// ============================================================================

pub mod constants;
mod convert;
mod destination;
mod error;
pub mod format;
pub mod scanner;
mod session;

// ============================================================================
// Re-exports for Public API
// ============================================================================

pub use destination::Destination;
pub use error::{ConfigError, PromptError, PromptResult};
pub use format::{FormatString, Specifier};
pub use scanner::{Delimiters, Polarity};
pub use session::{LineStatus, Prompt, ScanOutcome, prompt, prompt_getline, prompt_getline_delim};

pub use safe_prompt_proc_macro::{prompt, prompt_with};
