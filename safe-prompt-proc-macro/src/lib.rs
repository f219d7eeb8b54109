//! Procedural macros for compile-time checked prompts.
//!
//! This crate provides two macros, re-exported by `safe-prompt`:
//! - `prompt!`: Prompts on stdin/stdout
//! - `prompt_with!`: Prompts on an explicit `safe_prompt::Prompt` session
//!
//! # Architecture
//!
//! The expansion is divided into three phases:
//! 1. **Tokenization**: The format string is analyzed at compile-time and
//!    every `%name` is resolved to a specifier
//! 2. **Code Generation**: Each specifier is paired with its argument(s) and
//!    turned into a typed `Destination` expression
//! 3. **Expansion**: The macro expands to a call into the runtime dispatcher
//!
//! The implementation is organized into focused modules:
//! - `constants`: Security limits and memory allocation hints
//! - `types`: Specifier definitions
//! - `parsing`: Macro argument parsing
//! - `tokenization`: Format string tokenization
//! - `codegen`: Code generation
//!
//! # Type Safety
//!
//! A C-style variadic prompt cannot tell whether `%d` received an `int*`.
//! Here every argument ends up inside a `Destination` variant, so passing
//! `&mut f32` to `%d` is an ordinary type error pointing at the argument.
//!
//! # Security
//!
//! ## Compile-Time DoS Protection
//!
//! - **Format strings**: Maximum 10,000 bytes
//! - **Specifiers**: Maximum 256 per format string
//!
//! ## Input Validation
//!
//! - Unknown specifiers rejected
//! - Text other than whitespace between specifiers rejected
//! - Missing and surplus arguments rejected

#![forbid(unsafe_code)]

// ============================================================================
// Module Organization
// ============================================================================

mod codegen;
mod constants;
mod parsing;
mod tokenization;
mod types;

use proc_macro::TokenStream;
use quote::quote;
use syn::parse_macro_input;

use codegen::generate_prompt_implementation;
use parsing::PromptInvocation;

// ============================================================================
// Public Macros
// ============================================================================

/// Prints a message and reads values from stdin according to a format
/// string checked at compile time.
///
/// # Syntax
///
/// ```ignore
/// prompt!(message_expr, "format string", args...)
/// ```
///
/// - `message_expr`: Expression that evaluates to a `&str`, printed once
/// - `format string`: String literal with `%` specifiers
/// - `args...`: One `&mut` slot per specifier; `%s` takes a `&mut Vec<u8>`
///   followed by its capacity
///
/// # Returns
///
/// `safe_prompt::PromptResult<safe_prompt::ScanOutcome>`, see
/// `safe_prompt::Prompt::scan`.
///
/// # Examples
///
/// ```ignore
/// use safe_prompt::prompt;
///
/// let mut age = 0i32;
/// prompt!("Enter age: ", "%d", &mut age)?;
///
/// let mut color = Vec::new();
/// prompt!("Enter favorite color: ", "%s", &mut color, 10)?;
/// ```
#[proc_macro]
pub fn prompt(input: TokenStream) -> TokenStream {
    let invocation = parse_macro_input!(input with PromptInvocation::parse_plain);
    expand(&invocation)
}

/// Like [`prompt!`], on an explicit session.
///
/// # Syntax
///
/// ```ignore
/// prompt_with!(session_expr, message_expr, "format string", args...)
/// ```
///
/// `session_expr` must evaluate to a `safe_prompt::Prompt` (or a `&mut` to
/// one). Useful for files, in-memory input and tests.
#[proc_macro]
pub fn prompt_with(input: TokenStream) -> TokenStream {
    let invocation = parse_macro_input!(input with PromptInvocation::parse_with_session);
    expand(&invocation)
}

/// Builds the destination array, then calls the session's `scan` or the
/// stdio `prompt` function on it.
fn expand(invocation: &PromptInvocation) -> TokenStream {
    let message = &invocation.message;
    let format_lit = &invocation.format;
    let explicit_args: Vec<_> = invocation.args.iter().collect();

    let destinations = match generate_prompt_implementation(format_lit, &explicit_args) {
        Ok(code) => code,
        Err(err) => return err.to_compile_error().into(),
    };

    let call = match &invocation.session {
        Some(session) => quote! { (#session).scan(#message, #format_lit, &mut destinations) },
        None => quote! { ::safe_prompt::prompt(#message, #format_lit, &mut destinations) },
    };

    // Hygiene: The double braces {{ }} create an isolated scope for
    // `destinations`.
    let expanded = quote! {{
        #destinations
        #call
    }};

    TokenStream::from(expanded)
}
