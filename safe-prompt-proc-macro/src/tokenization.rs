//! Format string tokenization at compile-time.

use crate::constants::{
    MAX_FORMAT_STRING_LEN, MAX_SPECIFIER_NAME_LEN, MAX_SPECIFIERS, NAME_CAPACITY,
    SPECIFIERS_INITIAL_CAPACITY,
};
use crate::types::SpecifierKind;
use syn::LitStr;

/// Whitespace accepted between specifiers, same set as the runtime parser.
fn is_separator(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\r' | '\n')
}

/// Tokenize a format string into its specifiers. Text before the first `%`
/// is prompt text and is skipped.
///
/// Enforces `MAX_FORMAT_STRING_LEN`, `MAX_SPECIFIERS`, `MAX_SPECIFIER_NAME_LEN`
/// limits and rejects unknown names or non-whitespace text between
/// specifiers, exactly as the runtime would.
pub fn tokenize_format_string(
    format_str: &str,
    format_lit: &LitStr,
) -> syn::Result<Vec<SpecifierKind>> {
    if format_str.len() > MAX_FORMAT_STRING_LEN {
        return Err(syn::Error::new(
            format_lit.span(),
            format!(
                "Format string too long ({} bytes). Maximum allowed: {} bytes. \
                 This limit prevents compile-time DoS attacks.",
                format_str.len(),
                MAX_FORMAT_STRING_LEN
            ),
        ));
    }

    let mut specifiers: Vec<SpecifierKind> = Vec::with_capacity(SPECIFIERS_INITIAL_CAPACITY);
    let mut chars = format_str.char_indices().peekable();

    while chars.next_if(|&(_, ch)| ch != '%').is_some() {}

    while let Some((offset, ch)) = chars.next() {
        match ch {
            '%' => {
                let mut name = String::with_capacity(NAME_CAPACITY);
                while let Some((_, c)) = chars.next_if(|&(_, c)| c.is_ascii_alphanumeric()) {
                    if name.len() >= MAX_SPECIFIER_NAME_LEN {
                        return Err(syn::Error::new(
                            format_lit.span(),
                            format!(
                                "Specifier name at byte {offset} too long (>{MAX_SPECIFIER_NAME_LEN} characters)."
                            ),
                        ));
                    }
                    name.push(c);
                }

                let Some(kind) = SpecifierKind::from_name(&name) else {
                    return Err(syn::Error::new(
                        format_lit.span(),
                        format!(
                            "Unknown format specifier '%{name}' at byte {offset}. \
                             Supported: %c, %d, %u, %hi, %hu, %ld, %lu, %f, %lf, %s"
                        ),
                    ));
                };

                if specifiers.len() >= MAX_SPECIFIERS {
                    return Err(syn::Error::new(
                        format_lit.span(),
                        format!(
                            "Too many specifiers in format string. Maximum allowed: {MAX_SPECIFIERS}. \
                             This limit prevents compile-time resource exhaustion."
                        ),
                    ));
                }
                specifiers.push(kind);
            }
            ch if is_separator(ch) => {}
            other => {
                return Err(syn::Error::new(
                    format_lit.span(),
                    format!(
                        "Unexpected {other:?} at byte {offset}. Only whitespace may separate \
                         specifiers; put prompt text in the message instead."
                    ),
                ));
            }
        }
    }

    Ok(specifiers)
}
