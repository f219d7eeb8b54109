//! Code generation for prompt macros.

use crate::tokenization::tokenize_format_string;
use crate::types::SpecifierKind;
use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::{Expr, Ident, LitStr, spanned::Spanned};

/// Generate one `safe_prompt::Destination` expression per specifier.
///
/// `%s` consumes two arguments (buffer, capacity); every other specifier
/// consumes one. Errors when arguments run out or are left over.
pub fn generate_destinations(
    specifiers: &[SpecifierKind],
    explicit_args: &[&Expr],
    format_lit: &LitStr,
) -> syn::Result<Vec<TokenStream>> {
    let mut generated = Vec::with_capacity(specifiers.len());
    let mut args = explicit_args.iter();

    for (position, &kind) in specifiers.iter().enumerate() {
        let variant = Ident::new(kind.variant(), Span::call_site());
        match kind {
            SpecifierKind::Str => {
                let (Some(buffer), Some(capacity)) = (args.next(), args.next()) else {
                    return Err(make_missing_argument_error(position + 1, kind, format_lit));
                };
                generated.push(quote! {
                    ::safe_prompt::Destination::#variant(#buffer, #capacity)
                });
            }
            _ => {
                let Some(slot) = args.next() else {
                    return Err(make_missing_argument_error(position + 1, kind, format_lit));
                };
                generated.push(quote! {
                    ::safe_prompt::Destination::#variant(#slot)
                });
            }
        }
    }

    let consumed: usize = specifiers.iter().map(|kind| kind.arity()).sum();
    if let Some(first_unused) = explicit_args.get(consumed) {
        return Err(syn::Error::new(
            first_unused.span(),
            format!(
                "Too many arguments: {} unused argument(s) provided. \
                 The format string only consumes {} argument(s)",
                explicit_args.len() - consumed,
                consumed
            ),
        ));
    }

    Ok(generated)
}

/// Create error for a specifier whose argument(s) were not provided.
fn make_missing_argument_error(position: usize, kind: SpecifierKind, format_lit: &LitStr) -> syn::Error {
    let expected = match kind {
        SpecifierKind::Str => "a `&mut Vec<u8>` followed by its capacity",
        _ => "a `&mut` reference to the destination",
    };
    syn::Error::new(
        format_lit.span(),
        format!("Specifier at position {position} has no corresponding argument. Provide {expected}"),
    )
}

/// Generate the destination array for a prompt call: tokenize, validate, codegen.
///
/// The result is a `let mut destinations = [...]` statement with an explicit
/// array type so an empty format still type-checks.
pub fn generate_prompt_implementation(
    format_lit: &LitStr,
    explicit_args: &[&Expr],
) -> syn::Result<TokenStream> {
    let format_str = format_lit.value();
    let specifiers = tokenize_format_string(&format_str, format_lit)?;
    let destinations = generate_destinations(&specifiers, explicit_args, format_lit)?;
    let count = destinations.len();

    Ok(quote! {
        let mut destinations: [::safe_prompt::Destination<'_>; #count] = [#(#destinations),*];
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit(format: &str) -> LitStr {
        LitStr::new(format, Span::call_site())
    }

    #[test]
    fn test_string_consumes_two_arguments() {
        let args: Vec<Expr> = vec![
            syn::parse_quote!(&mut name),
            syn::parse_quote!(50),
            syn::parse_quote!(&mut age),
        ];
        let refs: Vec<&Expr> = args.iter().collect();
        let format = lit("%s %d");
        let generated = generate_destinations(
            &[SpecifierKind::Str, SpecifierKind::Int],
            &refs,
            &format,
        )
        .unwrap();

        assert_eq!(generated.len(), 2);
        let first = generated[0].to_string();
        assert!(first.contains("Str"));
        assert!(first.contains("name"));
        assert!(first.contains("50"));
        assert!(generated[1].to_string().contains("Int"));
    }

    #[test]
    fn test_missing_arguments() {
        let args: Vec<Expr> = vec![syn::parse_quote!(&mut name)];
        let refs: Vec<&Expr> = args.iter().collect();
        let err = generate_destinations(&[SpecifierKind::Str], &refs, &lit("%s")).unwrap_err();
        assert!(err.to_string().contains("position 1"));
    }

    #[test]
    fn test_unused_arguments() {
        let args: Vec<Expr> = vec![syn::parse_quote!(&mut a), syn::parse_quote!(&mut b)];
        let refs: Vec<&Expr> = args.iter().collect();
        let err = generate_destinations(&[SpecifierKind::Int], &refs, &lit("%d")).unwrap_err();
        assert!(err.to_string().contains("1 unused"));
    }

    #[test]
    fn test_empty_format_declares_an_empty_array() {
        let generated = generate_prompt_implementation(&lit("Press enter"), &[]).unwrap();
        assert!(generated.to_string().contains("0usize"));
    }
}
