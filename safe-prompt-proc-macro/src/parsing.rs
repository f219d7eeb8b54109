//! Macro argument parsing.

use syn::{
    Expr, LitStr, Token,
    parse::ParseStream,
    punctuated::Punctuated,
};

/// One prompt macro call: an optional session, then the message, the format
/// literal and the destination arguments.
pub struct PromptInvocation {
    pub session: Option<Expr>,
    pub message: Expr,
    pub format: LitStr,
    pub args: Vec<Expr>,
}

impl PromptInvocation {
    /// `prompt!(message, "format", args...)`
    pub fn parse_plain(input: ParseStream) -> syn::Result<Self> {
        Self::parse_after_session(input, None)
    }

    /// `prompt_with!(session, message, "format", args...)`
    pub fn parse_with_session(input: ParseStream) -> syn::Result<Self> {
        let session = input.parse()?;
        input.parse::<Token![,]>()?;
        Self::parse_after_session(input, Some(session))
    }

    fn parse_after_session(input: ParseStream, session: Option<Expr>) -> syn::Result<Self> {
        let message = input.parse()?;
        input.parse::<Token![,]>()?;
        let format = input.parse()?;

        let mut args = Vec::new();
        if input.parse::<Option<Token![,]>>()?.is_some() {
            args.extend(Punctuated::<Expr, Token![,]>::parse_terminated(input)?);
        }

        Ok(Self {
            session,
            message,
            format,
            args,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse::Parser;

    #[test]
    fn test_plain_call() {
        let call = PromptInvocation::parse_plain.parse_str(r#""Age: ", "%d", &mut age"#).unwrap();
        assert!(call.session.is_none());
        assert_eq!(call.format.value(), "%d");
        assert_eq!(call.args.len(), 1);
    }

    #[test]
    fn test_session_call_with_trailing_comma() {
        let call = PromptInvocation::parse_with_session.parse_str(
            r#"&mut session, label, "%s %d", &mut name, 10, &mut age,"#,
        )
        .unwrap();
        assert!(call.session.is_some());
        assert_eq!(call.args.len(), 3);
    }

    #[test]
    fn test_format_must_be_a_literal() {
        assert!(PromptInvocation::parse_plain.parse_str(r#""Age: ", fmt, &mut age"#).is_err());
    }

    #[test]
    fn test_no_arguments() {
        let call = PromptInvocation::parse_plain.parse_str(r#""Press enter", """#).unwrap();
        assert!(call.args.is_empty());
    }
}
