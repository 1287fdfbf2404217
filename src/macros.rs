//! Utility macros for the lexer.
//!
//! This module defines helper macros used throughout the lexer:
//!
//! - `MK_TOKEN_KIND!` - Declares token-kind tags for payload-free tokens
//!
//! These macros reduce boilerplate in the `lexer::kinds` module.

/// Declares one zero-sized tag per unvalued `Token` variant and implements
/// `TokenKind` for it with a `()` payload.
///
/// Each name must match a unit variant of `Token`.
///
/// # Example
///
/// ```ignore
/// MK_TOKEN_KIND!(Newline, Indent, Dedent);
///
/// lexer.expect::<Newline>()?;
/// ```
#[macro_export]
macro_rules! MK_TOKEN_KIND {
    ($($name:ident),* $(,)?) => {
        $(
            #[derive(Debug, Clone, Copy, PartialEq, Eq)]
            pub struct $name;

            impl $crate::lexer::kinds::TokenKind for $name {
                type Payload = ();

                const NAME: &'static str = stringify!($name);

                fn payload(token: &$crate::lexer::tokens::Token) -> ::core::option::Option<&()> {
                    match token {
                        $crate::lexer::tokens::Token::$name => ::core::option::Option::Some(&()),
                        _ => ::core::option::Option::None,
                    }
                }
            }
        )*
    };
}
