//! Token-kind tags for the `Lexer::expect*` family.
//!
//! Every `Token` variant has a zero-sized tag here with the same name. A tag
//! knows how to pull its payload out of a token, so kind checks live in one
//! place instead of being matched by hand at every parser call site:
//!
//! ```
//! use mython::lexer::{kinds, lexer::Lexer};
//!
//! let lexer = Lexer::new("answer = 42".to_string(), None).unwrap();
//! assert_eq!(lexer.expect::<kinds::Identifier>().unwrap(), "answer");
//! ```

use std::fmt::Debug;

use super::tokens::Token;
use crate::MK_TOKEN_KIND;

pub trait TokenKind {
    type Payload: ?Sized + Debug;

    const NAME: &'static str;

    /// Returns the payload when `token` is of this kind.
    fn payload(token: &Token) -> Option<&Self::Payload>;

    fn matches(token: &Token) -> bool {
        Self::payload(token).is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Number;

impl TokenKind for Number {
    type Payload = i32;

    const NAME: &'static str = "Number";

    fn payload(token: &Token) -> Option<&i32> {
        match token {
            Token::Number(value) => Some(value),
            _ => Option::None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identifier;

impl TokenKind for Identifier {
    type Payload = str;

    const NAME: &'static str = "Identifier";

    fn payload(token: &Token) -> Option<&str> {
        match token {
            Token::Identifier(value) => Some(value.as_str()),
            _ => Option::None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SingleChar;

impl TokenKind for SingleChar {
    type Payload = char;

    const NAME: &'static str = "SingleChar";

    fn payload(token: &Token) -> Option<&char> {
        match token {
            Token::SingleChar(value) => Some(value),
            _ => Option::None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StringLiteral;

impl TokenKind for StringLiteral {
    type Payload = str;

    const NAME: &'static str = "StringLiteral";

    fn payload(token: &Token) -> Option<&str> {
        match token {
            Token::StringLiteral(value) => Some(value.as_str()),
            _ => Option::None,
        }
    }
}

MK_TOKEN_KIND!(
    Class,
    Return,
    If,
    Else,
    Def,
    Print,
    And,
    Or,
    Not,
    None,
    True,
    False,
    Eq,
    NotEq,
    LessOrEq,
    GreaterOrEq,
    Newline,
    Indent,
    Dedent,
    Eof,
);
