use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, Token> = {
        let mut map = HashMap::new();
        map.insert("class", Token::Class);
        map.insert("return", Token::Return);
        map.insert("if", Token::If);
        map.insert("else", Token::Else);
        map.insert("def", Token::Def);
        map.insert("print", Token::Print);
        map.insert("and", Token::And);
        map.insert("or", Token::Or);
        map.insert("not", Token::Not);
        map.insert("None", Token::None);
        map.insert("True", Token::True);
        map.insert("False", Token::False);
        map
    };

    pub static ref DUAL_SYMBOL_LOOKUP: HashMap<&'static str, Token> = {
        let mut map = HashMap::new();
        map.insert("==", Token::Eq);
        map.insert("!=", Token::NotEq);
        map.insert("<=", Token::LessOrEq);
        map.insert(">=", Token::GreaterOrEq);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub enum Token {
    // Valued
    Number(i32),
    Identifier(String),
    SingleChar(char),
    StringLiteral(String),

    // Reserved
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

    Eq,          // ==
    NotEq,       // !=
    LessOrEq,    // <=
    GreaterOrEq, // >=

    Newline,
    Indent,
    Dedent,
    Eof,
}

impl Token {
    pub fn name(&self) -> &'static str {
        match self {
            Token::Number(_) => "Number",
            Token::Identifier(_) => "Identifier",
            Token::SingleChar(_) => "SingleChar",
            Token::StringLiteral(_) => "StringLiteral",
            Token::Class => "Class",
            Token::Return => "Return",
            Token::If => "If",
            Token::Else => "Else",
            Token::Def => "Def",
            Token::Print => "Print",
            Token::And => "And",
            Token::Or => "Or",
            Token::Not => "Not",
            Token::None => "None",
            Token::True => "True",
            Token::False => "False",
            Token::Eq => "Eq",
            Token::NotEq => "NotEq",
            Token::LessOrEq => "LessOrEq",
            Token::GreaterOrEq => "GreaterOrEq",
            Token::Newline => "Newline",
            Token::Indent => "Indent",
            Token::Dedent => "Dedent",
            Token::Eof => "Eof",
        }
    }

    pub fn is_valued(&self) -> bool {
        matches!(
            self,
            Token::Number(_) | Token::Identifier(_) | Token::SingleChar(_) | Token::StringLiteral(_)
        )
    }
}

/// Debug text form: `Number{42}`, `Identifier{x}`, bare `Newline` for unvalued tokens.
impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Number(value) => write!(f, "{}{{{}}}", self.name(), value),
            Token::Identifier(value) | Token::StringLiteral(value) => {
                write!(f, "{}{{{}}}", self.name(), value)
            }
            Token::SingleChar(value) => write!(f, "{}{{{}}}", self.name(), value),
            _ => write!(f, "{}", self.name()),
        }
    }
}
