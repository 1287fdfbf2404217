use std::{fmt::Debug, rc::Rc};

use log::{debug, trace};

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, Span,
};

use super::{
    cursor::Cursor,
    kinds::TokenKind,
    scan::{
        count_spaces, is_ident_char, is_num, read_line, read_name, read_number, read_string,
        skip_comment,
    },
    tokens::{Token, DUAL_SYMBOL_LOOKUP, RESERVED_LOOKUP},
};

/// Indentation-aware lexer producing one token per `next_token` call.
///
/// Each indent level is two leading spaces. A change of several levels is
/// reported as that many `Indent` or `Dedent` tokens, one per call.
pub struct Lexer {
    cursor: Cursor,
    current_token: Token,
    current_span: Span,
    /// No significant token has been produced on this physical line yet.
    start_of_line: bool,
    /// Indent levels already reported and not yet closed.
    current_indent: u32,
    /// Indent level measured at the start of the current line.
    line_indent: u32,
}

impl Lexer {
    /// Creates a lexer over `source` and reads its first token.
    ///
    /// `file` names the source in positions; it defaults to `"shell"`.
    pub fn new(source: String, file: Option<String>) -> Result<Lexer, Error> {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        let mut lexer = Lexer {
            cursor: Cursor::new(source, file_name),
            current_token: Token::Eof,
            current_span: Span {
                start: Position::null(),
                end: Position::null(),
            },
            start_of_line: true,
            current_indent: 0,
            line_indent: 0,
        };

        lexer.next_token()?;
        Ok(lexer)
    }

    /// Returns the most recently produced token.
    pub fn current_token(&self) -> &Token {
        &self.current_token
    }

    pub fn current_span(&self) -> &Span {
        &self.current_span
    }

    pub fn file(&self) -> &Rc<String> {
        self.cursor.file()
    }

    /// Produces the next token and makes it current. Keeps returning `Eof`
    /// once the source is exhausted.
    pub fn next_token(&mut self) -> Result<&Token, Error> {
        let (token, span) = self.read_next_token().inspect_err(|error| {
            debug!("lexing {} failed: {}", self.cursor.file(), error);
        })?;

        trace!("{} at {}", token, span.start.0);
        self.current_token = token;
        self.current_span = span;

        Ok(&self.current_token)
    }

    /// Returns the payload of the current token if it is of kind `K`.
    pub fn expect<K: TokenKind>(&self) -> Result<&K::Payload, Error> {
        K::payload(&self.current_token).ok_or_else(|| {
            Error::new(
                ErrorImpl::UnexpectedToken {
                    expected: K::NAME.to_string(),
                    received: self.current_token.to_string(),
                },
                self.current_span.start.clone(),
            )
        })
    }

    /// Checks that the current token is of kind `K` and carries `value`.
    pub fn expect_value<K, U>(&self, value: &U) -> Result<(), Error>
    where
        K: TokenKind,
        K::Payload: PartialEq<U>,
        U: ?Sized + Debug,
    {
        match K::payload(&self.current_token) {
            Some(payload) if payload == value => Ok(()),
            _ => Err(Error::new(
                ErrorImpl::UnexpectedTokenValue {
                    expected: format!("{}{{{:?}}}", K::NAME, value),
                    received: self.current_token.to_string(),
                },
                self.current_span.start.clone(),
            )),
        }
    }

    /// Advances, then behaves like `expect`.
    pub fn expect_next<K: TokenKind>(&mut self) -> Result<&K::Payload, Error> {
        self.next_token()?;
        self.expect::<K>()
    }

    /// Advances, then behaves like `expect_value`.
    pub fn expect_next_value<K, U>(&mut self, value: &U) -> Result<(), Error>
    where
        K: TokenKind,
        K::Payload: PartialEq<U>,
        U: ?Sized + Debug,
    {
        self.next_token()?;
        self.expect_value::<K, U>(value)
    }

    fn read_next_token(&mut self) -> Result<(Token, Span), Error> {
        loop {
            let start = self.cursor.position();

            let token = match self.cursor.peek() {
                None => Some(self.parse_eof()),
                Some('\n') => self.parse_line_end(),
                Some('#') => {
                    skip_comment(&mut self.cursor);
                    None
                }
                Some(' ') => {
                    self.parse_spaces();
                    None
                }
                Some(_) if self.start_of_line && self.current_indent != self.line_indent => {
                    Some(self.parse_indent())
                }
                Some(ch) => {
                    let token = self.parse_token(ch)?;
                    self.start_of_line = false;
                    Some(token)
                }
            };

            if let Some(token) = token {
                let end = self.cursor.position();
                return Ok((token, Span { start, end }));
            }
        }
    }

    fn next_line(&mut self) {
        read_line(&mut self.cursor);
        self.start_of_line = true;
        self.line_indent = 0;
    }

    fn parse_eof(&mut self) -> Token {
        if !self.start_of_line {
            // last line has no terminator
            self.next_line();
            Token::Newline
        } else if self.current_indent > 0 {
            self.current_indent -= 1;
            Token::Dedent
        } else {
            Token::Eof
        }
    }

    /// Blank lines produce nothing.
    fn parse_line_end(&mut self) -> Option<Token> {
        let blank = self.start_of_line;
        self.next_line();

        if blank {
            None
        } else {
            Some(Token::Newline)
        }
    }

    fn parse_spaces(&mut self) {
        let spaces = count_spaces(&mut self.cursor);

        if self.start_of_line {
            self.line_indent = (spaces / 2) as u32;
        }
    }

    fn parse_indent(&mut self) -> Token {
        let token = if self.current_indent < self.line_indent {
            self.current_indent += 1;
            Token::Indent
        } else {
            self.current_indent -= 1;
            Token::Dedent
        };

        debug!(
            "{} to level {} (line at level {})",
            token, self.current_indent, self.line_indent
        );
        token
    }

    /// `next` is the peeked, not yet consumed, first character of the token.
    fn parse_token(&mut self, next: char) -> Result<Token, Error> {
        match next {
            ch if is_num(ch) => Ok(Token::Number(read_number(&mut self.cursor)?)),
            ch if is_ident_char(ch) => Ok(self.parse_name()),
            '"' | '\'' => Ok(Token::StringLiteral(read_string(&mut self.cursor)?)),
            first => Ok(self.parse_char(first)),
        }
    }

    fn parse_name(&mut self) -> Token {
        let name = read_name(&mut self.cursor);

        if let Some(token) = RESERVED_LOOKUP.get(name.as_str()) {
            token.clone()
        } else {
            Token::Identifier(name)
        }
    }

    fn parse_char(&mut self, first: char) -> Token {
        self.cursor.next();

        let mut pair = String::from(first);
        if let Some(second) = self.cursor.peek() {
            pair.push(second);
        }

        if let Some(token) = DUAL_SYMBOL_LOOKUP.get(pair.as_str()) {
            self.cursor.next();
            token.clone()
        } else {
            Token::SingleChar(first)
        }
    }
}

/// Lexes `source` to the end, returning every token up to and including `Eof`.
pub fn tokenize(source: String, file: Option<String>) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source, file)?;
    let mut tokens = vec![lex.current_token().clone()];

    while *lex.current_token() != Token::Eof {
        tokens.push(lex.next_token()?.clone());
    }

    Ok(tokens)
}
