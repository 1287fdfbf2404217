//! Character classifiers and scanning primitives.
//!
//! Each `read_*` function consumes exactly the characters of one lexeme
//! from the cursor and leaves it positioned right after them. Only ASCII
//! characters are classified; anything else is never a digit or a letter.

use crate::errors::errors::{Error, ErrorImpl};

use super::cursor::Cursor;

pub fn is_num(ch: char) -> bool {
    ch.is_ascii_digit()
}

pub fn is_alpha(ch: char) -> bool {
    ch.is_ascii_alphabetic()
}

pub fn is_alnum(ch: char) -> bool {
    is_num(ch) || is_alpha(ch)
}

/// Letter, digit or underscore.
pub fn is_ident_char(ch: char) -> bool {
    is_alnum(ch) || ch == '_'
}

/// Consumes characters while `predicate` holds and returns them.
fn read_while(cursor: &mut Cursor, predicate: impl Fn(char) -> bool) -> String {
    let mut result = String::new();

    while let Some(ch) = cursor.next() {
        if predicate(ch) {
            result.push(ch);
        } else {
            cursor.putback();
            break;
        }
    }

    result
}

/// Reads a quoted string starting at its opening `'` or `"`.
///
/// `\"`, `\'`, `\n` and `\t` are decoded; any other escaped character is
/// kept as is (`\\` gives a single backslash).
pub fn read_string(cursor: &mut Cursor) -> Result<String, Error> {
    let start = cursor.position();
    let mut result = String::new();

    let Some(quote) = cursor.next() else {
        return Err(Error::new(
            ErrorImpl::UnterminatedString { literal: result },
            start,
        ));
    };

    loop {
        match cursor.next() {
            Some('\\') => match cursor.next() {
                Some('n') => result.push('\n'),
                Some('t') => result.push('\t'),
                Some(escaped) => result.push(escaped),
                None => break,
            },
            Some(ch) if ch == quote => return Ok(result),
            Some(ch) => result.push(ch),
            None => break,
        }
    }

    Err(Error::new(
        ErrorImpl::UnterminatedString { literal: result },
        start,
    ))
}

pub fn read_name(cursor: &mut Cursor) -> String {
    read_while(cursor, is_ident_char)
}

/// Reads a run of digits. No digits reads as `0`; a value outside the `i32`
/// range is an error.
pub fn read_number(cursor: &mut Cursor) -> Result<i32, Error> {
    let start = cursor.position();
    let digits = read_while(cursor, is_num);

    if digits.is_empty() {
        return Ok(0);
    }

    digits
        .parse::<i32>()
        .map_err(|_| Error::new(ErrorImpl::NumberParseError { token: digits }, start))
}

pub fn count_spaces(cursor: &mut Cursor) -> usize {
    read_while(cursor, |ch| ch == ' ').len()
}

/// Consumes the rest of the physical line, terminator included, and returns
/// it without the terminator.
pub fn read_line(cursor: &mut Cursor) -> String {
    let line = read_while(cursor, |ch| ch != '\n');
    cursor.next();
    line
}

/// Consumes a comment up to, but not including, the end of its line.
pub fn skip_comment(cursor: &mut Cursor) {
    read_while(cursor, |ch| ch != '\n');
}
