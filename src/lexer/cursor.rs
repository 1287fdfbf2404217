//! Character cursor over an in-memory source.
//!
//! The cursor is the only thing the lexer reads from. It supports peeking
//! at the next character, consuming it, and pushing the last consumed
//! character back, which is all the lookahead the scanner needs.

use std::rc::Rc;

use crate::Position;

pub struct Cursor {
    source: String,
    pos: usize,
    /// Byte offset of the last consumed character, while it may be put back.
    last: Option<usize>,
    file: Rc<String>,
}

impl Cursor {
    pub fn new(source: String, file: Rc<String>) -> Cursor {
        Cursor {
            source,
            pos: 0,
            last: None,
            file,
        }
    }

    /// Returns the next character without consuming it.
    pub fn peek(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    /// Consumes and returns the next character.
    pub fn next(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.last = Some(self.pos);
        self.pos += ch.len_utf8();
        Some(ch)
    }

    /// Un-consumes the character returned by the last `next`.
    ///
    /// Only one character can be put back; a second call without an
    /// intervening `next` does nothing.
    pub fn putback(&mut self) {
        if let Some(last) = self.last.take() {
            self.pos = last;
        }
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn position(&self) -> Position {
        Position(self.pos as u32, Rc::clone(&self.file))
    }

    pub fn file(&self) -> &Rc<String> {
        &self.file
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::Cursor;

    fn cursor_over(source: &str) -> Cursor {
        Cursor::new(source.to_string(), Rc::new("test.my".to_string()))
    }

    #[test]
    fn test_peek_does_not_consume() {
        let cursor = cursor_over("ab");
        assert_eq!(cursor.peek(), Some('a'));
        assert_eq!(cursor.peek(), Some('a'));
        assert_eq!(cursor.position().0, 0);
    }

    #[test]
    fn test_next_and_putback() {
        let mut cursor = cursor_over("ab");
        assert_eq!(cursor.next(), Some('a'));
        assert_eq!(cursor.next(), Some('b'));
        assert!(cursor.at_eof());

        cursor.putback();
        assert_eq!(cursor.peek(), Some('b'));

        // only a single character of pushback
        cursor.putback();
        assert_eq!(cursor.peek(), Some('b'));
        assert_eq!(cursor.position().0, 1);
    }

    #[test]
    fn test_end_of_stream() {
        let mut cursor = cursor_over("");
        assert!(cursor.at_eof());
        assert_eq!(cursor.peek(), None);
        assert_eq!(cursor.next(), None);

        cursor.putback();
        assert_eq!(cursor.position().0, 0);
    }

    #[test]
    fn test_multibyte_characters() {
        let mut cursor = cursor_over("é!");
        assert_eq!(cursor.next(), Some('é'));
        assert_eq!(cursor.position().0, 2);
        assert_eq!(cursor.next(), Some('!'));
        cursor.putback();
        assert_eq!(cursor.position().0, 2);
    }
}
