//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a stream of tokens for parsing. It handles:
//!
//! - Indentation tracking through `Indent` / `Dedent` tokens
//! - Recognition of keywords, identifiers, literals, and operators
//! - Token position tracking for error reporting
//! - Comments, blank lines and whitespace handling

pub mod cursor;
pub mod kinds;
pub mod lexer;
pub mod scan;
pub mod tokens;
