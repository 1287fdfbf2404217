//! Error types and error handling for the lexer.
//!
//! This module defines the errors raised while tokenizing. It includes:
//!
//! - Error structures with source position information
//! - Specific error variants for malformed literals and token expectations
//! - Error names and suggestions used when rendering diagnostics

pub mod errors;

#[cfg(test)]
mod tests;
