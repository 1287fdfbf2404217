//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::Position;
use std::rc::Rc;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnterminatedString {
            literal: "abc".to_string(),
        },
        Position(10, Rc::new("test.my".to_string())),
    );

    assert_eq!(error.get_error_name(), "UnterminatedString");
}

#[test]
fn test_error_position() {
    let pos = Position(42, Rc::new("test.my".to_string()));
    let error = Error::new(
        ErrorImpl::NumberParseError {
            token: "99999999999".to_string(),
        },
        pos.clone(),
    );

    assert_eq!(error.get_position().0, 42);
    assert_eq!(*error.get_position(), pos);
}

#[test]
fn test_number_parse_error() {
    let error = Error::new(
        ErrorImpl::NumberParseError {
            token: "99999999999".to_string(),
        },
        Position(0, Rc::new("test.my".to_string())),
    );

    assert_eq!(error.get_error_name(), "NumberParseError");
    assert_eq!(error.to_string(), "error parsing number: \"99999999999\"");
}

#[test]
fn test_unexpected_token_error() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: "Identifier".to_string(),
            received: "Number{1}".to_string(),
        },
        Position(0, Rc::new("test.my".to_string())),
    );

    assert_eq!(error.get_error_name(), "UnexpectedToken");
    assert_eq!(
        error.to_string(),
        "unexpected token: expected Identifier, received Number{1}"
    );
}

#[test]
fn test_unexpected_token_value_error() {
    let error = Error::new(
        ErrorImpl::UnexpectedTokenValue {
            expected: "SingleChar{:}".to_string(),
            received: "SingleChar{;}".to_string(),
        },
        Position(0, Rc::new("test.my".to_string())),
    );

    assert_eq!(error.get_error_name(), "UnexpectedTokenValue");
    assert!(matches!(
        error.get_kind(),
        ErrorImpl::UnexpectedTokenValue { .. }
    ));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::UnterminatedString {
            literal: "a\nb".to_string(),
        },
        Position(0, Rc::new("test.my".to_string())),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert_eq!(tip, "String literal `a\\nb` is never closed"),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}
