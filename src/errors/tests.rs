//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorCategory, ErrorImpl, ErrorTip};
use crate::Position;
use std::sync::Arc;

fn at(offset: u32) -> Position {
    Position(offset, Arc::new("test.attr".to_string()))
}

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        at(10),
    );

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(error.category(), ErrorCategory::Lexical);
}

#[test]
fn test_error_position() {
    let error = Error::new(
        ErrorImpl::UnexpectedTokenDetailed {
            token: "identifier".to_string(),
            message: "expected `=`".to_string(),
        },
        at(42),
    );

    assert_eq!(error.get_position().0, 42);
    assert_eq!(error.get_position().1.as_str(), "test.attr");
}

#[test]
fn test_unrecognised_token_has_no_tip() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        at(0),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_syntax_errors_are_categorised() {
    let errors = vec![
        ErrorImpl::UnexpectedTokenDetailed {
            token: "]".to_string(),
            message: "expected a value".to_string(),
        },
        ErrorImpl::UnexpectedEndOfInput {
            expected: "`]`".to_string(),
        },
        ErrorImpl::TrailingInput {
            token: "abc".to_string(),
        },
        ErrorImpl::EmptyAttributeList,
        ErrorImpl::DetachedHash,
        ErrorImpl::NestingTooDeep { limit: 4 },
    ];

    for error in errors {
        assert_eq!(Error::new(error, at(0)).category(), ErrorCategory::Syntax);
    }
}

#[test]
fn test_mixed_list_error() {
    let error = Error::new(
        ErrorImpl::MixedList {
            index: 2,
            expected: "Bool".to_string(),
            received: "String".to_string(),
        },
        at(7),
    );

    assert_eq!(error.get_error_name(), "MixedList");
    assert_eq!(error.category(), ErrorCategory::Type);
    assert_eq!(
        error.get_tip().to_string(),
        "List element 2 is String, but the list holds Bool values"
    );
}

#[test]
fn test_number_parse_error() {
    let error = Error::new(
        ErrorImpl::NumberParseError {
            token: "99999999999999999999".to_string(),
        },
        at(0),
    );

    assert_eq!(error.get_error_name(), "NumberParseError");
    assert_eq!(error.category(), ErrorCategory::NumericRange);
}

#[test]
fn test_error_display_includes_position() {
    let error = Error::new(
        ErrorImpl::TrailingInput {
            token: "abc".to_string(),
        },
        at(9),
    );

    assert_eq!(
        error.to_string(),
        "trailing input after annotation: \"abc\" at byte 9 of test.attr"
    );
}

#[test]
fn test_error_source_is_internal_error() {
    let error = Error::new(ErrorImpl::EmptyAttributeList, at(0));
    let source = std::error::Error::source(&error).map(|source| source.to_string());

    assert_eq!(source.as_deref(), Some("attribute list must not be empty"));
}
