use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

/// Broad classes of failure a caller may want to tell apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// A character could not start any token.
    Lexical,
    /// The tokens do not follow the annotation grammar.
    Syntax,
    /// A list mixes elements that cannot share one variant.
    Type,
    /// A numeric literal does not fit its target type.
    NumericRange,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_internal_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn category(&self) -> ErrorCategory {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } | ErrorImpl::UnterminatedString => {
                ErrorCategory::Lexical
            }
            ErrorImpl::UnexpectedTokenDetailed { .. }
            | ErrorImpl::UnexpectedEndOfInput { .. }
            | ErrorImpl::TrailingInput { .. }
            | ErrorImpl::EmptyAttributeList
            | ErrorImpl::DetachedHash
            | ErrorImpl::NestingTooDeep { .. } => ErrorCategory::Syntax,
            ErrorImpl::MixedList { .. } | ErrorImpl::NestedCollection { .. } => {
                ErrorCategory::Type
            }
            ErrorImpl::NumberParseError { .. } => ErrorCategory::NumericRange,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnterminatedString => "UnterminatedString",
            ErrorImpl::UnexpectedTokenDetailed { .. } => "UnexpectedTokenDetailed",
            ErrorImpl::UnexpectedEndOfInput { .. } => "UnexpectedEndOfInput",
            ErrorImpl::TrailingInput { .. } => "TrailingInput",
            ErrorImpl::EmptyAttributeList => "EmptyAttributeList",
            ErrorImpl::DetachedHash => "DetachedHash",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
            ErrorImpl::MixedList { .. } => "MixedList",
            ErrorImpl::NestedCollection { .. } => "NestedCollection",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::UnterminatedString => {
                ErrorTip::Suggestion(String::from("String literal is missing its closing `\"`"))
            }
            ErrorImpl::UnexpectedTokenDetailed { token, message } => {
                ErrorTip::Suggestion(format!("Unexpected token: `{}`, {}", token, message))
            }
            ErrorImpl::UnexpectedEndOfInput { expected } => {
                ErrorTip::Suggestion(format!("Input ended early, expected {}", expected))
            }
            ErrorImpl::TrailingInput { token } => ErrorTip::Suggestion(format!(
                "Unexpected `{}` after the closing `]`, only one annotation is allowed",
                token
            )),
            ErrorImpl::EmptyAttributeList => ErrorTip::Suggestion(String::from(
                "Attribute list is empty, remove the parentheses instead",
            )),
            ErrorImpl::DetachedHash => {
                ErrorTip::Suggestion(String::from("`#` must be directly followed by `[`"))
            }
            ErrorImpl::NestingTooDeep { limit } => ErrorTip::Suggestion(format!(
                "Maps are nested more than {} levels deep",
                limit
            )),
            ErrorImpl::MixedList {
                index,
                expected,
                received,
            } => ErrorTip::Suggestion(format!(
                "List element {} is {}, but the list holds {} values",
                index, received, expected
            )),
            ErrorImpl::NestedCollection { token } => ErrorTip::Suggestion(format!(
                "`{}` starts a nested collection, list elements must be literals",
                token
            )),
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} at byte {} of {}",
            self.internal_error, self.position.0, self.position.1
        )
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.internal_error)
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("unexpected token ({message}): {token:?}")]
    UnexpectedTokenDetailed { token: String, message: String },
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEndOfInput { expected: String },
    #[error("trailing input after annotation: {token:?}")]
    TrailingInput { token: String },
    #[error("attribute list must not be empty")]
    EmptyAttributeList,
    #[error("whitespace between `#` and `[`")]
    DetachedHash,
    #[error("maps nested deeper than {limit} levels")]
    NestingTooDeep { limit: usize },
    #[error("list element {index} is {received}, expected {expected}")]
    MixedList {
        index: usize,
        expected: String,
        received: String,
    },
    #[error("nested collection in list: {token:?}")]
    NestedCollection { token: String },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
}
