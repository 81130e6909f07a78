//! Scalar literals and the folding of list elements into one list variant.
//!
//! List elements are parsed into [`Literal`]s first; the list's [`Value`]
//! variant is decided by [`fold_literals`] once every element is known.

use std::fmt::{self, Display};

use thiserror::Error;

use super::ast::Value;

#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralKind {
    String,
    Integer,
    Float,
    Bool,
}

impl Display for LiteralKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Kinds that may share a list. Integer and Float are one family.
#[derive(PartialEq, Eq)]
enum Family {
    String,
    Numeric,
    Bool,
}

impl LiteralKind {
    fn family(self) -> Family {
        match self {
            LiteralKind::String => Family::String,
            LiteralKind::Integer | LiteralKind::Float => Family::Numeric,
            LiteralKind::Bool => Family::Bool,
        }
    }
}

impl Literal {
    pub fn kind(&self) -> LiteralKind {
        match self {
            Literal::String(_) => LiteralKind::String,
            Literal::Integer(_) => LiteralKind::Integer,
            Literal::Float(_) => LiteralKind::Float,
            Literal::Bool(_) => LiteralKind::Bool,
        }
    }

    /// Numeric value as a float; integers are widened.
    pub fn widened(&self) -> Option<f64> {
        match self {
            Literal::Integer(value) => Some(*value as f64),
            Literal::Float(value) => Some(*value),
            _ => None,
        }
    }

    fn into_string(self) -> Option<String> {
        match self {
            Literal::String(value) => Some(value),
            _ => None,
        }
    }

    fn as_integer(&self) -> Option<i64> {
        match self {
            Literal::Integer(value) => Some(*value),
            _ => None,
        }
    }

    fn as_bool(&self) -> Option<bool> {
        match self {
            Literal::Bool(value) => Some(*value),
            _ => None,
        }
    }
}

impl From<Literal> for Value {
    fn from(literal: Literal) -> Self {
        match literal {
            Literal::String(value) => Value::String(value),
            Literal::Integer(value) => Value::Integer(value),
            Literal::Float(value) => Value::Float(value),
            Literal::Bool(value) => Value::Bool(value),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ListTypeError {
    #[error("list has no elements")]
    Empty,
    #[error("element {index} is {received}, expected {expected}")]
    Mixed {
        index: usize,
        expected: LiteralKind,
        received: LiteralKind,
    },
}

/// Resolves parsed list elements into a homogeneous list value.
///
/// Strings, booleans and numbers cannot be mixed. A list of numbers is an
/// `IntegerList` unless any element was written as a float, in which case
/// every element is widened and the result is a `FloatList`.
pub fn fold_literals(literals: Vec<Literal>) -> Result<Value, ListTypeError> {
    let expected = literals.first().ok_or(ListTypeError::Empty)?.kind();

    let mut has_float = false;
    for (index, literal) in literals.iter().enumerate() {
        let received = literal.kind();
        if received.family() != expected.family() {
            return Err(ListTypeError::Mixed {
                index,
                expected,
                received,
            });
        }
        has_float |= received == LiteralKind::Float;
    }

    // Every element is in `expected`'s family, so the filters below keep all of them.
    let value = match expected.family() {
        Family::String => {
            Value::StringList(literals.into_iter().filter_map(Literal::into_string).collect())
        }
        Family::Bool => Value::BoolList(literals.iter().filter_map(Literal::as_bool).collect()),
        Family::Numeric if has_float => {
            Value::FloatList(literals.iter().filter_map(Literal::widened).collect())
        }
        Family::Numeric => {
            Value::IntegerList(literals.iter().filter_map(Literal::as_integer).collect())
        }
    };

    Ok(value)
}
