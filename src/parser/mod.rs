//! Parser module for building the annotation AST.
//!
//! This module contains the recursive-descent parser that turns a stream of
//! tokens into a [`Derive`](crate::ast::ast::Derive). It handles:
//!
//! - The `#[identity(...)]` frame and its attribute section
//! - `name = value` entries
//! - Literals, homogeneous lists and nested maps
//!
//! A value is parsed by looking up the rule for its first token in a
//! read-only table shared by every parse.

pub mod derive;
pub mod lookups;
pub mod parser;
pub mod values;
