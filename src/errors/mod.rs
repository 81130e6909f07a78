//! Error types and error handling for the annotation parser.
//!
//! This module defines the error types returned by lexing and parsing.
//! It includes:
//!
//! - Error structures with source position information
//! - Specific error variants for lexical, syntax, type and numeric failures
//! - Helpful error messages and suggestions

pub mod errors;

#[cfg(test)]
mod tests;
