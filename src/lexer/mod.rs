//! Lexical analysis module for annotations.
//!
//! This module contains the lexer (tokenizer) that converts annotation text
//! into a stream of tokens for parsing. It handles:
//!
//! - Tokenization using anchored regex patterns
//! - Recognition of boolean keywords, identifiers, literals, and punctuation
//! - Token position tracking for error reporting
//! - Whitespace handling

pub mod lexer;
pub mod tokens;
