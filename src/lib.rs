#![allow(clippy::module_inception)]

use std::sync::Arc;

use crate::{
    ast::ast::Derive,
    errors::errors::{Error, ErrorTip},
    lexer::lexer::tokenize,
    parser::parser::parse,
};

pub mod ast;
pub mod config;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

pub use config::ParserConfig;

extern crate regex;

/// Label used for positions when the caller does not name its input.
pub const DEFAULT_SOURCE: &str = "<input>";

/// A byte offset into the parsed input plus the label of that input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position(pub u32, pub Arc<String>);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Parses one annotation such as `#[ident(k=[1, 2], m={a="b"})]`.
///
/// The whole input must be a single annotation; anything after the closing
/// `]` other than whitespace is rejected.
pub fn match_derive(input: &str) -> Result<Derive, Error> {
    match_derive_with(input, &ParserConfig::default())
}

/// Same as [`match_derive`] with explicit parser limits.
pub fn match_derive_with(input: &str, config: &ParserConfig) -> Result<Derive, Error> {
    let file = Arc::new(String::from(DEFAULT_SOURCE));
    let tokens = tokenize(input, Some(DEFAULT_SOURCE.to_string()))?;
    parse(tokens, file, config)
}

/// Returns the 1-based line number, the line text and the column of `position`.
///
/// Offsets past the end of `source` are clamped to the last character.
pub fn get_line_at_position(source: &str, position: u32) -> (usize, String, usize) {
    let pos = (position as usize).min(source.len());

    let mut start = 0;
    let mut line_number = 1;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            return (line_number, line.to_string(), column_of(line, pos - start));
        }

        start = end;
        line_number += 1;
    }

    // End of input: point just past the last line
    let last = source.rsplit('\n').next().unwrap_or("");
    let line_number = source.matches('\n').count() + 1;
    (line_number, last.to_string(), last.chars().count())
}

fn column_of(line: &str, byte_offset: usize) -> usize {
    line.char_indices()
        .take_while(|(index, _)| *index < byte_offset)
        .count()
}

/// Renders `error` against the text it was raised for.
///
/// ```text
/// Error: TrailingInput (Unexpected `abc` after the closing `]`, ...)
/// -> <input>
///   |
/// 1 | #[ident] abc
///   | ---------^
/// ```
pub fn display_error(error: &Error, source: &str) -> String {
    let position = error.get_position();
    let (line, line_text, line_pos) = get_line_at_position(source, position.0);

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!(
            "Error: {} ({})\n",
            error.get_error_name(),
            error.get_tip()
        ));
    }
    out.push_str(&format!("-> {}\n", position.1));
    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;

    out.push_str(&format!("{:>padding$} {:->arrows$}", "|", "^"));
    out
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}
