use std::sync::Arc;

use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN,
};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

/// Called with the text a pattern matched at the cursor.
pub type RegexHandler = fn(&mut Lexer, &str) -> Result<(), Error>;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    // Every pattern is anchored so it only ever matches at the cursor.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new(r"^[\p{L}_][\p{L}\p{N}_]*").unwrap(), handler: symbol_handler },
        RegexPattern { regex: Regex::new(r"^[0-9]+(\.[0-9]*)?").unwrap(), handler: number_handler },
        RegexPattern { regex: Regex::new(r"^\s+").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new(r#"^"[^"]*""#).unwrap(), handler: string_handler },
        RegexPattern { regex: Regex::new(r"^#").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Hash, "#") },
        RegexPattern { regex: Regex::new(r"^\[").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenBracket, "[") },
        RegexPattern { regex: Regex::new(r"^\]").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseBracket, "]") },
        RegexPattern { regex: Regex::new(r"^\{").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenCurly, "{") },
        RegexPattern { regex: Regex::new(r"^\}").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseCurly, "}") },
        RegexPattern { regex: Regex::new(r"^\(").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenParen, "(") },
        RegexPattern { regex: Regex::new(r"^\)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseParen, ")") },
        RegexPattern { regex: Regex::new(r"^=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Assignment, "=") },
        RegexPattern { regex: Regex::new(r"^,").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Comma, ",") },
    ];
}

pub struct Lexer<'a> {
    tokens: Vec<Token>,
    source: &'a str,
    pos: usize,
    file: Arc<String>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str, file: Option<String>) -> Lexer<'a> {
        let file_name = Arc::new(file.unwrap_or_else(|| String::from(crate::DEFAULT_SOURCE)));

        Lexer {
            pos: 0,
            tokens: vec![],
            source,
            file: file_name,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    /// The character under the cursor, if any input is left.
    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn remainder(&self) -> &'a str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn position(&self) -> Position {
        Position(self.pos as u32, Arc::clone(&self.file))
    }

    /// Span of `len` bytes starting at the cursor.
    pub fn span_of(&self, len: usize) -> Span {
        Span {
            start: self.position(),
            end: Position((self.pos + len) as u32, Arc::clone(&self.file)),
        }
    }
}

fn number_handler(lexer: &mut Lexer, matched: &str) -> Result<(), Error> {
    let kind = if matched.contains('.') {
        TokenKind::Float
    } else {
        TokenKind::Integer
    };

    let span = lexer.span_of(matched.len());
    lexer.push(MK_TOKEN!(kind, matched.to_string(), span));
    lexer.advance_n(matched.len());
    Ok(())
}

fn skip_handler(lexer: &mut Lexer, matched: &str) -> Result<(), Error> {
    lexer.advance_n(matched.len());
    Ok(())
}

fn string_handler(lexer: &mut Lexer, matched: &str) -> Result<(), Error> {
    // Contents are taken verbatim; there are no escape sequences.
    let string_literal = &matched[1..matched.len() - 1];

    let span = lexer.span_of(matched.len());
    lexer.push(MK_TOKEN!(TokenKind::String, string_literal.to_string(), span));
    lexer.advance_n(matched.len());
    Ok(())
}

fn symbol_handler(lexer: &mut Lexer, matched: &str) -> Result<(), Error> {
    let kind = RESERVED_LOOKUP
        .get(matched)
        .copied()
        .unwrap_or(TokenKind::Identifier);

    let span = lexer.span_of(matched.len());
    lexer.push(MK_TOKEN!(kind, matched.to_string(), span));
    lexer.advance_n(matched.len());
    Ok(())
}

pub fn tokenize(source: &str, file: Option<String>) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source, file);

    while !lex.at_eof() {
        let remaining = lex.remainder();
        let matched = PATTERNS
            .iter()
            .find_map(|pattern| pattern.regex.find(remaining).map(|m| (pattern.handler, m.as_str())));

        match matched {
            Some((handler, text)) => handler(&mut lex, text)?,
            None => {
                let error = match lex.at() {
                    Some('"') => ErrorImpl::UnterminatedString,
                    other => ErrorImpl::UnrecognisedToken {
                        token: other.map(String::from).unwrap_or_default(),
                    },
                };
                return Err(Error::new(error, lex.position()));
            }
        }
    }

    let span = lex.span_of(0);
    lex.push(MK_TOKEN!(TokenKind::EOF, String::from("EOF"), span));

    tracing::trace!(file = %lex.file, tokens = lex.tokens.len(), "tokenized annotation");
    Ok(lex.tokens)
}
