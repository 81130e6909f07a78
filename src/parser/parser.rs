//! Parser state and the parsing entry point.
//!
//! The parser walks the token stream with one token of lookahead. Each
//! grammar rule is one function in [`super::derive`] or [`super::values`];
//! `Value` picks its rule through the lookup table in [`super::lookups`].

use std::sync::Arc;

use crate::{
    ast::ast::Derive,
    config::ParserConfig,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position, Span,
};

use super::derive::parse_derive;

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// The list of tokens to parse, always terminated by an EOF token
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// Label of the input being parsed
    file: Arc<String>,
    /// Number of maps currently open
    depth: usize,
    max_depth: usize,
}

impl Parser {
    /// Creates a new Parser instance.
    ///
    /// An EOF token is appended if `tokens` does not already end with one.
    pub fn new(mut tokens: Vec<Token>, file: Arc<String>, config: &ParserConfig) -> Self {
        if tokens.last().map(|token| token.kind) != Some(TokenKind::EOF) {
            let end = tokens
                .last()
                .map(|token| token.span.end.clone())
                .unwrap_or_else(|| Position(0, Arc::clone(&file)));
            tokens.push(Token {
                kind: TokenKind::EOF,
                value: String::from("EOF"),
                span: Span {
                    start: end.clone(),
                    end,
                },
            });
        }

        Parser {
            tokens,
            pos: 0,
            file,
            depth: 0,
            max_depth: config.max_depth,
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.tokens[self.pos]
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Advances to the next token and returns the previous one.
    ///
    /// The cursor never moves past the EOF token.
    pub fn advance(&mut self) -> Token {
        let token = self.tokens[self.pos].clone();
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        token
    }

    /// Builds the error for the current token when `expected` was wanted.
    pub fn unexpected(&self, expected: &str) -> Error {
        let token = self.current_token();
        let error = if token.kind == TokenKind::EOF {
            ErrorImpl::UnexpectedEndOfInput {
                expected: expected.to_string(),
            }
        } else {
            ErrorImpl::UnexpectedTokenDetailed {
                token: token.value.clone(),
                message: format!("expected {}", expected),
            }
        };

        Error::new(error, token.span.start.clone())
    }

    /// Expects a token of the specified kind, with optional custom error.
    pub fn expect_error(
        &mut self,
        expected_kind: TokenKind,
        error: Option<Error>,
    ) -> Result<Token, Error> {
        if self.current_token_kind() != expected_kind {
            match error {
                Some(error) => Err(error),
                None => Err(self.unexpected(expected_kind.describe())),
            }
        } else {
            Ok(self.advance())
        }
    }

    /// Expects a token of the specified kind with default error message.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        self.expect_error(expected_kind, None)
    }

    /// Records that a map was opened at the current token.
    pub fn enter_nested(&mut self) -> Result<(), Error> {
        if self.depth >= self.max_depth {
            return Err(Error::new(
                ErrorImpl::NestingTooDeep {
                    limit: self.max_depth,
                },
                self.current_token().span.start.clone(),
            ));
        }
        self.depth += 1;
        Ok(())
    }

    pub fn exit_nested(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Returns the current position in the input.
    pub fn get_position(&self) -> Position {
        self.current_token().span.start.clone()
    }

    pub fn file(&self) -> &Arc<String> {
        &self.file
    }
}

/// Parses a stream of tokens into a [`Derive`].
///
/// Exactly one annotation must make up the whole stream; any token left
/// before EOF is reported as trailing input.
pub fn parse(tokens: Vec<Token>, file: Arc<String>, config: &ParserConfig) -> Result<Derive, Error> {
    let mut parser = Parser::new(tokens, file, config);

    let derive = parse_derive(&mut parser)?;

    if parser.current_token_kind() != TokenKind::EOF {
        let token = parser.current_token();
        return Err(Error::new(
            ErrorImpl::TrailingInput {
                token: token.value.clone(),
            },
            token.span.start.clone(),
        ));
    }

    tracing::debug!(
        file = %parser.file(),
        identity = %derive.identity,
        attrs = derive.attrs.len(),
        "parsed annotation"
    );
    Ok(derive)
}
