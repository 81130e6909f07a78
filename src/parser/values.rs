use crate::{
    ast::{
        ast::Value,
        literals::{fold_literals, ListTypeError, Literal},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    Position,
};

use super::{derive::parse_name_values, lookups::VALUE_LOOKUP, parser::Parser};

/// `String | Number | Bool | List | Map`
pub fn parse_value(parser: &mut Parser) -> Result<Value, Error> {
    let token_kind = parser.current_token_kind();

    match VALUE_LOOKUP.get(&token_kind) {
        Some(handler) => handler(parser),
        None => Err(parser.unexpected("a value")),
    }
}

pub fn parse_literal_value(parser: &mut Parser) -> Result<Value, Error> {
    Ok(parse_literal(parser)?.into())
}

/// Parses one scalar. Collections are rejected here since lists only hold scalars.
pub fn parse_literal(parser: &mut Parser) -> Result<Literal, Error> {
    let token = parser.current_token();

    let literal = match token.kind {
        TokenKind::String => Literal::String(token.value.clone()),
        TokenKind::Integer => match token.value.parse::<i64>() {
            Ok(value) => Literal::Integer(value),
            Err(_) => return Err(number_error(&token.value, token.span.start.clone())),
        },
        TokenKind::Float => match token.value.parse::<f64>() {
            Ok(value) if value.is_finite() => Literal::Float(value),
            _ => return Err(number_error(&token.value, token.span.start.clone())),
        },
        TokenKind::True => Literal::Bool(true),
        TokenKind::False => Literal::Bool(false),
        TokenKind::OpenBracket | TokenKind::OpenCurly => {
            return Err(Error::new(
                ErrorImpl::NestedCollection {
                    token: token.value.clone(),
                },
                token.span.start.clone(),
            ))
        }
        _ => return Err(parser.unexpected("a literal")),
    };

    parser.advance();
    Ok(literal)
}

fn number_error(text: &str, position: Position) -> Error {
    Error::new(
        ErrorImpl::NumberParseError {
            token: text.to_string(),
        },
        position,
    )
}

/// `'[' Value (',' Value)* ']'`
///
/// Elements are collected as literals and folded into a list variant once
/// the closing bracket has been read.
pub fn parse_list(parser: &mut Parser) -> Result<Value, Error> {
    let open = parser.expect(TokenKind::OpenBracket)?;

    let mut literals = vec![];
    let mut positions = vec![];

    loop {
        positions.push(parser.get_position());
        literals.push(parse_literal(parser)?);

        if parser.current_token_kind() != TokenKind::Comma {
            break;
        }
        parser.advance();
    }

    parser.expect(TokenKind::CloseBracket)?;

    fold_literals(literals).map_err(|error| match error {
        ListTypeError::Mixed {
            index,
            expected,
            received,
        } => Error::new(
            ErrorImpl::MixedList {
                index,
                expected: expected.to_string(),
                received: received.to_string(),
            },
            positions.get(index).cloned().unwrap_or_else(|| open.span.start.clone()),
        ),
        ListTypeError::Empty => Error::new(
            ErrorImpl::UnexpectedTokenDetailed {
                token: open.value.clone(),
                message: String::from("expected a non-empty list"),
            },
            open.span.start.clone(),
        ),
    })
}

/// `'{' (NameValue (',' NameValue)*)? '}'`
pub fn parse_map(parser: &mut Parser) -> Result<Value, Error> {
    parser.enter_nested()?;
    parser.expect(TokenKind::OpenCurly)?;

    let entries = if parser.current_token_kind() == TokenKind::CloseCurly {
        vec![]
    } else {
        parse_name_values(parser)?
    };

    parser.expect(TokenKind::CloseCurly)?;
    parser.exit_nested();

    Ok(Value::Map(entries))
}
