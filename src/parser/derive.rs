use crate::{
    ast::ast::{Derive, NameValue},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{parser::Parser, values::parse_value};

/// `'#' '[' Identifier AttrSection? ']'`
pub fn parse_derive(parser: &mut Parser) -> Result<Derive, Error> {
    let hash = parser.expect(TokenKind::Hash)?;
    let open = parser.expect(TokenKind::OpenBracket)?;

    if open.span.start != hash.span.end {
        return Err(Error::new(ErrorImpl::DetachedHash, hash.span.end));
    }

    let identity = parser.expect(TokenKind::Identifier)?.value;

    let attrs = if parser.current_token_kind() == TokenKind::OpenParen {
        parse_attr_section(parser)?
    } else {
        vec![]
    };

    parser.expect(TokenKind::CloseBracket)?;

    Ok(Derive { identity, attrs })
}

/// `'(' NameValue (',' NameValue)* ')'`
pub fn parse_attr_section(parser: &mut Parser) -> Result<Vec<NameValue>, Error> {
    parser.expect(TokenKind::OpenParen)?;

    if parser.current_token_kind() == TokenKind::CloseParen {
        return Err(Error::new(
            ErrorImpl::EmptyAttributeList,
            parser.get_position(),
        ));
    }

    let attrs = parse_name_values(parser)?;
    parser.expect(TokenKind::CloseParen)?;

    Ok(attrs)
}

/// `NameValue (',' NameValue)*`
///
/// A comma must be followed by another entry.
pub fn parse_name_values(parser: &mut Parser) -> Result<Vec<NameValue>, Error> {
    let mut entries = vec![parse_name_value(parser)?];

    while parser.current_token_kind() == TokenKind::Comma {
        parser.advance();
        entries.push(parse_name_value(parser)?);
    }

    Ok(entries)
}

/// `Identifier '=' Value`
pub fn parse_name_value(parser: &mut Parser) -> Result<NameValue, Error> {
    let name = parser.expect(TokenKind::Identifier)?.value;
    parser.expect(TokenKind::Assignment)?;
    let value = parse_value(parser)?;

    Ok(NameValue { name, value })
}
