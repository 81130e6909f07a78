use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::{ast::ast::Value, errors::errors::Error, lexer::tokens::TokenKind};

use super::{parser::Parser, values::*};

pub type ValueHandler = fn(&mut Parser) -> Result<Value, Error>;
pub type ValueLookup = HashMap<TokenKind, ValueHandler>;

lazy_static! {
    /// Which rule parses a `Value` starting with a given token.
    pub static ref VALUE_LOOKUP: ValueLookup = {
        let mut map: ValueLookup = HashMap::new();

        // Literals
        map.insert(TokenKind::String, parse_literal_value);
        map.insert(TokenKind::Integer, parse_literal_value);
        map.insert(TokenKind::Float, parse_literal_value);
        map.insert(TokenKind::True, parse_literal_value);
        map.insert(TokenKind::False, parse_literal_value);

        // Collections
        map.insert(TokenKind::OpenBracket, parse_list);
        map.insert(TokenKind::OpenCurly, parse_map);
        map
    };
}
