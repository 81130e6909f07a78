use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("true", TokenKind::True);
        map.insert("false", TokenKind::False);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Integer,
    Float,
    String,
    Identifier,

    Hash,

    OpenBracket,
    CloseBracket,
    OpenCurly,
    CloseCurly,
    OpenParen,
    CloseParen,

    Assignment, // =
    Comma,

    // Reserved
    True,
    False,
}

impl TokenKind {
    /// How the token kind reads in "expected ..." messages.
    pub fn describe(&self) -> &'static str {
        match self {
            TokenKind::EOF => "end of input",
            TokenKind::Integer => "an integer",
            TokenKind::Float => "a float",
            TokenKind::String => "a string",
            TokenKind::Identifier => "an identifier",
            TokenKind::Hash => "`#`",
            TokenKind::OpenBracket => "`[`",
            TokenKind::CloseBracket => "`]`",
            TokenKind::OpenCurly => "`{`",
            TokenKind::CloseCurly => "`}`",
            TokenKind::OpenParen => "`(`",
            TokenKind::CloseParen => "`)`",
            TokenKind::Assignment => "`=`",
            TokenKind::Comma => "`,`",
            TokenKind::True | TokenKind::False => "a boolean",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token {{\nkind: {},\nvalue: {}}}", self.kind, self.value)
    }
}

impl Token {
    fn is_one_of_many(&self, tokens: &[TokenKind]) -> bool {
        tokens.contains(&self.kind)
    }

    /// Literal tokens carry their text; punctuation is fully described by its kind.
    pub fn has_payload(&self) -> bool {
        self.is_one_of_many(&[
            TokenKind::String,
            TokenKind::Identifier,
            TokenKind::Integer,
            TokenKind::Float,
        ])
    }

    pub fn debug(&self) -> String {
        if self.has_payload() {
            format!("{} ({})", self.kind, self.value)
        } else {
            format!("{} ()", self.kind)
        }
    }
}
