use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display, str::FromStr};

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, Span,
};

lazy_static! {
    pub static ref TYPE_LOOKUP: HashMap<&'static str, TokenType> = {
        let mut map = HashMap::new();
        map.insert("NUMBER", TokenType::Number);
        map.insert("BINARYOP", TokenType::BinaryOp);
        map
    };
}

/// Characters accepted by the binary operator rule. The pipe is part of the
/// set on purpose.
pub const BINARY_OPERATORS: [u8; 5] = [b'*', b'|', b'/', b'+', b'-'];

/// Characters skipped between tokens.
pub const WHITESPACE: [u8; 5] = [b' ', b'\t', 0x0C, b'\r', b'\n'];

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenType {
    Number,
    BinaryOp,
}

impl TokenType {
    pub fn name(&self) -> &'static str {
        match self {
            TokenType::Number => "NUMBER",
            TokenType::BinaryOp => "BINARYOP",
        }
    }

    /// Length in bytes of the longest prefix of `input` this type accepts.
    pub fn match_len(&self, input: &str) -> Option<usize> {
        match self {
            TokenType::Number => match_number(input),
            TokenType::BinaryOp => match_binary_op(input),
        }
    }
}

impl Display for TokenType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for TokenType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TYPE_LOOKUP.get(s).copied().ok_or_else(|| {
            Error::new(
                ErrorImpl::UnknownTokenType {
                    name: s.to_string(),
                },
                Position(0),
            )
        })
    }
}

// -?[0-9]+
pub fn match_number(input: &str) -> Option<usize> {
    let bytes = input.as_bytes();
    let sign = usize::from(bytes.first() == Some(&b'-'));
    let digits = bytes[sign..]
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .count();

    if digits == 0 {
        None
    } else {
        Some(sign + digits)
    }
}

// [*|/+-]
pub fn match_binary_op(input: &str) -> Option<usize> {
    match input.as_bytes().first() {
        Some(b) if BINARY_OPERATORS.contains(b) => Some(1),
        _ => None,
    }
}

// [ \t\f\r\n]+
pub fn match_whitespace(input: &str) -> Option<usize> {
    let run = input
        .as_bytes()
        .iter()
        .take_while(|b| WHITESPACE.contains(b))
        .count();

    if run == 0 {
        None
    } else {
        Some(run)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenType,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({} {})", self.kind, self.value)
    }
}
