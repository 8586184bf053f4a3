use lazy_static::lazy_static;
use tracing::{debug, instrument, trace};

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN,
};

use super::tokens::{match_binary_op, match_number, match_whitespace, Token, TokenType};

pub type RuleMatcher = fn(&str) -> Option<usize>;
pub type RuleHandler = for<'a, 'b> fn(&'a mut Lexer<'b>, usize);

#[derive(Clone)]
pub struct RulePattern {
    pub name: &'static str,
    matcher: RuleMatcher,
    handler: RuleHandler,
}

lazy_static! {
    /// Rules in priority order. The first rule that matches at the cursor wins.
    pub static ref RULES: Vec<RulePattern> = vec![
        RulePattern { name: "NUMBER", matcher: match_number, handler: MK_DEFAULT_HANDLER!(TokenType::Number) },
        RulePattern { name: "BINARYOP", matcher: match_binary_op, handler: MK_DEFAULT_HANDLER!(TokenType::BinaryOp) },
        RulePattern { name: "WHITESPACE", matcher: match_whitespace, handler: skip_handler },
    ];
}

#[derive(Clone)]
pub struct Lexer<'a> {
    tokens: Vec<Token>,
    source: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Lexer<'a> {
        Lexer {
            tokens: vec![],
            source,
            pos: 0,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        trace!(kind = %token.kind, value = %token.value, start = token.span.start.0, "token");
        self.tokens.push(token);
    }

    pub fn at(&self) -> char {
        self.remainder().chars().next().unwrap_or_default()
    }

    pub fn remainder(&self) -> &'a str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }
}

fn skip_handler(lexer: &mut Lexer<'_>, len: usize) {
    lexer.advance_n(len);
}

/// Splits `source` into number and operator tokens, dropping whitespace.
///
/// Fails on the first character no rule accepts; nothing is returned for the
/// part of the input that was already scanned.
#[instrument(level = "debug", skip(source), fields(len = source.len()))]
pub fn lex(source: &str) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source);

    while !lex.at_eof() {
        let remaining = lex.remainder();
        let matched = RULES
            .iter()
            .find_map(|pattern| (pattern.matcher)(remaining).map(|len| (pattern, len)));

        match matched {
            Some((pattern, len)) => {
                trace!(rule = pattern.name, pos = lex.pos, len, "matched");
                (pattern.handler)(&mut lex, len);
            }
            None => {
                let token = lex.at();
                debug!(pos = lex.pos, ?token, "no rule matches");
                return Err(Error::new(
                    ErrorImpl::UnrecognizedInput { token },
                    Position(lex.pos),
                ));
            }
        }
    }

    debug!(count = lex.tokens.len(), "tokenized");
    Ok(lex.tokens)
}
