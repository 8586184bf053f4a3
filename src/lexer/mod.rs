//! Lexical analysis for arithmetic input.
//!
//! This module contains the lexer that converts a string into a sequence of
//! tokens for parsing. It handles:
//!
//! - Signed decimal integers and single-character binary operators
//! - Rule priority when more than one rule matches at a position
//! - Byte spans on every token for error reporting
//! - Whitespace skipping

pub mod lexer;
pub mod tokens;
