//! Error types for the lexer.
//!
//! - Error structures carrying the byte offset of the failure
//! - Error names and suggestions for display

pub mod errors;
