//! Utility macros for the lexer.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Creates a rule handler that emits one token
//!   covering the matched text

/// Creates a Token instance.
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenType::Number, "42".to_string(), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $span:expr) => {
        Token {
            kind: $kind,
            value: $value,
            span: $span,
        }
    };
}

/// Creates a handler that pushes a token of the given type for the matched
/// prefix and advances the lexer past it.
///
/// Expands to a plain function pointer, so it can live in the static rule
/// table.
///
/// # Example
///
/// ```ignore
/// RulePattern {
///     name: "BINARYOP",
///     matcher: match_binary_op,
///     handler: MK_DEFAULT_HANDLER!(TokenType::BinaryOp),
/// }
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr) => {{
        fn handler(lexer: &mut Lexer<'_>, len: usize) {
            let start = lexer.pos;
            let value = String::from(&lexer.remainder()[..len]);

            lexer.push(MK_TOKEN!(
                $kind,
                value,
                Span {
                    start: Position(start),
                    end: Position(start + len),
                }
            ));
            lexer.advance_n(len);
        }

        handler as RuleHandler
    }};
}
