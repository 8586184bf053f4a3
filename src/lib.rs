#![allow(clippy::module_inception)]

use crate::errors::errors::{Error, ErrorTip};

pub mod errors;
pub mod lexer;
pub mod macros;

/// Byte offset into the lexed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Returns the 1-based line number, the line text and the byte offset of
/// `position` within that line, or `None` when `position` is past the end of
/// `source`.
pub fn get_line_at_position(source: &str, position: usize) -> Option<(usize, String, usize)> {
    if position > source.len() {
        return None;
    }

    let mut start = 0;
    let mut line_number = 1;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&position) {
            return Some((line_number, line.to_string(), position - start));
        }

        start = end;
        line_number += 1;
    }

    // End of input: point just past the last line.
    let last = source.rsplit('\n').next().unwrap_or_default();
    let line_number = source.matches('\n').count() + 1;
    Some((line_number, last.to_string(), last.len()))
}

/// Renders `error` against the input it was raised on:
///
/// ```text
/// Error: UnrecognizedInput (Unrecognized character `&`, ...)
///   |
/// 1 | 5 & 3
///   | --^
/// ```
pub fn format_error(error: &Error, source: &str) -> String {
    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!(
            "Error: {} ({})\n",
            error.get_error_name(),
            error.get_tip()
        ));
    }

    let Some((line, line_text, line_pos)) = get_line_at_position(source, error.get_position().0)
    else {
        out.push_str(&format!("-> offset {}\n", error.get_position().0));
        return out;
    };

    let line_str = line.to_string();
    let padding = line_str.len() + 2;

    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    out.push_str(&format!("{} | {}\n", line_str, line_text_removed.trim_end()));

    let column = line_text[..line_pos].chars().count();
    let arrows = column.saturating_sub(removed_whitespace) + 1;

    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));
    out
}

pub fn display_error(error: &Error, source: &str) {
    eprint!("{}", format_error(error, source));
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let start = string
        .chars()
        .take_while(|c| *c == ' ' || *c == '\t')
        .count();

    (string.chars().skip(start).collect(), start)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tracing_subscriber::{EnvFilter, FmtSubscriber};

    use crate::{
        errors::errors::{Error, ErrorImpl},
        Position,
    };

    #[ctor::ctor]
    fn init_tests() {
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
    }

    #[test]
    fn test_get_line_at_position() {
        let source = "Hello, world!\n1 + 2\n\n   3 & 4\n";

        let (line_number, line, line_pos) = super::get_line_at_position(source, 10).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "Hello, world!\n");
        assert_eq!(line_pos, 10);

        let (line_number, line, line_pos) = super::get_line_at_position(source, 26).unwrap();
        assert_eq!(line_number, 4);
        assert_eq!(line, "   3 & 4\n");
        assert_eq!(line_pos, 5);
    }

    #[test]
    fn test_get_line_at_end_of_input() {
        let (line_number, line, line_pos) = super::get_line_at_position("1 +\n2", 5).unwrap();
        assert_eq!(line_number, 2);
        assert_eq!(line, "2");
        assert_eq!(line_pos, 1);

        assert!(super::get_line_at_position("1 + 2", 6).is_none());
    }

    #[test]
    fn test_format_error_points_at_offset() {
        let error = Error::new(ErrorImpl::UnrecognizedInput { token: '&' }, Position(2));
        let rendered = super::format_error(&error, "5 & 3");

        let lines: Vec<&str> = rendered.lines().collect();
        assert!(lines[0].starts_with("Error: UnrecognizedInput (Unrecognized character `&`"));
        assert_eq!(lines[1], "  |");
        assert_eq!(lines[2], "1 | 5 & 3");
        assert_eq!(lines[3], "  | --^");
    }

    #[test]
    fn test_format_error_skips_leading_whitespace() {
        let error = Error::new(ErrorImpl::UnrecognizedInput { token: 'x' }, Position(8));
        let rendered = super::format_error(&error, "1\n    2 x");

        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[2], "2 | 2 x");
        assert_eq!(lines[3], "  | --^");
    }

    #[test]
    fn test_format_error_without_tip() {
        let error = Error::new(
            ErrorImpl::UnknownTokenType {
                name: "IDENT".to_string(),
            },
            Position(0),
        );
        let rendered = super::format_error(&error, "");

        assert_eq!(rendered.lines().next(), Some("Error: UnknownTokenType"));
    }
}
