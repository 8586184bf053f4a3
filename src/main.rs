use std::process::ExitCode;

use arith_lexer::{display_error, lexer::lexer::lex};
use tracing_subscriber::EnvFilter;

const INPUT: &str = "11 + 22 - 33";

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match lex(INPUT) {
        Ok(tokens) => {
            for token in tokens {
                println!("{}", token);
            }
            ExitCode::SUCCESS
        }
        Err(error) => {
            display_error(&error, INPUT);
            ExitCode::FAILURE
        }
    }
}
