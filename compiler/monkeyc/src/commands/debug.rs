//! Debug commands: `lex` and `parse` for inspecting the front end.

use std::fmt::Write as _;

use super::read_file;

/// One line per token: kind, literal, span.
pub fn render_tokens(source: &str) -> String {
    let tokens = monkey_lexer::lex(source);
    let mut out = String::new();
    for token in tokens.iter() {
        let _ = writeln!(out, "{:?} {:?} @ {}", token.kind, token.literal, token.span);
    }
    out
}

/// Canonical rendering of each statement, then the diagnostics.
pub fn render_parse(source: &str) -> String {
    let output = monkey_parse::parse(&monkey_lexer::lex(source));
    let mut out = String::new();
    for stmt in &output.program.statements {
        let _ = writeln!(out, "{stmt}");
    }
    if output.has_errors() {
        let _ = writeln!(out, "errors:");
        for error in &output.errors {
            let _ = writeln!(out, "  {}: {error}", error.span);
        }
    }
    out
}

/// Lex a file and print the token stream.
pub fn lex_file(path: &str) {
    let content = read_file(path);
    print!("{}", render_tokens(&content));
}

/// Parse a file and print the statements and any diagnostics.
pub fn parse_file(path: &str) {
    let content = read_file(path);
    print!("{}", render_parse(&content));
}
