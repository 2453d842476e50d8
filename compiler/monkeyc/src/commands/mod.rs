//! CLI commands.
//!
//! Each command has a pure part that returns text (tested directly) and a
//! thin wrapper that reads the file and prints.

mod debug;
mod repl;
mod run;

pub use debug::{lex_file, parse_file, render_parse, render_tokens};
pub use repl::{repl, PROMPT};
pub use run::run_file;

/// Read a source file, exiting with a readable message on failure.
pub(crate) fn read_file(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            let msg = match e.kind() {
                std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                std::io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading '{path}'")
                }
                std::io::ErrorKind::InvalidData => {
                    format!("'{path}' contains invalid UTF-8 data")
                }
                _ => format!("error reading '{path}': {e}"),
            };
            eprintln!("{msg}");
            std::process::exit(1);
        }
    }
}
