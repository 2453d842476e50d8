//! `monkey run <file>`.

use std::process::ExitCode;

use super::read_file;
use crate::session::{Outcome, Session};

/// Run a whole file as one program.
///
/// `puts` writes to stdout. Parse errors, macro errors and an `Error`
/// result go to stderr with a failing exit code; a successful result is
/// not printed.
pub fn run_file(path: &str) -> ExitCode {
    let content = read_file(path);
    let mut session = Session::new();
    let outcome = session.run(&content);
    if !outcome.is_failure() {
        return ExitCode::SUCCESS;
    }
    if let Outcome::ParseErrors(_) = outcome {
        eprintln!("{path}: parse errors:");
    }
    if let Some(text) = outcome.render() {
        eprintln!("{text}");
    }
    ExitCode::FAILURE
}
