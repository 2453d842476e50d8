//! Read-eval-print loop.

use std::io::{self, BufRead, Write};

use crate::session::Session;

pub const PROMPT: &str = ">> ";

/// Read lines from `input` until end of input, running each in `session`
/// and writing its result to `output`.
///
/// `puts` output goes to the session's print handler, not to `output`.
pub fn repl<R: BufRead, W: Write>(input: R, mut output: W, session: &mut Session) -> io::Result<()> {
    let mut lines = input.lines();
    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;
        let Some(line) = lines.next() else {
            return Ok(());
        };
        if let Some(text) = session.run(&line?).render() {
            writeln!(output, "{text}")?;
        }
    }
}
