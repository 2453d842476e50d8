//! Monkey interpreter driver.
//!
//! Glues the phases together (lex, parse, macro definition and expansion,
//! evaluation) and provides the commands behind the `monkey` binary.

pub mod commands;
mod session;

pub use session::{run_source, Outcome, Session};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Does nothing unless `RUST_LOG` is set, e.g.
/// `RUST_LOG=monkey_eval=debug` or `RUST_LOG=monkey_parse=trace`.
/// Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true).with_writer(std::io::stderr))
                .with(filter)
                .init();
        }
    });
}
