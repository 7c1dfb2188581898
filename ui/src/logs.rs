//! Logging to the javascript console.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use tracing_web::MakeWebConsoleWriter;

/// Install a console subscriber filtered by `directives`, e.g.
/// `"error,call_state=debug"`.
///
/// Returns false if a global subscriber was already installed.
pub fn init_logging(directives: &str) -> bool {
    // No clock in the browser, and the console shows levels itself.
    let console = fmt::layer()
        .without_time()
        .with_level(false)
        .with_ansi(false)
        .with_line_number(true)
        .with_writer(MakeWebConsoleWriter::new().with_pretty_level());

    let installed = tracing_subscriber::registry()
        .with(EnvFilter::new(directives))
        .with(console)
        .try_init()
        .is_ok();

    if installed {
        tracing::info!(directives, "Console logging installed");
    }
    installed
}
