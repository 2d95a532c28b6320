//! Logging init: structured `tracing` output to stderr.
//!
//! Stdout is reserved for the split report and `list` output.

use tracing_subscriber::EnvFilter;

/// Default directives for a given `-v` count; `RUST_LOG` takes precedence.
fn default_directives(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn,history_splitter=info",
        1 => "warn,history_splitter=debug",
        _ => "debug,history_splitter=trace",
    }
}

/// Initialize logging to stderr. Call once, before any work is done.
pub fn init_logging(verbosity: u8) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .init();
}
