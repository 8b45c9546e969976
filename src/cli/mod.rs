pub mod commands;
pub mod handlers;
pub mod output;

use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

/// Log to stderr. `RUST_LOG` wins over the default level.
pub fn init_tracing(quiet: bool) {
    let default_level = if quiet { "warn" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .try_init();
}
