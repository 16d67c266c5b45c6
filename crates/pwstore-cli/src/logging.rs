//! Tracing subscriber setup.
//!
//! Logs go to stderr so stdout stays clean for generated passwords and
//! status output. `PWSTORE_LOG` takes a full `EnvFilter` directive and
//! overrides the `-v` count.

use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

use crate::constants::LOG_ENV;

/// Default filter directive for a `-v` count.
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Install the global subscriber. Safe to call more than once.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}
