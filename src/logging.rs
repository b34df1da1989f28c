//! Logging configuration
//!
//! Diagnostics go through `tracing` and are written to stderr so that stdout
//! only ever carries the generated compose file (or JSON events).

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Verbosity;

/// Filter directive for a `-v` count on top of the configured verbosity
///
/// Any `-v` flag wins over the config; without flags the config decides.
pub fn filter_directive(verbose_flags: u8, configured: Verbosity) -> &'static str {
    match verbose_flags {
        0 => match configured {
            Verbosity::Quiet => "error",
            Verbosity::Normal => "warn",
            Verbosity::Verbose => "info",
            Verbosity::Debug => "debug",
        },
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Initialize logging; `RUST_LOG` takes precedence when set
///
/// Returns false when a global subscriber was already installed.
pub fn init_logging(verbose_flags: u8, configured: Verbosity) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(verbose_flags, configured)));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init()
        .is_ok()
}
