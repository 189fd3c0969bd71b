//! Logging setup for the terminal front-end.
//!
//! Library crates emit `tracing` events at their seams; this module
//! installs the subscriber that renders them. The filter comes from
//! `LEXIQUEST_LOG`, falling back to `RUST_LOG`, falling back to `warn`.

use tracing_subscriber::EnvFilter;

/// Environment variable consulted first for the log filter.
pub const LOG_ENV_VAR: &str = "LEXIQUEST_LOG";

/// Installs the global tracing subscriber.
///
/// Output goes to stderr so it never interleaves with the quiz itself.
/// Calling this more than once is harmless; later calls are ignored.
pub fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
