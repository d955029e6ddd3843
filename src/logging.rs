use tracing_subscriber::EnvFilter;

/// Install a `tracing` subscriber that writes to stderr, filtered by
/// `RUST_LOG` (default `warn`).
///
/// Safe to call more than once; if a global subscriber is already set
/// this does nothing.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
