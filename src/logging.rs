use tracing_subscriber::{fmt, EnvFilter};

/// Initialize the tracing subscriber.
///
/// Diagnostics go to stderr only — stdout carries protocol responses and
/// must never see a log line. Filtering via `RUST_LOG`, defaulting to `info`.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
