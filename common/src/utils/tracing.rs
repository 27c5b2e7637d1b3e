use tracing_subscriber::EnvFilter;

/// Initializes the global tracing subscriber. Filtering is controlled through
/// the `RUST_LOG` env var and defaults to `info`. Repeated calls are no-ops so
/// tests can call this freely.
pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
