//! Observability setup for applications built on the framework.

/// Initializes the tracing/logging infrastructure.
///
/// Structured logging via the `tracing` crate with environment-based
/// filtering: set `RUST_LOG` to control verbosity (`info` for lifecycle and
/// mutations, `debug` for full request flows).
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}
