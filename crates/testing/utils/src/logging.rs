use tracing_subscriber::{EnvFilter, fmt};

/// Installs a `RUST_LOG`-driven subscriber writing through the test
/// harness. Safe to call from every test.
pub fn init() {
    let _ = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
