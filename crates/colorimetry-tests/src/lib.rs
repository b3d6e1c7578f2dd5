//! Integration test crate for the colorimetry workspace.
//!
//! This crate exists solely to hold cross-crate integration tests: spectra
//! flowing through observers, illuminants and color spaces end to end.

#[cfg(test)]
mod spectral;

#[cfg(test)]
mod color_space;

#[cfg(test)]
mod color_checker;

/// Install a test-writer subscriber once per test binary. Filter with
/// `RUST_LOG`, e.g. `RUST_LOG=colorimetry=trace`.
#[cfg(test)]
pub(crate) fn init_tracing() {
    use std::sync::Once;
    use tracing_subscriber::{EnvFilter, FmtSubscriber};

    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .finish();
        // another harness may already own the global default
        let _ = tracing::subscriber::set_global_default(subscriber);
    });
}
