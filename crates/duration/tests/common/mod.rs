//! Shared helpers for integration tests.

use tracing_subscriber::EnvFilter;

/// Crate targets that receive log output by default.
const CRATE_TARGETS: &[&str] = &["tempus_duration"];

/// Installs a test subscriber once per test binary.
///
/// `RUST_LOG` overrides the default `trace` filter on the crate targets.
/// Output goes through the libtest capture, so it only shows for
/// failing tests.
pub fn init_tracing() {
    let default_filter: String = CRATE_TARGETS
        .iter()
        .map(|t| format!("{t}=trace"))
        .collect::<Vec<_>>()
        .join(",");

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}
