//! Logging setup shared by binaries and tests

use std::sync::Once;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

static INIT: Once = Once::new();

/// Initializes the global tracing subscriber
///
/// The filter is taken from `RUST_LOG` when set, otherwise from the
/// `LOGLEVEL` variable (`DEBUG`, `INFO`, ...), defaulting to `info`.
/// Safe to call more than once; only the first call installs the
/// subscriber, so tests can all invoke it.
pub fn setup_logger() {
    INIT.call_once(|| {
        let level = std::env::var("LOGLEVEL")
            .map(|v| v.to_ascii_lowercase())
            .unwrap_or_else(|_| "info".to_string());

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_thread_ids(false)
                    .compact(),
            )
            .init();
    });
}
