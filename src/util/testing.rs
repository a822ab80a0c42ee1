//! Shared test setup: once-guarded tracing subscriber.

use std::sync::Once;

use tracing::info;
use tracing_subscriber::{fmt, fmt::format::FmtSpan, EnvFilter};

static TEST_SETUP: Once = Once::new();

/// Initializes a global tracing subscriber for tests. Safe to call from
/// every test; only the first call installs the subscriber.
pub fn init_test_setup() {
    TEST_SETUP.call_once(|| {
        let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        let _ = fmt()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_span_events(FmtSpan::CLOSE)
            .with_env_filter(env_filter)
            .try_init();

        info!("Test setup complete");
    });
}
