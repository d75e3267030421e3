//! One-time tracing subscriber for tests.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Install the test subscriber. Safe to call from every test binary and
/// from `ctor` hooks; only the first call does anything.
///
/// Level comes from `TEST_LOG`, then `RUST_LOG`, then `warn`. Output goes
/// through the test writer so it is captured per test.
///
/// ```bash
/// TEST_LOG=aboutme=debug cargo test -p aboutme
/// ```
pub fn init() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}
