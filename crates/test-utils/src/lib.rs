pub mod builders;
pub mod capture;
pub mod recording_runner;

use std::sync::Once;
use std::time::Duration;

use tracing_subscriber::{fmt, EnvFilter};

pub use builders::SettingsBuilder;
pub use capture::{CapturedEvent, EventCapture};
pub use recording_runner::{RecordingRunner, RECORDED_INVOCATION};

static INIT: Once = Once::new();

/// Per-test ceiling for anything that waits on a child process or a
/// background state write.
pub const TEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Route scrapeops logs into the test harness output.
///
/// Output is shown only for failing tests (or with `-- --nocapture`). The
/// filter comes from `RUST_LOG`, e.g. `RUST_LOG=scrapeops=debug`, and
/// defaults to `info`. Tests that assert on log lines use [`EventCapture`]
/// instead.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .init();
    });
}

/// Await `f`, failing the test if it takes longer than [`TEST_TIMEOUT`].
pub async fn with_timeout<F, T>(f: F) -> T
where
    F: std::future::Future<Output = T>,
{
    match tokio::time::timeout(TEST_TIMEOUT, f).await {
        Ok(value) => value,
        Err(_) => panic!("scrapeops test did not settle within {TEST_TIMEOUT:?}"),
    }
}
