//! Test logging for the scorebook crates.
//!
//! Shared by the backend's unit tests and its integration test binaries.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Quiet by default; the pool and ORM only speak up on errors.
pub const DEFAULT_TEST_FILTER: &str = "warn,sqlx=error,sea_orm=error";

/// Install the test subscriber once per process.
///
/// The filter comes from `TEST_LOG`, then `RUST_LOG`, then
/// [`DEFAULT_TEST_FILTER`]. `TEST_LOG_FORMAT=json` switches to the same JSON
/// lines the service emits, which helps when checking structured fields:
///
/// ```bash
/// TEST_LOG=scorebook=debug TEST_LOG_FORMAT=json cargo test -p scorebook
/// ```
pub fn init() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_TEST_FILTER));

        let builder = fmt().with_env_filter(filter).with_test_writer();
        // try_init: another subscriber may already be installed
        let _ = if wants_json() {
            builder.json().try_init()
        } else {
            builder.without_time().try_init()
        };
    });
}

fn wants_json() -> bool {
    std::env::var("TEST_LOG_FORMAT").is_ok_and(|f| f.eq_ignore_ascii_case("json"))
}
