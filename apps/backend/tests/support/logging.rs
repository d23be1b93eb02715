//! Logging for integration test binaries.
//!
//! Same initializer as the crate's unit tests; level precedence is
//! `TEST_LOG`, then `RUST_LOG`, then a quiet default.
//!
//! ```bash
//! TEST_LOG=scorebook=debug cargo test --test ledger_tests
//! ```

/// Runs once per integration test binary, before any test.
#[ctor::ctor]
fn _auto_init_for_integration_tests() {
    backend_test_support::logging::init();
}
