#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod adapters;
pub mod config;
pub mod db;
pub mod domain;
pub mod entities;
pub mod errors;
pub mod infra;
pub mod repos;
pub mod services;
pub mod state;
pub mod telemetry;


// Re-exports for public API
pub use config::db::{db_url, DbKind, DbOwner, DbProfile, DbSettings};
pub use db::txn::{with_txn, TxnFuture};
pub use db::txn_policy::{set_txn_policy, TxnPolicy};
pub use domain::{MatchTable, TurnChange, TurnSheet, TurnSlot, SCORE_MAX, SCORE_MIN, TURN_COUNT};
pub use errors::{ConfigError, DomainError, ErrorCode};
pub use infra::db::connect_db;
pub use infra::state::{build_state, StateBuilder};
pub use repos::contests::Contest;
pub use repos::players::Player;
pub use repos::score_entries::ScoreEntry;
pub use services::contests::ContestEdit;
pub use services::{ContestLine, PlayerOverview};
pub use state::{AppState, Scorebook};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
