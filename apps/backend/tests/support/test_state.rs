use scorebook::config::db::{DbKind, DbProfile};
use scorebook::errors::ConfigError;
use scorebook::infra::state::{build_state, StateBuilder};
use scorebook::state::{AppState, Scorebook};

/// Fresh, migrated, private in-memory database per call.
pub fn test_state_builder() -> StateBuilder {
    build_state()
        .with_db(DbProfile::Test)
        .with_kind(DbKind::SqliteMemory)
}

pub async fn build_test_state() -> Result<AppState, ConfigError> {
    test_state_builder().build().await
}

pub async fn build_test_scorebook() -> Result<Scorebook, ConfigError> {
    Ok(Scorebook::new(build_test_state().await?))
}
