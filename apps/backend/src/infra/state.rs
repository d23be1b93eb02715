use crate::config::db::{DbKind, DbOwner, DbProfile};
use crate::errors::ConfigError;
use crate::infra::db::connect_db;
use crate::state::app_state::AppState;

/// Builder for creating AppState instances (used in both tests and binaries)
pub struct StateBuilder {
    db_profile: DbProfile,
    db_owner: DbOwner,
    db_kind: DbKind,
    run_migrations: bool,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            db_profile: DbProfile::Prod,
            db_owner: DbOwner::App,
            db_kind: DbKind::Postgres,
            run_migrations: false,
        }
    }
    pub fn with_db(mut self, profile: DbProfile) -> Self {
        self.db_profile = profile;
        self
    }
    pub fn with_kind(mut self, kind: DbKind) -> Self {
        self.db_kind = kind;
        self
    }
    pub fn with_owner(mut self, owner: DbOwner) -> Self {
        self.db_owner = owner;
        self
    }
    /// Bring the schema up to date after connecting.
    pub fn with_migrations(mut self) -> Self {
        self.run_migrations = true;
        self
    }

    pub async fn build(self) -> Result<AppState, ConfigError> {
        let conn = connect_db(self.db_profile, self.db_owner, self.db_kind).await?;
        // in-memory databases start empty, so they always need the schema
        if self.run_migrations || self.db_kind == DbKind::SqliteMemory {
            migration::ensure_schema(&conn).await?;
        }
        Ok(AppState::new(conn))
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
