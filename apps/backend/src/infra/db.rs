use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

use crate::config::db::{db_url, DbKind, DbOwner, DbProfile, DbSettings};
use crate::errors::ConfigError;

/// Unified database connector that supports different profiles, owners and engines.
/// This function does NOT run any migrations.
pub async fn connect_db(
    profile: DbProfile,
    owner: DbOwner,
    kind: DbKind,
) -> Result<DatabaseConnection, ConfigError> {
    let database_url = db_url(profile, owner, kind)?;
    let settings = DbSettings::from_env(kind)?;

    let mut opt = ConnectOptions::new(&database_url);
    opt.max_connections(settings.max_connections)
        .min_connections(1)
        .acquire_timeout(settings.acquire_timeout)
        .sqlx_logging(false);

    let conn = Database::connect(opt).await?;
    info!(
        ?profile,
        ?kind,
        max_connections = settings.max_connections,
        "database connected"
    );
    Ok(conn)
}
