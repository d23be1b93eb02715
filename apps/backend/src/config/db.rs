use std::env;
use std::time::Duration;

use crate::errors::ConfigError;

/// Database profile enum for different environments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbProfile {
    /// Production database profile
    Prod,
    /// Test database profile - enforces safety rules
    Test,
}

/// Database owner enum for different access levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbOwner {
    /// Application-level access (limited permissions)
    App,
    /// Owner-level access (full permissions for migrations)
    Owner,
}

/// Storage engine behind the entity store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbKind {
    Postgres,
    SqliteFile,
    /// Ephemeral; every pool gets its own private database
    SqliteMemory,
}

/// Builds a database URL from environment variables based on profile, owner and engine
pub fn db_url(profile: DbProfile, owner: DbOwner, kind: DbKind) -> Result<String, ConfigError> {
    match kind {
        DbKind::Postgres => {
            let host = host();
            let port = port()?;
            let db_name = db_name(profile)?;
            let (username, password) = credentials(owner)?;
            Ok(format!(
                "postgresql://{username}:{password}@{host}:{port}/{db_name}"
            ))
        }
        DbKind::SqliteFile => {
            let dir = env::var("SQLITE_DB_DIR").unwrap_or_else(|_| "./data".to_string());
            let db_name = db_name(profile)?;
            Ok(format!(
                "sqlite://{}/{db_name}.sqlite?mode=rwc",
                dir.trim_end_matches('/')
            ))
        }
        DbKind::SqliteMemory => Ok("sqlite::memory:".to_string()),
    }
}

/// Pool settings read from the environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbSettings {
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl DbSettings {
    /// Defaults: 10 connections, 5s acquire timeout.
    /// In-memory SQLite is always pinned to a single connection so that
    /// every query sees the same database.
    pub fn from_env(kind: DbKind) -> Result<Self, ConfigError> {
        let max_connections = match kind {
            DbKind::SqliteMemory => 1,
            _ => parse_var("DB_MAX_CONNECTIONS", 10u32)?,
        };
        let acquire_secs = parse_var("DB_ACQUIRE_TIMEOUT_SECS", 5u64)?;
        if max_connections == 0 {
            return Err(ConfigError::InvalidVar {
                name: "DB_MAX_CONNECTIONS".into(),
                detail: "must be at least 1".into(),
            });
        }
        Ok(Self {
            max_connections,
            acquire_timeout: Duration::from_secs(acquire_secs),
        })
    }
}

/// Get database host from environment (defaults to localhost)
fn host() -> String {
    env::var("POSTGRES_HOST").unwrap_or_else(|_| "localhost".to_string())
}

/// Get database port from environment (defaults to 5432)
fn port() -> Result<u16, ConfigError> {
    parse_var("POSTGRES_PORT", 5432u16)
}

/// Get database name based on profile
fn db_name(profile: DbProfile) -> Result<String, ConfigError> {
    match profile {
        DbProfile::Prod => must_var("PROD_DB"),
        DbProfile::Test => {
            let db_name = must_var("TEST_DB")?;
            // Enforce safety: test DB must end with "_test"
            if !db_name.ends_with("_test") {
                return Err(ConfigError::config(format!(
                    "Test profile requires database name to end with '_test', but got: '{db_name}'"
                )));
            }
            Ok(db_name)
        }
    }
}

/// Get database credentials based on owner
fn credentials(owner: DbOwner) -> Result<(String, String), ConfigError> {
    match owner {
        DbOwner::App => Ok((must_var("APP_DB_USER")?, must_var("APP_DB_PASSWORD")?)),
        DbOwner::Owner => Ok((
            must_var("SCOREBOOK_OWNER_USER")?,
            must_var("SCOREBOOK_OWNER_PASSWORD")?,
        )),
    }
}

/// Get required environment variable or return error
fn must_var(name: &str) -> Result<String, ConfigError> {
    env::var(name).map_err(|_| ConfigError::MissingVar {
        name: name.to_string(),
    })
}

fn parse_var<T>(name: &str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::InvalidVar {
            name: name.to_string(),
            detail: e.to_string(),
        }),
        Err(_) => Ok(default),
    }
}
