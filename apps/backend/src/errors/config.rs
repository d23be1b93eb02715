use thiserror::Error;

/// Errors raised while reading configuration or opening the database.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Required environment variable '{name}' is not set")]
    MissingVar { name: String },
    #[error("Invalid value for '{name}': {detail}")]
    InvalidVar { name: String, detail: String },
    #[error("Configuration error: {message}")]
    Config { message: String },
    #[error("Database setup failed: {0}")]
    Database(#[from] sea_orm::DbErr),
}

impl ConfigError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}
