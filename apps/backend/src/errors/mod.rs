//! Error handling for the scorebook core.

pub mod config;
pub mod domain;
pub mod error_code;

pub use config::ConfigError;
pub use domain::DomainError;
pub use error_code::ErrorCode;
