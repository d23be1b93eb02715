//! Domain-level error type used across services, repos and adapters.
//!
//! This error type is HTTP- and DB-agnostic. Adapters return `sea_orm::DbErr`,
//! which repos translate into `DomainError` through `From<DbErr>`
//! (see `crate::infra::db_errors`). Callers read `code()` and `status()` to
//! surface the error without matching on variants.

use thiserror::Error;

use super::error_code::ErrorCode;

/// Validation kinds; each maps to a dedicated error code.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    InvalidTurn,
    InvalidScore,
    InvalidSheet,
    InvalidUsername,
    InvalidLabel,
    TurnsExhausted,
    Other(String),
}

/// Infra error kinds to distinguish operational failures
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InfraErrorKind {
    Timeout,
    DbUnavailable,
    Other(String),
}

/// Domain-level not found entities
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NotFoundKind {
    Player,
    Contest,
    ScoreEntry,
    Other(String),
}

/// Domain-level conflict kinds
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConflictKind {
    /// Two writers collided on one (player, contest, turn) triple
    ScoreEntry,
    UniqueUsername,
    Other(String),
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    /// Input validation; rejected before any write
    #[error("validation error {0:?}: {1}")]
    Validation(ValidationKind, String),
    /// Semantic conflict
    #[error("conflict {0:?}: {1}")]
    Conflict(ConflictKind, String),
    /// Missing resource in domain terms
    #[error("not found {0:?}: {1}")]
    NotFound(NotFoundKind, String),
    /// Acting player may not touch the target record
    #[error("forbidden: {0}")]
    Forbidden(String),
    /// Infrastructure/operational failures
    #[error("infra {0:?}: {1}")]
    Infra(InfraErrorKind, String),
}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }
    pub fn validation_other(detail: impl Into<String>) -> Self {
        Self::Validation(ValidationKind::Other("VALIDATION_ERROR".into()), detail.into())
    }
    pub fn conflict(kind: ConflictKind, detail: impl Into<String>) -> Self {
        Self::Conflict(kind, detail.into())
    }
    pub fn not_found(kind: NotFoundKind, detail: impl Into<String>) -> Self {
        Self::NotFound(kind, detail.into())
    }
    pub fn forbidden(detail: impl Into<String>) -> Self {
        Self::Forbidden(detail.into())
    }
    pub fn infra(kind: InfraErrorKind, detail: impl Into<String>) -> Self {
        Self::Infra(kind, detail.into())
    }

    /// Stable code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Validation(kind, _) => match kind {
                ValidationKind::InvalidTurn => ErrorCode::InvalidTurn,
                ValidationKind::InvalidScore => ErrorCode::InvalidScore,
                ValidationKind::InvalidSheet => ErrorCode::InvalidSheet,
                ValidationKind::InvalidUsername => ErrorCode::InvalidUsername,
                ValidationKind::InvalidLabel => ErrorCode::InvalidLabel,
                ValidationKind::TurnsExhausted => ErrorCode::TurnsExhausted,
                ValidationKind::Other(_) => ErrorCode::ValidationError,
            },
            Self::NotFound(kind, _) => match kind {
                NotFoundKind::Player => ErrorCode::PlayerNotFound,
                NotFoundKind::Contest => ErrorCode::ContestNotFound,
                NotFoundKind::ScoreEntry => ErrorCode::ScoreEntryNotFound,
                NotFoundKind::Other(_) => ErrorCode::NotFound,
            },
            Self::Conflict(kind, _) => match kind {
                ConflictKind::ScoreEntry => ErrorCode::ScoreEntryConflict,
                ConflictKind::UniqueUsername => ErrorCode::UsernameTaken,
                ConflictKind::Other(_) => ErrorCode::Conflict,
            },
            Self::Forbidden(_) => ErrorCode::Forbidden,
            Self::Infra(kind, _) => match kind {
                InfraErrorKind::Timeout => ErrorCode::DbTimeout,
                InfraErrorKind::DbUnavailable => ErrorCode::DbUnavailable,
                InfraErrorKind::Other(_) => ErrorCode::InternalError,
            },
        }
    }

    /// HTTP-equivalent status a presentation layer should surface.
    pub fn status(&self) -> u16 {
        match self {
            Self::Validation(..) => 422,
            Self::NotFound(..) => 404,
            Self::Conflict(..) => 409,
            Self::Forbidden(_) => 403,
            Self::Infra(InfraErrorKind::Timeout, _) => 504,
            Self::Infra(InfraErrorKind::DbUnavailable, _) => 503,
            Self::Infra(..) => 500,
        }
    }

    /// Human-readable detail without the kind prefix.
    pub fn detail(&self) -> &str {
        match self {
            Self::Validation(_, d)
            | Self::Conflict(_, d)
            | Self::NotFound(_, d)
            | Self::Infra(_, d) => d,
            Self::Forbidden(d) => d,
        }
    }

    /// Conflicts on a score triple are safe to retry once.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Conflict(ConflictKind::ScoreEntry, _))
    }
}
