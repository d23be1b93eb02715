//! Error codes surfaced to callers of the scorebook core.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All codes are SCREAMING_SNAKE_CASE and are what a web collaborator
//! should put on the wire.

use core::fmt;

/// Centralized error codes for the scorebook core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Input validation
    /// Turn number outside 1..=N
    InvalidTurn,
    /// Score value outside SCORE_MIN..=SCORE_MAX
    InvalidScore,
    /// Submitted turn sheet has the wrong shape
    InvalidSheet,
    /// Blank or oversized username
    InvalidUsername,
    /// Blank or oversized opponent/location label
    InvalidLabel,
    /// Every turn of the contest already holds a score
    TurnsExhausted,
    /// General validation error
    ValidationError,

    // Resource not found
    PlayerNotFound,
    ContestNotFound,
    ScoreEntryNotFound,
    /// General not found error
    NotFound,

    // Conflicts
    /// Concurrent write on the same (player, contest, turn)
    ScoreEntryConflict,
    /// Username already registered
    UsernameTaken,
    /// Generic conflict (fallback for unmatched conflicts)
    Conflict,

    // Authorization
    /// Acting player may not modify this record
    Forbidden,

    // System errors
    DbUnavailable,
    DbTimeout,
    InternalError,
    ConfigError,
}

impl ErrorCode {
    /// Every code, in declaration order.
    pub const ALL: [ErrorCode; 19] = [
        Self::InvalidTurn,
        Self::InvalidScore,
        Self::InvalidSheet,
        Self::InvalidUsername,
        Self::InvalidLabel,
        Self::TurnsExhausted,
        Self::ValidationError,
        Self::PlayerNotFound,
        Self::ContestNotFound,
        Self::ScoreEntryNotFound,
        Self::NotFound,
        Self::ScoreEntryConflict,
        Self::UsernameTaken,
        Self::Conflict,
        Self::Forbidden,
        Self::DbUnavailable,
        Self::DbTimeout,
        Self::InternalError,
        Self::ConfigError,
    ];

    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidTurn => "INVALID_TURN",
            Self::InvalidScore => "INVALID_SCORE",
            Self::InvalidSheet => "INVALID_SHEET",
            Self::InvalidUsername => "INVALID_USERNAME",
            Self::InvalidLabel => "INVALID_LABEL",
            Self::TurnsExhausted => "TURNS_EXHAUSTED",
            Self::ValidationError => "VALIDATION_ERROR",

            Self::PlayerNotFound => "PLAYER_NOT_FOUND",
            Self::ContestNotFound => "CONTEST_NOT_FOUND",
            Self::ScoreEntryNotFound => "SCORE_ENTRY_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::ScoreEntryConflict => "SCORE_ENTRY_CONFLICT",
            Self::UsernameTaken => "USERNAME_TAKEN",
            Self::Conflict => "CONFLICT",

            Self::Forbidden => "FORBIDDEN",

            Self::DbUnavailable => "DB_UNAVAILABLE",
            Self::DbTimeout => "DB_TIMEOUT",
            Self::InternalError => "INTERNAL_ERROR",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
