use std::ops::RangeInclusive;

use crate::errors::domain::{DomainError, ValidationKind};

/// Fixed number of scoring turns per contest (N).
pub const TURN_COUNT: usize = 10;
pub const SCORE_MIN: i16 = 0;
pub const SCORE_MAX: i16 = 27;

pub const USERNAME_MAX_LEN: usize = 50;
pub const LABEL_MAX_LEN: usize = 64;

pub fn valid_turn_range() -> RangeInclusive<i16> {
    1..=TURN_COUNT as i16
}

pub fn valid_score_range() -> RangeInclusive<i16> {
    SCORE_MIN..=SCORE_MAX
}

pub fn validate_turn(turn_number: i16) -> Result<(), DomainError> {
    if valid_turn_range().contains(&turn_number) {
        Ok(())
    } else {
        Err(DomainError::validation(
            ValidationKind::InvalidTurn,
            format!("Turn number must be between 1 and {TURN_COUNT}, got {turn_number}"),
        ))
    }
}

pub fn validate_score(score_value: i16) -> Result<(), DomainError> {
    if valid_score_range().contains(&score_value) {
        Ok(())
    } else {
        Err(DomainError::validation(
            ValidationKind::InvalidScore,
            format!("Score must be between {SCORE_MIN} and {SCORE_MAX}, got {score_value}"),
        ))
    }
}

/// Trim and bound-check a username.
pub fn normalize_username(raw: &str) -> Result<String, DomainError> {
    let name = raw.trim();
    let len = name.chars().count();
    if len == 0 || len > USERNAME_MAX_LEN {
        return Err(DomainError::validation(
            ValidationKind::InvalidUsername,
            format!("Username must be 1 to {USERNAME_MAX_LEN} characters"),
        ));
    }
    Ok(name.to_owned())
}

/// Trim and bound-check a contest label (`field` names it in the error).
pub fn normalize_label(field: &str, raw: &str) -> Result<String, DomainError> {
    let label = raw.trim();
    let len = label.chars().count();
    if len == 0 || len > LABEL_MAX_LEN {
        return Err(DomainError::validation(
            ValidationKind::InvalidLabel,
            format!("{field} must be 1 to {LABEL_MAX_LEN} characters"),
        ));
    }
    Ok(label.to_owned())
}
