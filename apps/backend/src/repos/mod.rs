//! Repository functions for domain layer.

pub mod contests;
pub mod players;
pub mod score_entries;
