//! Adapters for external dependencies.

pub mod contests_sea;
pub mod players_sea;
pub mod score_entries_sea;
