//! Domain layer: pure scorekeeping rules and projections (no DB).

pub mod aggregate;
pub mod reconcile;
pub mod rules;

#[cfg(test)]
mod test_prelude;

// Re-exports for ergonomics
pub use aggregate::{build_match_table, MatchRow, MatchTable, PlayerColumn};
pub use reconcile::{
    completed_turns, project, reconcile_changes, total, ScoredTurn, TurnChange, TurnSheet,
    TurnSlot,
};
pub use rules::{validate_score, validate_turn, SCORE_MAX, SCORE_MIN, TURN_COUNT};
