//! DTOs for score_entries_sea adapter.

/// DTO for writing one turn's score; the triple is the conflict target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreEntryUpsert {
    pub player_id: i64,
    pub contest_id: i64,
    pub turn_number: i16,
    pub score_value: i16,
}
