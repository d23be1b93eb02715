//! Score ledger: the single writer of `score_entries`.

use sea_orm::{ConnectionTrait, DatabaseTransaction};
use tracing::{debug, info};

use super::{require_contest, require_player};
use crate::domain::reconcile::{reconcile_changes, TurnChange, TurnSheet, TurnSlot};
use crate::domain::rules::{validate_score, validate_turn, TURN_COUNT};
use crate::errors::domain::{DomainError, ValidationKind};
use crate::repos::score_entries::{self, ScoreEntry};

/// Score ledger service.
///
/// Guarantees at most one entry per (player, contest, turn) and keeps every
/// stored turn number and score inside the rule bounds.
pub struct LedgerService;

impl LedgerService {
    pub fn new() -> Self {
        Self
    }

    /// Record `score_value` for the actor at `turn_number`, overwriting any
    /// earlier score for that turn.
    ///
    /// Bounds are checked before anything is read or written.
    pub async fn upsert_turn_score(
        &self,
        txn: &DatabaseTransaction,
        actor: i64,
        contest_id: i64,
        turn_number: i16,
        score_value: i16,
    ) -> Result<ScoreEntry, DomainError> {
        validate_turn(turn_number)?;
        validate_score(score_value)?;

        require_player(txn, actor).await?;
        require_contest(txn, contest_id).await?;

        let entry =
            score_entries::upsert_score(txn, actor, contest_id, turn_number, score_value).await?;

        info!(
            player_id = actor,
            contest_id,
            turn_number,
            score_value,
            entry_id = entry.id,
            "Turn score recorded"
        );
        Ok(entry)
    }

    /// Remove the actor's score for `turn_number`. Absent rows are a no-op;
    /// the return value says whether anything was deleted.
    pub async fn remove_turn_score(
        &self,
        txn: &DatabaseTransaction,
        actor: i64,
        contest_id: i64,
        turn_number: i16,
    ) -> Result<bool, DomainError> {
        validate_turn(turn_number)?;

        let removed =
            score_entries::delete_by_triple(txn, actor, contest_id, turn_number).await? > 0;

        if removed {
            info!(player_id = actor, contest_id, turn_number, "Turn score removed");
        } else {
            debug!(
                player_id = actor,
                contest_id, turn_number, "No turn score to remove"
            );
        }
        Ok(removed)
    }

    /// Entries for one (player, contest) pair, ordered by turn.
    pub async fn list_entries<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        player_id: i64,
        contest_id: i64,
    ) -> Result<Vec<ScoreEntry>, DomainError> {
        score_entries::find_by_pair(conn, player_id, contest_id).await
    }

    /// Dense sheet for one (player, contest) pair.
    pub async fn turn_sheet<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        player_id: i64,
        contest_id: i64,
    ) -> Result<TurnSheet, DomainError> {
        let entries = score_entries::find_by_pair(conn, player_id, contest_id).await?;
        Ok(TurnSheet::from_entries(&entries))
    }

    /// Delete every score of the contest, then the contest itself.
    ///
    /// Must run inside one transaction: a failure part-way leaves both intact.
    pub async fn delete_contest_cascade(
        &self,
        txn: &DatabaseTransaction,
        contest_id: i64,
    ) -> Result<u64, DomainError> {
        require_contest(txn, contest_id).await?;

        let removed = score_entries::delete_by_contest(txn, contest_id).await?;
        crate::repos::contests::delete_by_id(txn, contest_id).await?;

        info!(
            contest_id,
            entries_removed = removed,
            "Contest deleted with its scores"
        );
        Ok(removed)
    }

    /// Record a score on the turn after the actor's highest recorded turn.
    ///
    /// Gaps below the highest turn are not filled.
    pub async fn append_turn_score(
        &self,
        txn: &DatabaseTransaction,
        actor: i64,
        contest_id: i64,
        score_value: i16,
    ) -> Result<ScoreEntry, DomainError> {
        validate_score(score_value)?;

        require_player(txn, actor).await?;
        require_contest(txn, contest_id).await?;

        let last = score_entries::max_turn(txn, actor, contest_id).await?;
        let next = last.map_or(1, |t| t + 1);
        if next as usize > TURN_COUNT {
            return Err(DomainError::validation(
                ValidationKind::TurnsExhausted,
                format!("All {TURN_COUNT} turns already hold a score"),
            ));
        }

        let entry = score_entries::upsert_score(txn, actor, contest_id, next, score_value).await?;
        info!(
            player_id = actor,
            contest_id,
            turn_number = next,
            score_value,
            "Turn score appended"
        );
        Ok(entry)
    }

    /// Replace the actor's whole sheet for a contest.
    ///
    /// The submitted slots are validated as a unit before any write; only the
    /// turns that differ from the stored sheet are touched. Returns the sheet
    /// as stored afterwards.
    pub async fn save_turn_sheet(
        &self,
        txn: &DatabaseTransaction,
        actor: i64,
        contest_id: i64,
        slots: Vec<TurnSlot>,
    ) -> Result<TurnSheet, DomainError> {
        let desired = TurnSheet::from_slots(slots)?;

        require_player(txn, actor).await?;
        require_contest(txn, contest_id).await?;

        let current = self.turn_sheet(txn, actor, contest_id).await?;
        let changes = reconcile_changes(&current, &desired);

        for change in &changes {
            match *change {
                TurnChange::Upsert {
                    turn_number,
                    score_value,
                } => {
                    score_entries::upsert_score(txn, actor, contest_id, turn_number, score_value)
                        .await?;
                }
                TurnChange::Remove { turn_number } => {
                    score_entries::delete_by_triple(txn, actor, contest_id, turn_number).await?;
                }
            }
        }

        info!(
            player_id = actor,
            contest_id,
            changes = changes.len(),
            "Turn sheet saved"
        );
        self.turn_sheet(txn, actor, contest_id).await
    }
}

impl Default for LedgerService {
    fn default() -> Self {
        Self::new()
    }
}
