//! Score ledger repository functions for domain layer.

use sea_orm::ConnectionTrait;
use serde::Serialize;

use crate::adapters::score_entries_sea as entries_adapter;
use crate::domain::reconcile::ScoredTurn;
use crate::errors::domain::DomainError;

/// ScoreEntry domain model
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreEntry {
    pub id: i64,
    pub player_id: i64,
    pub contest_id: i64,
    pub turn_number: i16,
    pub score_value: i16,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: time::OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: time::OffsetDateTime,
}

impl ScoredTurn for ScoreEntry {
    fn entry_id(&self) -> i64 {
        self.id
    }
    fn player_id(&self) -> i64 {
        self.player_id
    }
    fn turn_number(&self) -> i16 {
        self.turn_number
    }
    fn score_value(&self) -> i16 {
        self.score_value
    }
}

pub async fn find_by_pair<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i64,
    contest_id: i64,
) -> Result<Vec<ScoreEntry>, DomainError> {
    let entries = entries_adapter::find_by_pair(conn, player_id, contest_id).await?;
    Ok(entries.into_iter().map(ScoreEntry::from).collect())
}

pub async fn find_by_contest<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    contest_id: i64,
) -> Result<Vec<ScoreEntry>, DomainError> {
    let entries = entries_adapter::find_by_contest(conn, contest_id).await?;
    Ok(entries.into_iter().map(ScoreEntry::from).collect())
}

pub async fn find_by_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i64,
) -> Result<Vec<ScoreEntry>, DomainError> {
    let entries = entries_adapter::find_by_player(conn, player_id).await?;
    Ok(entries.into_iter().map(ScoreEntry::from).collect())
}

pub async fn max_turn<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i64,
    contest_id: i64,
) -> Result<Option<i16>, DomainError> {
    Ok(entries_adapter::max_turn(conn, player_id, contest_id).await?)
}

pub async fn upsert_score<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i64,
    contest_id: i64,
    turn_number: i16,
    score_value: i16,
) -> Result<ScoreEntry, DomainError> {
    let dto = entries_adapter::ScoreEntryUpsert {
        player_id,
        contest_id,
        turn_number,
        score_value,
    };
    let entry = entries_adapter::upsert_score(conn, dto).await?;
    Ok(ScoreEntry::from(entry))
}

pub async fn delete_by_triple<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i64,
    contest_id: i64,
    turn_number: i16,
) -> Result<u64, DomainError> {
    Ok(entries_adapter::delete_by_triple(conn, player_id, contest_id, turn_number).await?)
}

pub async fn delete_by_contest<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    contest_id: i64,
) -> Result<u64, DomainError> {
    Ok(entries_adapter::delete_by_contest(conn, contest_id).await?)
}

impl From<crate::entities::score_entries::Model> for ScoreEntry {
    fn from(model: crate::entities::score_entries::Model) -> Self {
        Self {
            id: model.id,
            player_id: model.player_id,
            contest_id: model.contest_id,
            turn_number: model.turn_number,
            score_value: model.score_value,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
