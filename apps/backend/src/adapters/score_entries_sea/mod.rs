//! SeaORM adapter for the score ledger.

use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ColumnTrait, ConnectionTrait, EntityTrait, NotSet, Order, QueryFilter, QueryOrder, Set,
};

use crate::entities::score_entries;

pub mod dto;

pub use dto::ScoreEntryUpsert;

pub async fn find_by_triple<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i64,
    contest_id: i64,
    turn_number: i16,
) -> Result<Option<score_entries::Model>, sea_orm::DbErr> {
    score_entries::Entity::find()
        .filter(score_entries::Column::PlayerId.eq(player_id))
        .filter(score_entries::Column::ContestId.eq(contest_id))
        .filter(score_entries::Column::TurnNumber.eq(turn_number))
        .one(conn)
        .await
}

/// Entries of one (player, contest) pair, ordered by turn number.
pub async fn find_by_pair<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i64,
    contest_id: i64,
) -> Result<Vec<score_entries::Model>, sea_orm::DbErr> {
    score_entries::Entity::find()
        .filter(score_entries::Column::PlayerId.eq(player_id))
        .filter(score_entries::Column::ContestId.eq(contest_id))
        .order_by(score_entries::Column::TurnNumber, Order::Asc)
        .all(conn)
        .await
}

/// Every entry of a contest, ordered by id (insertion order).
pub async fn find_by_contest<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    contest_id: i64,
) -> Result<Vec<score_entries::Model>, sea_orm::DbErr> {
    score_entries::Entity::find()
        .filter(score_entries::Column::ContestId.eq(contest_id))
        .order_by(score_entries::Column::Id, Order::Asc)
        .all(conn)
        .await
}

/// Every entry a player holds across contests, ordered by id.
pub async fn find_by_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i64,
) -> Result<Vec<score_entries::Model>, sea_orm::DbErr> {
    score_entries::Entity::find()
        .filter(score_entries::Column::PlayerId.eq(player_id))
        .order_by(score_entries::Column::Id, Order::Asc)
        .all(conn)
        .await
}

/// Highest recorded turn for the pair, if any.
pub async fn max_turn<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i64,
    contest_id: i64,
) -> Result<Option<i16>, sea_orm::DbErr> {
    let last = score_entries::Entity::find()
        .filter(score_entries::Column::PlayerId.eq(player_id))
        .filter(score_entries::Column::ContestId.eq(contest_id))
        .order_by(score_entries::Column::TurnNumber, Order::Desc)
        .one(conn)
        .await?;
    Ok(last.map(|e| e.turn_number))
}

/// Insert or overwrite the score for the triple in one statement, then read
/// the row back.
///
/// `ON CONFLICT (player_id, contest_id, turn_number) DO UPDATE` relies on the
/// unique index `ux_score_entries_player_contest_turn`.
pub async fn upsert_score<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: ScoreEntryUpsert,
) -> Result<score_entries::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let entry = score_entries::ActiveModel {
        id: NotSet,
        player_id: Set(dto.player_id),
        contest_id: Set(dto.contest_id),
        turn_number: Set(dto.turn_number),
        score_value: Set(dto.score_value),
        created_at: Set(now),
        updated_at: Set(now),
    };

    score_entries::Entity::insert(entry)
        .on_conflict(
            OnConflict::columns([
                score_entries::Column::PlayerId,
                score_entries::Column::ContestId,
                score_entries::Column::TurnNumber,
            ])
            .update_columns([
                score_entries::Column::ScoreValue,
                score_entries::Column::UpdatedAt,
            ])
            .to_owned(),
        )
        .exec_without_returning(conn)
        .await?;

    find_by_triple(conn, dto.player_id, dto.contest_id, dto.turn_number)
        .await?
        .ok_or_else(|| {
            sea_orm::DbErr::RecordNotFound("score_entries row missing after upsert".to_string())
        })
}

/// Returns the number of rows removed (0 or 1).
pub async fn delete_by_triple<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i64,
    contest_id: i64,
    turn_number: i16,
) -> Result<u64, sea_orm::DbErr> {
    let result = score_entries::Entity::delete_many()
        .filter(score_entries::Column::PlayerId.eq(player_id))
        .filter(score_entries::Column::ContestId.eq(contest_id))
        .filter(score_entries::Column::TurnNumber.eq(turn_number))
        .exec(conn)
        .await?;
    Ok(result.rows_affected)
}

pub async fn delete_by_contest<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    contest_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    let result = score_entries::Entity::delete_many()
        .filter(score_entries::Column::ContestId.eq(contest_id))
        .exec(conn)
        .await?;
    Ok(result.rows_affected)
}
