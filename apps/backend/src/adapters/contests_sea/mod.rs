//! SeaORM adapter for contest repository.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, Order, QueryFilter,
    QueryOrder, Set,
};

use crate::entities::contests;

pub mod dto;

pub use dto::{ContestCreate, ContestUpdate};

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    contest_id: i64,
) -> Result<Option<contests::Model>, sea_orm::DbErr> {
    contests::Entity::find_by_id(contest_id).one(conn).await
}

pub async fn find_by_ids<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    contest_ids: &[i64],
) -> Result<Vec<contests::Model>, sea_orm::DbErr> {
    if contest_ids.is_empty() {
        return Ok(Vec::new());
    }
    contests::Entity::find()
        .filter(contests::Column::Id.is_in(contest_ids.iter().copied()))
        .order_by(contests::Column::Timestamp, Order::Desc)
        .order_by(contests::Column::Id, Order::Desc)
        .all(conn)
        .await
}

/// All contests, newest first.
pub async fn list_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<contests::Model>, sea_orm::DbErr> {
    contests::Entity::find()
        .order_by(contests::Column::Timestamp, Order::Desc)
        .order_by(contests::Column::Id, Order::Desc)
        .all(conn)
        .await
}

pub async fn create_contest<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: ContestCreate,
) -> Result<contests::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let contest = contests::ActiveModel {
        id: NotSet,
        opponent: Set(dto.opponent),
        location: Set(dto.location),
        timestamp: Set(dto.timestamp),
        created_at: Set(now),
        updated_at: Set(now),
    };

    contest.insert(conn).await
}

pub async fn update_contest<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    contest_id: i64,
    dto: ContestUpdate,
) -> Result<contests::Model, sea_orm::DbErr> {
    let mut contest = contests::ActiveModel {
        id: Set(contest_id),
        updated_at: Set(time::OffsetDateTime::now_utc()),
        ..Default::default()
    };
    if let Some(opponent) = dto.opponent {
        contest.opponent = Set(opponent);
    }
    if let Some(location) = dto.location {
        contest.location = Set(location);
    }
    if let Some(timestamp) = dto.timestamp {
        contest.timestamp = Set(timestamp);
    }

    contest.update(conn).await
}

/// Returns the number of rows removed (0 or 1).
pub async fn delete_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    contest_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    let result = contests::Entity::delete_by_id(contest_id).exec(conn).await?;
    Ok(result.rows_affected)
}
