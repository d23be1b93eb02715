//! SeaORM adapter for player repository.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, Set,
};

use crate::entities::players;

pub mod dto;

pub use dto::PlayerCreate;

// Adapter functions return DbErr; repos layer maps to DomainError via From<DbErr>.

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i64,
) -> Result<Option<players::Model>, sea_orm::DbErr> {
    players::Entity::find_by_id(player_id).one(conn).await
}

pub async fn find_by_username<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    username: &str,
) -> Result<Option<players::Model>, sea_orm::DbErr> {
    players::Entity::find()
        .filter(players::Column::Username.eq(username))
        .one(conn)
        .await
}

/// Batch lookup; missing ids are simply absent from the result.
pub async fn find_by_ids<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_ids: &[i64],
) -> Result<Vec<players::Model>, sea_orm::DbErr> {
    if player_ids.is_empty() {
        return Ok(Vec::new());
    }
    players::Entity::find()
        .filter(players::Column::Id.is_in(player_ids.iter().copied()))
        .all(conn)
        .await
}

pub async fn create_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: PlayerCreate,
) -> Result<players::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let player = players::ActiveModel {
        id: NotSet,
        username: Set(dto.username),
        forename: Set(dto.forename),
        surname: Set(dto.surname),
        created_at: Set(now),
        updated_at: Set(now),
    };

    player.insert(conn).await
}

pub async fn update_username<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i64,
    username: String,
) -> Result<players::Model, sea_orm::DbErr> {
    let player = players::ActiveModel {
        id: Set(player_id),
        username: Set(username),
        updated_at: Set(time::OffsetDateTime::now_utc()),
        ..Default::default()
    };

    player.update(conn).await
}
