//! Player repository functions for domain layer (generic over ConnectionTrait).

use sea_orm::ConnectionTrait;
use serde::Serialize;

use crate::adapters::players_sea as players_adapter;
use crate::errors::domain::DomainError;

/// Player domain model
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Player {
    pub id: i64,
    pub username: String,
    pub forename: Option<String>,
    pub surname: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: time::OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: time::OffsetDateTime,
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i64,
) -> Result<Option<Player>, DomainError> {
    let player = players_adapter::find_by_id(conn, player_id).await?;
    Ok(player.map(Player::from))
}

pub async fn find_by_username<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    username: &str,
) -> Result<Option<Player>, DomainError> {
    let player = players_adapter::find_by_username(conn, username).await?;
    Ok(player.map(Player::from))
}

pub async fn find_by_ids<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_ids: &[i64],
) -> Result<Vec<Player>, DomainError> {
    let players = players_adapter::find_by_ids(conn, player_ids).await?;
    Ok(players.into_iter().map(Player::from).collect())
}

pub async fn create_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    username: &str,
    forename: Option<String>,
    surname: Option<String>,
) -> Result<Player, DomainError> {
    let dto = players_adapter::PlayerCreate::new(username).with_names(forename, surname);
    let player = players_adapter::create_player(conn, dto).await?;
    Ok(Player::from(player))
}

pub async fn update_username<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i64,
    username: String,
) -> Result<Player, DomainError> {
    let player = players_adapter::update_username(conn, player_id, username).await?;
    Ok(Player::from(player))
}

impl From<crate::entities::players::Model> for Player {
    fn from(model: crate::entities::players::Model) -> Self {
        Self {
            id: model.id,
            username: model.username,
            forename: model.forename,
            surname: model.surname,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
