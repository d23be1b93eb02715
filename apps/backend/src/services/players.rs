//! Player registration and profile edits.

use sea_orm::{ConnectionTrait, DatabaseTransaction};
use tracing::{info, warn};

use super::require_player;
use crate::domain::rules::normalize_username;
use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind};
use crate::repos::players::{self, Player};

pub struct PlayerService;

/// Blank optional names are stored as NULL.
fn optional_name(raw: Option<String>) -> Option<String> {
    raw.map(|s| s.trim().to_owned()).filter(|s| !s.is_empty())
}

fn username_taken(username: &str) -> DomainError {
    DomainError::conflict(
        ConflictKind::UniqueUsername,
        format!("Username '{username}' is already registered"),
    )
}

impl PlayerService {
    pub fn new() -> Self {
        Self
    }

    pub async fn register_player(
        &self,
        txn: &DatabaseTransaction,
        username: &str,
        forename: Option<String>,
        surname: Option<String>,
    ) -> Result<Player, DomainError> {
        let username = normalize_username(username)?;

        if players::find_by_username(txn, &username).await?.is_some() {
            warn!(username = %username, "Registration with taken username");
            return Err(username_taken(&username));
        }

        let player = players::create_player(
            txn,
            &username,
            optional_name(forename),
            optional_name(surname),
        )
        .await?;

        info!(player_id = player.id, username = %player.username, "Player registered");
        Ok(player)
    }

    /// Change a username. Only the player themselves may do this.
    pub async fn rename_player(
        &self,
        txn: &DatabaseTransaction,
        actor: i64,
        player_id: i64,
        new_username: &str,
    ) -> Result<Player, DomainError> {
        let username = normalize_username(new_username)?;

        if actor != player_id {
            warn!(actor, player_id, "Rename attempted on another player");
            return Err(DomainError::forbidden(
                "Players may only rename themselves",
            ));
        }

        let current = require_player(txn, player_id).await?;
        if current.username == username {
            return Ok(current);
        }

        if let Some(holder) = players::find_by_username(txn, &username).await? {
            if holder.id != player_id {
                return Err(username_taken(&username));
            }
        }

        let player = players::update_username(txn, player_id, username).await?;
        info!(
            player_id,
            old_username = %current.username,
            new_username = %player.username,
            "Player renamed"
        );
        Ok(player)
    }

    pub async fn find_player<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        player_id: i64,
    ) -> Result<Player, DomainError> {
        require_player(conn, player_id).await
    }

    pub async fn find_player_by_username<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        username: &str,
    ) -> Result<Player, DomainError> {
        players::find_by_username(conn, username.trim())
            .await?
            .ok_or_else(|| {
                DomainError::not_found(
                    NotFoundKind::Player,
                    format!("Player '{}' not found", username.trim()),
                )
            })
    }
}

impl Default for PlayerService {
    fn default() -> Self {
        Self::new()
    }
}
