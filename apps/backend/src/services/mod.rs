//! Services: validation, orchestration and logging over the repos.
//!
//! Mutating methods take the caller's `DatabaseTransaction` and the acting
//! player's id explicitly; `state::Scorebook` wraps each call in its own
//! transaction.

pub mod contests;
pub mod ledger;
pub mod matches;
pub mod players;

pub use contests::ContestService;
pub use ledger::LedgerService;
pub use matches::{ContestLine, MatchService, PlayerOverview};
pub use players::PlayerService;

use sea_orm::ConnectionTrait;

use crate::errors::domain::{DomainError, NotFoundKind};
use crate::repos::contests::{self as contests_repo, Contest};
use crate::repos::players::{self as players_repo, Player};

pub(crate) async fn require_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i64,
) -> Result<Player, DomainError> {
    players_repo::find_by_id(conn, player_id).await?.ok_or_else(|| {
        DomainError::not_found(
            NotFoundKind::Player,
            format!("Player {player_id} not found"),
        )
    })
}

pub(crate) async fn require_contest<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    contest_id: i64,
) -> Result<Contest, DomainError> {
    contests_repo::find_by_id(conn, contest_id).await?.ok_or_else(|| {
        DomainError::not_found(
            NotFoundKind::Contest,
            format!("Contest {contest_id} not found"),
        )
    })
}
