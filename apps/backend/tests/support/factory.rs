use backend_test_support::unique_helpers::unique_username;
use scorebook::{Contest, DomainError, Player, Scorebook};
use time::macros::datetime;
use time::OffsetDateTime;

/// Register a player under a collision-free username derived from `prefix`.
pub async fn create_player(book: &Scorebook, prefix: &str) -> Result<Player, DomainError> {
    book.register_player(&unique_username(prefix), None, None)
        .await
}

pub async fn create_contest(book: &Scorebook, opponent: &str) -> Result<Contest, DomainError> {
    book.create_contest(opponent, "Home ground", None).await
}

pub async fn create_contest_at(
    book: &Scorebook,
    opponent: &str,
    at: OffsetDateTime,
) -> Result<Contest, DomainError> {
    book.create_contest(opponent, "Home ground", Some(at)).await
}

/// A fixed reference instant so ordering tests never depend on the clock.
pub fn base_time() -> OffsetDateTime {
    datetime!(2024-03-01 19:30 UTC)
}

/// One registered player and one contest, the setup most ledger tests need.
pub async fn player_and_contest(book: &Scorebook) -> Result<(Player, Contest), DomainError> {
    let player = create_player(book, "player").await?;
    let contest = create_contest(book, "Rivals").await?;
    Ok((player, contest))
}
