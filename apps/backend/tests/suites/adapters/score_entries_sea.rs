use scorebook::adapters::score_entries_sea::{self, ScoreEntryUpsert};
use scorebook::entities::score_entries;
use scorebook::errors::domain::DomainError;
use scorebook::ErrorCode;
use sea_orm::{ActiveModelTrait, NotSet, Set};

use crate::support::build_test_scorebook;
use crate::support::factory::{create_player, player_and_contest};

#[tokio::test]
async fn unique_index_rejects_plain_duplicate_insert() -> Result<(), Box<dyn std::error::Error>> {
    let book = build_test_scorebook().await?;
    let (player, contest) = player_and_contest(&book).await?;
    book.upsert_turn_score(player.id, contest.id, 1, 5).await?;

    let now = time::OffsetDateTime::now_utc();
    let duplicate = score_entries::ActiveModel {
        id: NotSet,
        player_id: Set(player.id),
        contest_id: Set(contest.id),
        turn_number: Set(1),
        score_value: Set(6),
        created_at: Set(now),
        updated_at: Set(now),
    };
    let err = duplicate.insert(book.state().db()).await.unwrap_err();

    let mapped = DomainError::from(err);
    assert_eq!(mapped.code(), ErrorCode::ScoreEntryConflict);
    assert!(mapped.is_retryable());
    Ok(())
}

#[tokio::test]
async fn foreign_keys_reject_orphan_entries() -> Result<(), Box<dyn std::error::Error>> {
    let book = build_test_scorebook().await?;
    let player = create_player(&book, "orphan").await?;

    let err = score_entries_sea::upsert_score(
        book.state().db(),
        ScoreEntryUpsert {
            player_id: player.id,
            contest_id: 9999,
            turn_number: 1,
            score_value: 1,
        },
    )
    .await
    .unwrap_err();

    assert_eq!(DomainError::from(err).code(), ErrorCode::ValidationError);
    Ok(())
}

#[tokio::test]
async fn contest_query_orders_by_id() -> Result<(), Box<dyn std::error::Error>> {
    let book = build_test_scorebook().await?;
    let (alice, contest) = player_and_contest(&book).await?;
    let bob = create_player(&book, "bob").await?;

    book.upsert_turn_score(alice.id, contest.id, 9, 1).await?;
    book.upsert_turn_score(bob.id, contest.id, 1, 2).await?;
    book.upsert_turn_score(alice.id, contest.id, 2, 3).await?;

    let rows = score_entries_sea::find_by_contest(book.state().db(), contest.id).await?;
    assert!(rows.windows(2).all(|w| w[0].id < w[1].id));
    assert_eq!(rows.len(), 3);

    let max = score_entries_sea::max_turn(book.state().db(), alice.id, contest.id).await?;
    assert_eq!(max, Some(9));
    let none = score_entries_sea::max_turn(book.state().db(), bob.id, contest.id + 1).await?;
    assert_eq!(none, None);
    Ok(())
}
