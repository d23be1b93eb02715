use scorebook::{ErrorCode, TURN_COUNT};

use crate::support::build_test_scorebook;
use crate::support::factory::{create_player, player_and_contest};

#[tokio::test]
async fn upsert_creates_single_entry() -> Result<(), Box<dyn std::error::Error>> {
    let book = build_test_scorebook().await?;
    let (player, contest) = player_and_contest(&book).await?;

    let entry = book.upsert_turn_score(player.id, contest.id, 3, 14).await?;
    assert_eq!(entry.player_id, player.id);
    assert_eq!(entry.contest_id, contest.id);
    assert_eq!(entry.turn_number, 3);
    assert_eq!(entry.score_value, 14);

    let entries = book.list_entries(player.id, contest.id).await?;
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0], entry);
    Ok(())
}

#[tokio::test]
async fn same_value_upsert_keeps_row_identity() -> Result<(), Box<dyn std::error::Error>> {
    let book = build_test_scorebook().await?;
    let (player, contest) = player_and_contest(&book).await?;

    let first = book.upsert_turn_score(player.id, contest.id, 1, 9).await?;
    let second = book.upsert_turn_score(player.id, contest.id, 1, 9).await?;

    assert_eq!(first.id, second.id);
    assert_eq!(book.list_entries(player.id, contest.id).await?.len(), 1);
    Ok(())
}

#[tokio::test]
async fn second_upsert_overwrites_value() -> Result<(), Box<dyn std::error::Error>> {
    let book = build_test_scorebook().await?;
    let (player, contest) = player_and_contest(&book).await?;

    let first = book.upsert_turn_score(player.id, contest.id, 5, 2).await?;
    let second = book.upsert_turn_score(player.id, contest.id, 5, 20).await?;

    assert_eq!(first.id, second.id);
    assert_eq!(second.score_value, 20);

    let entries = book.list_entries(player.id, contest.id).await?;
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].score_value, 20);
    Ok(())
}

#[tokio::test]
async fn boundary_values_are_accepted() -> Result<(), Box<dyn std::error::Error>> {
    let book = build_test_scorebook().await?;
    let (player, contest) = player_and_contest(&book).await?;

    book.upsert_turn_score(player.id, contest.id, 1, 0).await?;
    book.upsert_turn_score(player.id, contest.id, TURN_COUNT as i16, 27)
        .await?;

    let sheet = book.turn_sheet(player.id, contest.id).await?;
    assert_eq!(sheet.get(1), Some(0));
    assert_eq!(sheet.get(10), Some(27));
    assert_eq!(sheet.total(), 27);
    assert_eq!(sheet.completed_turns(), 2);
    Ok(())
}

#[tokio::test]
async fn out_of_range_turns_are_rejected_without_writes() -> Result<(), Box<dyn std::error::Error>>
{
    let book = build_test_scorebook().await?;
    let (player, contest) = player_and_contest(&book).await?;
    book.upsert_turn_score(player.id, contest.id, 2, 6).await?;

    for turn in [0, 11, -3] {
        let err = book
            .upsert_turn_score(player.id, contest.id, turn, 6)
            .await
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidTurn);
        assert_eq!(err.status(), 422);
    }

    let entries = book.list_entries(player.id, contest.id).await?;
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].turn_number, 2);
    Ok(())
}

#[tokio::test]
async fn out_of_range_scores_leave_existing_row_alone() -> Result<(), Box<dyn std::error::Error>> {
    let book = build_test_scorebook().await?;
    let (player, contest) = player_and_contest(&book).await?;
    let original = book.upsert_turn_score(player.id, contest.id, 4, 11).await?;

    for score in [-1, 28, 100] {
        let err = book
            .upsert_turn_score(player.id, contest.id, 4, score)
            .await
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidScore);
    }

    let entries = book.list_entries(player.id, contest.id).await?;
    assert_eq!(entries, vec![original]);
    Ok(())
}

#[tokio::test]
async fn unknown_player_or_contest_is_not_found() -> Result<(), Box<dyn std::error::Error>> {
    let book = build_test_scorebook().await?;
    let (player, contest) = player_and_contest(&book).await?;

    let err = book
        .upsert_turn_score(player.id + 1000, contest.id, 1, 1)
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::PlayerNotFound);

    let err = book
        .upsert_turn_score(player.id, contest.id + 1000, 1, 1)
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::ContestNotFound);
    assert_eq!(err.status(), 404);
    Ok(())
}

#[tokio::test]
async fn players_do_not_share_turns() -> Result<(), Box<dyn std::error::Error>> {
    let book = build_test_scorebook().await?;
    let (alice, contest) = player_and_contest(&book).await?;
    let bob = create_player(&book, "bob").await?;

    book.upsert_turn_score(alice.id, contest.id, 1, 10).await?;
    book.upsert_turn_score(bob.id, contest.id, 1, 12).await?;

    assert_eq!(book.list_entries(alice.id, contest.id).await?[0].score_value, 10);
    assert_eq!(book.list_entries(bob.id, contest.id).await?[0].score_value, 12);
    Ok(())
}
