use scorebook::{ErrorCode, TURN_COUNT};

use crate::support::build_test_scorebook;
use crate::support::factory::player_and_contest;

#[tokio::test]
async fn append_fills_turns_in_order_until_exhausted() -> Result<(), Box<dyn std::error::Error>> {
    let book = build_test_scorebook().await?;
    let (player, contest) = player_and_contest(&book).await?;

    for expected_turn in 1..=TURN_COUNT as i16 {
        let entry = book
            .append_turn_score(player.id, contest.id, expected_turn)
            .await?;
        assert_eq!(entry.turn_number, expected_turn);
    }

    let err = book
        .append_turn_score(player.id, contest.id, 1)
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::TurnsExhausted);

    let sheet = book.turn_sheet(player.id, contest.id).await?;
    assert!(sheet.is_complete());
    assert_eq!(sheet.total(), (1..=10).sum::<i32>());
    Ok(())
}

#[tokio::test]
async fn append_goes_after_highest_turn() -> Result<(), Box<dyn std::error::Error>> {
    let book = build_test_scorebook().await?;
    let (player, contest) = player_and_contest(&book).await?;
    book.upsert_turn_score(player.id, contest.id, 4, 10).await?;

    let entry = book.append_turn_score(player.id, contest.id, 3).await?;
    assert_eq!(entry.turn_number, 5);

    // the gap below stays empty
    let sheet = book.turn_sheet(player.id, contest.id).await?;
    assert_eq!(sheet.get(1), None);
    Ok(())
}

#[tokio::test]
async fn append_validates_score_first() -> Result<(), Box<dyn std::error::Error>> {
    let book = build_test_scorebook().await?;
    let (player, contest) = player_and_contest(&book).await?;

    let err = book
        .append_turn_score(player.id, contest.id, 30)
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidScore);
    assert!(book.list_entries(player.id, contest.id).await?.is_empty());
    Ok(())
}
