use scorebook::{ContestEdit, ErrorCode};
use time::macros::datetime;
use time::{Duration, UtcOffset};

use crate::support::build_test_scorebook;
use crate::support::factory::{base_time, create_contest_at};

#[tokio::test]
async fn create_trims_labels_and_defaults_timestamp() -> Result<(), Box<dyn std::error::Error>> {
    let book = build_test_scorebook().await?;
    let before = time::OffsetDateTime::now_utc() - Duration::seconds(1);

    let contest = book
        .create_contest(" Rivals ", " Gloucester ", None)
        .await?;
    assert_eq!(contest.opponent, "Rivals");
    assert_eq!(contest.location, "Gloucester");
    assert!(contest.timestamp >= before);

    assert_eq!(book.get_contest(contest.id).await?, contest);
    Ok(())
}

#[tokio::test]
async fn blank_labels_are_invalid() -> Result<(), Box<dyn std::error::Error>> {
    let book = build_test_scorebook().await?;

    let err = book.create_contest("", "Somewhere", None).await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidLabel);

    let err = book
        .create_contest("Rivals", &"y".repeat(65), None)
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidLabel);
    assert!(book.list_contests().await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn update_changes_only_given_fields() -> Result<(), Box<dyn std::error::Error>> {
    let book = build_test_scorebook().await?;
    let contest = create_contest_at(&book, "Rivals", base_time()).await?;

    let moved = base_time() + Duration::days(2);
    let updated = book
        .update_contest(
            contest.id,
            ContestEdit {
                location: Some("Away".to_string()),
                timestamp: Some(moved),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.opponent, "Rivals");
    assert_eq!(updated.location, "Away");
    assert_eq!(updated.timestamp, moved);
    assert_eq!(updated.created_at, contest.created_at);
    Ok(())
}

#[tokio::test]
async fn update_missing_contest_is_not_found() -> Result<(), Box<dyn std::error::Error>> {
    let book = build_test_scorebook().await?;

    let err = book
        .update_contest(77, ContestEdit::default())
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::ContestNotFound);
    Ok(())
}

#[tokio::test]
async fn list_is_newest_first() -> Result<(), Box<dyn std::error::Error>> {
    let book = build_test_scorebook().await?;
    let old = create_contest_at(&book, "Old", base_time()).await?;
    let new = create_contest_at(&book, "New", base_time() + Duration::days(7)).await?;
    let mid = create_contest_at(&book, "Mid", base_time() + Duration::days(3)).await?;

    let ids: Vec<i64> = book.list_contests().await?.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![new.id, mid.id, old.id]);
    Ok(())
}

#[tokio::test]
async fn mixed_offsets_order_by_instant() -> Result<(), Box<dyn std::error::Error>> {
    let book = build_test_scorebook().await?;
    // 05:00 UTC, written with a later wall-clock time than `late`
    let early = create_contest_at(&book, "Early", datetime!(2024-03-01 10:00 +5)).await?;
    let late = create_contest_at(&book, "Late", datetime!(2024-03-01 08:00 UTC)).await?;

    assert_eq!(early.timestamp.offset(), UtcOffset::UTC);
    assert_eq!(early.timestamp, datetime!(2024-03-01 05:00 UTC));

    let ids: Vec<i64> = book.list_contests().await?.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![late.id, early.id]);

    let moved = book
        .update_contest(
            late.id,
            ContestEdit {
                timestamp: Some(datetime!(2024-03-01 06:00 +3)),
                ..Default::default()
            },
        )
        .await?;
    assert_eq!(moved.timestamp, datetime!(2024-03-01 03:00 UTC));
    assert_eq!(moved.timestamp.offset(), UtcOffset::UTC);

    let ids: Vec<i64> = book.list_contests().await?.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![early.id, late.id]);
    Ok(())
}
