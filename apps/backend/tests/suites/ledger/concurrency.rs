use scorebook::db::txn::with_txn;
use scorebook::services::LedgerService;

use crate::support::build_test_scorebook;
use crate::support::factory::player_and_contest;

#[tokio::test]
async fn concurrent_upserts_on_one_triple_leave_one_row() -> Result<(), Box<dyn std::error::Error>>
{
    let book = build_test_scorebook().await?;
    let (player, contest) = player_and_contest(&book).await?;
    let (pid, cid) = (player.id, contest.id);

    let (a, b) = tokio::join!(
        book.upsert_turn_score(pid, cid, 7, 11),
        book.upsert_turn_score(pid, cid, 7, 13),
    );
    let (a, b) = (a?, b?);
    assert_eq!(a.id, b.id);

    let entries = book.list_entries(pid, cid).await?;
    assert_eq!(entries.len(), 1);
    assert!(entries[0].score_value == 11 || entries[0].score_value == 13);
    Ok(())
}

#[tokio::test]
async fn repeated_upserts_in_one_transaction() -> Result<(), Box<dyn std::error::Error>> {
    let book = build_test_scorebook().await?;
    let (player, contest) = player_and_contest(&book).await?;
    let (pid, cid) = (player.id, contest.id);

    let last = with_txn(book.state(), move |txn| {
        Box::pin(async move {
            let ledger = LedgerService::new();
            let mut last = None;
            for score in [1, 2, 3, 4] {
                last = Some(ledger.upsert_turn_score(txn, pid, cid, 2, score).await?);
            }
            Ok(last)
        })
    })
    .await?;

    let entries = book.list_entries(pid, cid).await?;
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].score_value, 4);
    assert_eq!(last.map(|e| e.id), Some(entries[0].id));
    Ok(())
}
