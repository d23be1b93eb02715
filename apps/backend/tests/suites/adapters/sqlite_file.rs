use std::env;

use scorebook::config::db::{DbKind, DbProfile};
use scorebook::infra::state::build_state;
use scorebook::Scorebook;
use serial_test::serial;
use tempfile::TempDir;

/// Data written through one pool is visible to a fresh pool on the same file.
#[tokio::test]
#[serial]
async fn sqlite_file_persists_across_connections() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    env::set_var("SQLITE_DB_DIR", dir.path());
    env::set_var("TEST_DB", "scorebook_test");

    let first = Scorebook::new(
        build_state()
            .with_db(DbProfile::Test)
            .with_kind(DbKind::SqliteFile)
            .with_migrations()
            .build()
            .await?,
    );
    let player = first.register_player("file_user", None, None).await?;
    let contest = first.create_contest("Rivals", "Home", None).await?;
    first.upsert_turn_score(player.id, contest.id, 1, 21).await?;
    drop(first);

    let second = Scorebook::new(
        build_state()
            .with_db(DbProfile::Test)
            .with_kind(DbKind::SqliteFile)
            .with_migrations()
            .build()
            .await?,
    );
    let sheet = second.turn_sheet(player.id, contest.id).await?;
    assert_eq!(sheet.get(1), Some(21));
    assert!(dir.path().join("scorebook_test.sqlite").exists());

    env::remove_var("SQLITE_DB_DIR");
    env::remove_var("TEST_DB");
    Ok(())
}

#[tokio::test]
#[serial]
async fn test_profile_rejects_unsafe_db_name() {
    env::set_var("TEST_DB", "scorebook");

    let result = build_state()
        .with_db(DbProfile::Test)
        .with_kind(DbKind::SqliteFile)
        .build()
        .await;
    assert!(result.unwrap_err().to_string().contains("_test"));

    env::remove_var("TEST_DB");
}
