use backend_test_support::unique_helpers::unique_username;
use scorebook::ErrorCode;

use crate::support::build_test_scorebook;
use crate::support::factory::create_player;

#[tokio::test]
async fn register_trims_names() -> Result<(), Box<dyn std::error::Error>> {
    let book = build_test_scorebook().await?;
    let name = unique_username("susan");

    let player = book
        .register_player(
            &format!("  {name} "),
            Some(" Susan ".to_string()),
            Some("   ".to_string()),
        )
        .await?;

    assert_eq!(player.username, name);
    assert_eq!(player.forename.as_deref(), Some("Susan"));
    assert_eq!(player.surname, None);
    assert_eq!(book.find_player_by_username(&name).await?, player);
    Ok(())
}

#[tokio::test]
async fn duplicate_username_is_conflict() -> Result<(), Box<dyn std::error::Error>> {
    let book = build_test_scorebook().await?;
    let first = create_player(&book, "dup").await?;

    let err = book
        .register_player(&first.username, None, None)
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::UsernameTaken);
    assert_eq!(err.status(), 409);
    Ok(())
}

#[tokio::test]
async fn blank_or_long_username_is_invalid() -> Result<(), Box<dyn std::error::Error>> {
    let book = build_test_scorebook().await?;

    let long = "x".repeat(51);
    for bad in ["", "   ", long.as_str()] {
        let err = book.register_player(bad, None, None).await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidUsername);
    }
    Ok(())
}

#[tokio::test]
async fn owner_can_rename() -> Result<(), Box<dyn std::error::Error>> {
    let book = build_test_scorebook().await?;
    let player = create_player(&book, "before").await?;
    let new_name = unique_username("after");

    let renamed = book.rename_player(player.id, player.id, &new_name).await?;
    assert_eq!(renamed.id, player.id);
    assert_eq!(renamed.username, new_name);
    assert_eq!(book.find_player(player.id).await?.username, new_name);

    let err = book
        .find_player_by_username(&player.username)
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::PlayerNotFound);
    Ok(())
}

#[tokio::test]
async fn rename_by_someone_else_is_forbidden() -> Result<(), Box<dyn std::error::Error>> {
    let book = build_test_scorebook().await?;
    let owner = create_player(&book, "owner").await?;
    let other = create_player(&book, "other").await?;

    let err = book
        .rename_player(other.id, owner.id, &unique_username("hijack"))
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::Forbidden);
    assert_eq!(err.status(), 403);
    assert_eq!(book.find_player(owner.id).await?.username, owner.username);
    Ok(())
}

#[tokio::test]
async fn rename_to_taken_name_is_conflict() -> Result<(), Box<dyn std::error::Error>> {
    let book = build_test_scorebook().await?;
    let a = create_player(&book, "a").await?;
    let b = create_player(&book, "b").await?;

    let err = book.rename_player(a.id, a.id, &b.username).await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::UsernameTaken);

    // renaming to your own name is a no-op
    let same = book.rename_player(a.id, a.id, &a.username).await?;
    assert_eq!(same, a);
    Ok(())
}

#[tokio::test]
async fn missing_player_is_not_found() -> Result<(), Box<dyn std::error::Error>> {
    let book = build_test_scorebook().await?;

    let err = book.find_player(999).await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::PlayerNotFound);

    let err = book
        .rename_player(999, 999, "ghost")
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::PlayerNotFound);
    Ok(())
}
