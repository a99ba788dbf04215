use super::*;

/// Tests that an empty query returns the whole catalogue ordered by title.
///
/// Expected: every game, titles ascending
#[tokio::test]
async fn returns_all_games_ordered_by_title() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for title in ["Wingspan", "Azul", "Root"] {
        factory::boardgame::create_boardgame_with_title(db, title, "A game").await?;
    }

    let repo = BoardgameRepository::new(db);
    let games = repo.search(None).await?;

    let titles: Vec<&str> = games.iter().map(|g| g.title.as_str()).collect();
    assert_eq!(titles, vec!["Azul", "Root", "Wingspan"]);

    Ok(())
}

/// Tests matching on title or description, ignoring case.
///
/// Expected: games whose title or description contains the query
#[tokio::test]
async fn matches_title_or_description() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::boardgame::create_boardgame_with_title(db, "Terraforming Mars", "Engine building")
        .await?;
    factory::boardgame::create_boardgame_with_title(db, "Everdell", "Woodland critters build a city")
        .await?;
    factory::boardgame::create_boardgame_with_title(db, "Codenames", "Word association").await?;

    let repo = BoardgameRepository::new(db);
    let games = repo.search(Some("BUILD")).await?;

    let titles: Vec<&str> = games.iter().map(|g| g.title.as_str()).collect();
    assert_eq!(titles, vec!["Everdell", "Terraforming Mars"]);

    let by_title = repo.search(Some("mars")).await?;
    assert_eq!(by_title.len(), 1);

    Ok(())
}
