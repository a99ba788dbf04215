use super::*;

/// Tests that setting a favorite game twice leaves one row with the second value.
///
/// Expected: the stored favorite is the second game
#[tokio::test]
async fn setting_favorite_twice_keeps_second_value() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let first = factory::create_boardgame(db).await?;
    let second = factory::create_boardgame(db).await?;

    let service = UserService::new(db);
    for gameid in [first.gameid, second.gameid] {
        service
            .set_preference(SetPreferenceParam {
                userid: user.userid,
                kind: PreferenceKind::FavoriteGame,
                target_id: gameid,
            })
            .await?;
    }

    let rows = entity::prelude::UserFavoriteGame::find().all(db).await?;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].gameid, second.gameid);

    Ok(())
}

/// Tests setting a favorite game that does not exist.
///
/// Expected: Err(AppError::NotFound) and no row stored
#[tokio::test]
async fn rejects_unknown_game() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let service = UserService::new(db);
    let result = service
        .set_preference(SetPreferenceParam {
            userid: user.userid,
            kind: PreferenceKind::FavoriteGame,
            target_id: 31337,
        })
        .await;

    assert!(matches!(result, Err(AppError::NotFound(ref msg)) if msg == "Game not found"));
    assert_eq!(entity::prelude::UserFavoriteGame::find().count(db).await?, 0);

    Ok(())
}

/// Tests setting a preference for a user that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn rejects_unknown_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UserService::new(db);
    let result = service
        .set_preference(SetPreferenceParam {
            userid: 5,
            kind: PreferenceKind::Mechanic,
            target_id: 3,
        })
        .await;

    assert!(matches!(result, Err(AppError::NotFound(ref msg)) if msg == "User not found"));

    Ok(())
}

/// Tests replacing a preferred genre.
///
/// Expected: Ok with the new genre id
#[tokio::test]
async fn replaces_genre() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::create_preferred_genre(db, user.userid, 1).await?;

    let service = UserService::new(db);
    let preference = service
        .set_preference(SetPreferenceParam {
            userid: user.userid,
            kind: PreferenceKind::Genre,
            target_id: 12,
        })
        .await?;

    assert_eq!(preference.target_id, 12);
    let stored = entity::prelude::UserPreferredGenre::find_by_id(user.userid)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.genreid, 12);

    Ok(())
}
