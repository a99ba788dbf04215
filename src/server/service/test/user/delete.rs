use super::*;

/// Tests that a deleted user can no longer be found.
///
/// Expected: Ok on delete, then find returns None and dependent rows are gone
#[tokio::test]
async fn deleted_user_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _game) = factory::helpers::create_user_with_preferences(db, 1, 1).await?;
    let group = factory::create_group(db).await?;
    factory::create_membership(db, user.userid, group.groupid).await?;

    let service = UserService::new(db);
    let deleted = service.delete(user.userid).await?;

    assert_eq!(deleted.userid, user.userid);
    assert!(service.find(UserLookup::Id(user.userid)).await?.is_none());
    assert_eq!(entity::prelude::InGroup::find().count(db).await?, 0);
    assert_eq!(entity::prelude::UserFavoriteGame::find().count(db).await?, 0);
    assert_eq!(entity::prelude::UserPreferredGenre::find().count(db).await?, 0);
    assert_eq!(entity::prelude::UserPreferredMechanic::find().count(db).await?, 0);

    Ok(())
}

/// Tests deleting an unknown user.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_unknown_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UserService::new(db);
    let result = service.delete(3).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests listing names, capped at one hundred.
///
/// Expected: 100 names, starting with the first user created
#[tokio::test]
async fn list_names_caps_at_one_hundred() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::user::create_user_with_name(db, "Player 0").await?;
    for index in 1..105 {
        factory::user::create_user_with_name(db, format!("Player {}", index)).await?;
    }

    let service = UserService::new(db);
    let names = service.list_names().await?;

    assert_eq!(names.len(), 100);
    assert_eq!(names[0], first.name);
    assert_eq!(names[99], "Player 99");

    Ok(())
}
