use super::*;

/// Tests that deleting a user removes every dependent row.
///
/// Verifies that membership, favorite game, preferred genre and preferred mechanic
/// rows are gone along with the user, while the group and game remain.
///
/// Expected: Ok(Some) with the deleted user, no rows left referencing it
#[tokio::test]
async fn deletes_user_and_dependent_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, game) = factory::helpers::create_user_with_preferences(db, 3, 7).await?;
    let group = factory::create_group(db).await?;
    factory::create_membership(db, user.userid, group.groupid).await?;

    let repo = UserRepository::new(db);
    let deleted = repo.delete(user.userid).await?.unwrap();

    assert_eq!(deleted.userid, user.userid);
    assert_eq!(deleted.name, user.name);

    assert!(entity::prelude::SingleUser::find_by_id(user.userid)
        .one(db)
        .await?
        .is_none());
    let memberships = entity::prelude::InGroup::find()
        .filter(entity::in_group::Column::Userid.eq(user.userid))
        .count(db)
        .await?;
    assert_eq!(memberships, 0);
    assert!(entity::prelude::UserFavoriteGame::find_by_id(user.userid)
        .one(db)
        .await?
        .is_none());
    assert!(entity::prelude::UserPreferredGenre::find_by_id(user.userid)
        .one(db)
        .await?
        .is_none());
    assert!(entity::prelude::UserPreferredMechanic::find_by_id(user.userid)
        .one(db)
        .await?
        .is_none());

    assert!(entity::prelude::GroupTeam::find_by_id(group.groupid)
        .one(db)
        .await?
        .is_some());
    assert!(entity::prelude::Boardgame::find_by_id(game.gameid)
        .one(db)
        .await?
        .is_some());

    Ok(())
}

/// Tests that other users' rows survive a delete.
///
/// Expected: the second user's membership and preference remain
#[tokio::test]
async fn leaves_other_users_untouched() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (doomed, group) = factory::helpers::create_user_in_group(db).await?;
    let survivor = factory::create_user(db).await?;
    factory::create_membership(db, survivor.userid, group.groupid).await?;
    factory::create_preferred_genre(db, survivor.userid, 5).await?;

    let repo = UserRepository::new(db);
    repo.delete(doomed.userid).await?;

    let memberships = entity::prelude::InGroup::find()
        .filter(entity::in_group::Column::Groupid.eq(group.groupid))
        .all(db)
        .await?;
    assert_eq!(memberships.len(), 1);
    assert_eq!(memberships[0].userid, survivor.userid);
    assert!(entity::prelude::UserPreferredGenre::find_by_id(survivor.userid)
        .one(db)
        .await?
        .is_some());

    Ok(())
}

/// Tests deleting a user that does not exist.
///
/// Expected: Ok(None) and no rows removed
#[tokio::test]
async fn returns_none_for_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _group) = factory::helpers::create_user_in_group(db).await?;

    let repo = UserRepository::new(db);
    let result = repo.delete(user.userid + 100).await?;

    assert!(result.is_none());
    let users = entity::prelude::SingleUser::find().count(db).await?;
    assert_eq!(users, 1);
    let memberships = entity::prelude::InGroup::find().count(db).await?;
    assert_eq!(memberships, 1);

    Ok(())
}
