use super::*;

/// Tests that deleting a group removes its memberships but not its members.
///
/// Expected: Ok(Some) with the deleted group, memberships gone, user kept
#[tokio::test]
async fn deletes_group_and_memberships() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, group) = factory::helpers::create_user_in_group(db).await?;
    let other = factory::create_group(db).await?;
    factory::create_membership(db, user.userid, other.groupid).await?;

    let repo = GroupRepository::new(db);
    let deleted = repo.delete(group.groupid).await?.unwrap();

    assert_eq!(deleted.groupid, group.groupid);
    assert!(entity::prelude::GroupTeam::find_by_id(group.groupid)
        .one(db)
        .await?
        .is_none());
    assert!(entity::prelude::InGroup::find_by_id((user.userid, group.groupid))
        .one(db)
        .await?
        .is_none());
    assert!(entity::prelude::InGroup::find_by_id((user.userid, other.groupid))
        .one(db)
        .await?
        .is_some());
    assert!(entity::prelude::SingleUser::find_by_id(user.userid)
        .one(db)
        .await?
        .is_some());

    Ok(())
}

/// Tests deleting a group that does not exist.
///
/// Expected: Ok(None) and nothing removed
#[tokio::test]
async fn returns_none_for_unknown_group() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_user_in_group(db).await?;

    let repo = GroupRepository::new(db);
    let result = repo.delete(12345).await?;

    assert!(result.is_none());
    assert_eq!(entity::prelude::GroupTeam::find().count(db).await?, 1);
    assert_eq!(entity::prelude::InGroup::find().count(db).await?, 1);

    Ok(())
}
