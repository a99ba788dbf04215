use super::*;

/// Tests leaving a group the user belongs to.
///
/// Expected: Ok(Some) with the removed pair and no row left
#[tokio::test]
async fn removes_membership() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, group) = factory::helpers::create_user_in_group(db).await?;

    let repo = MembershipRepository::new(db);
    let removed = repo.leave(user.userid, group.groupid).await?.unwrap();

    assert_eq!(removed.userid, user.userid);
    assert_eq!(removed.groupid, group.groupid);
    assert!(entity::prelude::InGroup::find_by_id((user.userid, group.groupid))
        .one(db)
        .await?
        .is_none());

    Ok(())
}

/// Tests leaving a group the user is not in.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_when_not_a_member() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let group = factory::create_group(db).await?;

    let repo = MembershipRepository::new(db);
    let removed = repo.leave(user.userid, group.groupid).await?;

    assert!(removed.is_none());

    Ok(())
}
