use super::*;

/// Tests joining a group for the first time.
///
/// Expected: Ok with newly_joined set and one membership row stored
#[tokio::test]
async fn inserts_new_membership() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let group = factory::create_group(db).await?;

    let repo = MembershipRepository::new(db);
    let joined = repo.join(user.userid, group.groupid).await?;

    assert!(joined.newly_joined);
    assert_eq!(joined.membership.userid, user.userid);
    assert_eq!(joined.membership.groupid, group.groupid);
    assert_eq!(entity::prelude::InGroup::find().count(db).await?, 1);

    Ok(())
}

/// Tests that joining the same group twice keeps a single row.
///
/// Expected: second join succeeds with newly_joined unset, one row total
#[tokio::test]
async fn joining_twice_keeps_one_row() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let group = factory::create_group(db).await?;

    let repo = MembershipRepository::new(db);
    repo.join(user.userid, group.groupid).await?;
    let second = repo.join(user.userid, group.groupid).await?;

    assert!(!second.newly_joined);
    assert_eq!(entity::prelude::InGroup::find().count(db).await?, 1);

    Ok(())
}

/// Tests joining when the membership row was stored by another writer first.
///
/// Expected: Ok with newly_joined unset and no error from the primary key
#[tokio::test]
async fn existing_row_is_not_an_error() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, group) = factory::helpers::create_user_in_group(db).await?;

    let repo = MembershipRepository::new(db);
    let joined = repo.join(user.userid, group.groupid).await?;

    assert!(!joined.newly_joined);
    assert_eq!(entity::prelude::InGroup::find().count(db).await?, 1);

    Ok(())
}

/// Tests two joins of the same pair issued concurrently.
///
/// Expected: both succeed, exactly one reports a new membership, one row stored
#[tokio::test]
async fn concurrent_joins_insert_once() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let group = factory::create_group(db).await?;

    let first_repo = MembershipRepository::new(db);
    let second_repo = MembershipRepository::new(db);
    let (first, second) = tokio::join!(
        first_repo.join(user.userid, group.groupid),
        second_repo.join(user.userid, group.groupid),
    );
    let (first, second) = (first?, second?);

    assert!(first.newly_joined != second.newly_joined);
    assert_eq!(entity::prelude::InGroup::find().count(db).await?, 1);

    Ok(())
}
