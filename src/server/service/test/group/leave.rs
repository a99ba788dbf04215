use super::*;

/// Tests leaving a group by username.
///
/// Expected: Ok with the removed pair
#[tokio::test]
async fn removes_membership() -> Result<(), AppError> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, group) = factory::helpers::create_user_in_group(db).await?;

    let service = GroupService::new(db);
    let removed = service
        .leave(LeaveGroupParam {
            username: user.name.to_uppercase(),
            groupid: group.groupid,
        })
        .await?;

    assert_eq!(removed.userid, user.userid);
    assert_eq!(entity::prelude::InGroup::find().count(db).await?, 0);

    Ok(())
}

/// Tests leaving a group the user never joined.
///
/// Expected: Err(AppError::NotFound) for the membership
#[tokio::test]
async fn fails_when_not_a_member() -> Result<(), AppError> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let group = factory::create_group(db).await?;

    let service = GroupService::new(db);
    let result = service
        .leave(LeaveGroupParam {
            username: user.name.clone(),
            groupid: group.groupid,
        })
        .await;

    assert!(matches!(result, Err(AppError::NotFound(ref msg)) if msg == "Membership not found"));

    Ok(())
}

/// Tests leaving with an unknown username.
///
/// Expected: Err(AppError::NotFound) for the user
#[tokio::test]
async fn fails_for_unknown_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let group = factory::create_group(db).await?;

    let service = GroupService::new(db);
    let result = service
        .leave(LeaveGroupParam {
            username: "ghost".to_string(),
            groupid: group.groupid,
        })
        .await;

    assert!(matches!(result, Err(AppError::NotFound(ref msg)) if msg == "User not found"));

    Ok(())
}
