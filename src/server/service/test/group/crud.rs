use super::*;

/// Tests creating a group and finding it by a differently-cased name.
///
/// Expected: the found group matches the created one
#[tokio::test]
async fn creates_and_finds_group_by_name() -> Result<(), AppError> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = GroupService::new(db);
    let created = service
        .create(CreateGroupParam {
            group_name: "Cardboard Crusaders".to_string(),
            age_limit: None,
            budget: Some(150.0),
        })
        .await?;

    let found = service
        .find(GroupLookup::Name("cardboard crusaders ".to_string()))
        .await?
        .unwrap();

    assert_eq!(found, created);

    Ok(())
}

/// Tests finding a group by an unknown id.
///
/// Expected: Ok(None)
#[tokio::test]
async fn find_returns_none_for_unknown_id() -> Result<(), AppError> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = GroupService::new(db);
    assert!(service.find(GroupLookup::Id(17)).await?.is_none());

    Ok(())
}

/// Tests renaming an unknown group.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn update_name_fails_for_unknown_group() -> Result<(), AppError> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = GroupService::new(db);
    let result = service
        .update_name(UpdateGroupNameParam {
            groupid: 2,
            group_name: "Renamed".to_string(),
        })
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests deleting a group with members.
///
/// Expected: Ok with the deleted group and no memberships left
#[tokio::test]
async fn delete_removes_memberships() -> Result<(), AppError> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, group) = factory::helpers::create_user_in_group(db).await?;

    let service = GroupService::new(db);
    let deleted = service.delete(group.groupid).await?;

    assert_eq!(deleted.groupid, group.groupid);
    assert_eq!(entity::prelude::InGroup::find().count(db).await?, 0);
    assert_eq!(entity::prelude::GroupTeam::find().count(db).await?, 0);

    Ok(())
}

/// Tests deleting an unknown group.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn delete_fails_for_unknown_group() -> Result<(), AppError> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = GroupService::new(db);
    let result = service.delete(99).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
