use super::*;

/// Tests renaming a group.
///
/// Expected: Ok(Some) with the new name, other fields unchanged
#[tokio::test]
async fn renames_group() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let group = factory::group::GroupFactory::new(db)
        .group_name("Old Name")
        .age_limit(12)
        .build()
        .await?;

    let repo = GroupRepository::new(db);
    let renamed = repo
        .update_name(UpdateGroupNameParam {
            groupid: group.groupid,
            group_name: "New Name".to_string(),
        })
        .await?
        .unwrap();

    assert_eq!(renamed.groupid, group.groupid);
    assert_eq!(renamed.group_name, "New Name");
    assert_eq!(renamed.age_limit, Some(12));

    Ok(())
}

/// Tests renaming a group that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_group() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GroupRepository::new(db);
    let result = repo
        .update_name(UpdateGroupNameParam {
            groupid: 77,
            group_name: "Nobody".to_string(),
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}
