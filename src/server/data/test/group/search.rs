use super::*;

/// Tests the group name substring filter and id ordering.
///
/// Expected: matching groups ordered by id
#[tokio::test]
async fn filters_by_group_name_substring() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let late = factory::group::create_group_with_name(db, "Late Night Games").await?;
    factory::group::create_group_with_name(db, "Morning Coffee").await?;
    let weekend = factory::group::create_group_with_name(db, "Weekend GAMERS").await?;

    let repo = GroupRepository::new(db);
    let groups = repo.search(Some("game")).await?;

    let ids: Vec<i32> = groups.iter().map(|g| g.groupid).collect();
    assert_eq!(ids, vec![late.groupid, weekend.groupid]);

    let everything = repo.search(None).await?;
    assert_eq!(everything.len(), 3);

    Ok(())
}
