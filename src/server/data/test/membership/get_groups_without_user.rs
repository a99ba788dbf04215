use super::*;

/// Tests listing the groups a user does not belong to.
///
/// Expected: every other group, ordered by name
#[tokio::test]
async fn returns_other_groups_ordered_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let joined = factory::group::create_group_with_name(db, "Joined").await?;
    factory::group::create_group_with_name(db, "Quiet Corner").await?;
    factory::group::create_group_with_name(db, "Castle Crew").await?;
    factory::create_membership(db, user.userid, joined.groupid).await?;

    let repo = MembershipRepository::new(db);
    let groups = repo.get_groups_without_user(user.userid).await?;

    let names: Vec<&str> = groups.iter().map(|g| g.group_name.as_str()).collect();
    assert_eq!(names, vec!["Castle Crew", "Quiet Corner"]);

    Ok(())
}

/// Tests that joined and not-joined groups partition all groups.
///
/// Expected: union equals every group id, intersection is empty
#[tokio::test]
async fn partitions_all_groups_with_groups_of_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other_user = factory::create_user(db).await?;
    let mut all_ids = HashSet::new();
    for index in 0..5 {
        let group = factory::create_group(db).await?;
        all_ids.insert(group.groupid);
        if index % 2 == 0 {
            factory::create_membership(db, user.userid, group.groupid).await?;
        }
        factory::create_membership(db, other_user.userid, group.groupid).await?;
    }

    let repo = MembershipRepository::new(db);
    let inside: HashSet<i32> = repo
        .get_groups_of_user(user.userid)
        .await?
        .into_iter()
        .map(|g| g.groupid)
        .collect();
    let outside: HashSet<i32> = repo
        .get_groups_without_user(user.userid)
        .await?
        .into_iter()
        .map(|g| g.groupid)
        .collect();

    assert_eq!(inside.len(), 3);
    assert!(inside.is_disjoint(&outside));
    let union: HashSet<i32> = inside.union(&outside).copied().collect();
    assert_eq!(union, all_ids);

    Ok(())
}
