use super::*;

/// Tests that all groups come back ordered by name.
///
/// Expected: names in ascending order regardless of creation order
#[tokio::test]
async fn returns_groups_ordered_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for name in ["Wingspan Wednesdays", "Ark Nova Society", "Hanabi Hangout"] {
        factory::group::create_group_with_name(db, name).await?;
    }

    let repo = GroupRepository::new(db);
    let groups = repo.get_all().await?;

    let names: Vec<&str> = groups.iter().map(|g| g.group_name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Ark Nova Society", "Hanabi Hangout", "Wingspan Wednesdays"]
    );

    Ok(())
}
