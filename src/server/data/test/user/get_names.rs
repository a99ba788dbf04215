use super::*;

/// Tests that names come back in id order and respect the limit.
///
/// Expected: the first `limit` names by id
#[tokio::test]
async fn returns_names_in_id_order_up_to_limit() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for name in ["Uno", "Dos", "Tres"] {
        factory::user::create_user_with_name(db, name).await?;
    }

    let repo = UserRepository::new(db);
    let names = repo.get_names(2).await?;

    assert_eq!(names, vec!["Uno".to_string(), "Dos".to_string()]);

    Ok(())
}
