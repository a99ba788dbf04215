use super::*;

/// Tests that two creates succeed with distinct, increasing ids.
///
/// Expected: Ok for both, second id greater than first
#[tokio::test]
async fn creates_users_with_increasing_ids() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UserService::new(db);
    let first = service
        .create(CreateUserParam {
            name: "Ada".to_string(),
            age: Some(36),
            budget: None,
        })
        .await?;
    let second = service
        .create(CreateUserParam {
            name: "Grace".to_string(),
            age: None,
            budget: Some(80.0),
        })
        .await?;

    assert_ne!(first.userid, second.userid);
    assert!(second.userid > first.userid);
    assert_eq!(entity::prelude::SingleUser::find().count(db).await?, 2);

    Ok(())
}
