use super::*;

/// Tests updating the info of an unknown user.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn update_info_fails_for_unknown_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UserService::new(db);
    let result = service
        .update_info(UpdateUserInfoParam {
            userid: 1,
            name: Some("Nobody".to_string()),
            age: None,
        })
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests updating the budget of an existing user.
///
/// Expected: Ok with the new budget
#[tokio::test]
async fn update_budget_returns_updated_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let service = UserService::new(db);
    let updated = service
        .update_budget(UpdateBudgetParam {
            userid: user.userid,
            budget: 42.0,
        })
        .await?;

    assert_eq!(updated.budget, Some(42.0));

    Ok(())
}

/// Tests updating the budget of an unknown user.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn update_budget_fails_for_unknown_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UserService::new(db);
    let result = service
        .update_budget(UpdateBudgetParam {
            userid: 8,
            budget: 1.0,
        })
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
