use super::*;

/// Tests replacing a user's budget.
///
/// Expected: Ok(Some) with the new budget
#[tokio::test]
async fn replaces_budget() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db).budget(10.0).build().await?;

    let repo = UserRepository::new(db);
    let updated = repo
        .update_budget(UpdateBudgetParam {
            userid: user.userid,
            budget: 75.25,
        })
        .await?
        .unwrap();

    assert_eq!(updated.budget, Some(75.25));

    Ok(())
}

/// Tests replacing the budget of a user that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo
        .update_budget(UpdateBudgetParam {
            userid: 42,
            budget: 1.0,
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}
