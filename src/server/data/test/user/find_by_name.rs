use super::*;

/// Tests that name lookups ignore case and surrounding whitespace.
///
/// Expected: Ok(Some) for a differently-cased, padded query
#[tokio::test]
async fn matches_case_and_whitespace_insensitively() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user_with_name(db, "Alice Smith").await?;

    let repo = UserRepository::new(db);
    let found = repo.find_by_name("  alice SMITH ").await?;

    assert_eq!(found.map(|u| u.userid), Some(user.userid));

    Ok(())
}

/// Tests that stored names with stray whitespace still match.
///
/// Expected: Ok(Some) for the trimmed query
#[tokio::test]
async fn matches_stored_name_with_padding() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user_with_name(db, " Bob ").await?;

    let repo = UserRepository::new(db);
    let found = repo.find_by_name("bob").await?;

    assert_eq!(found.map(|u| u.userid), Some(user.userid));

    Ok(())
}

/// Tests names with non-ASCII letters.
///
/// Expected: Ok(Some) for the exact spelling and for ASCII case changes around it
#[tokio::test]
async fn matches_non_ascii_names() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user_with_name(db, "Élodie").await?;

    let repo = UserRepository::new(db);

    assert_eq!(
        repo.find_by_name("Élodie").await?.map(|u| u.userid),
        Some(user.userid)
    );
    assert_eq!(
        repo.find_by_name(" ÉLODIE ").await?.map(|u| u.userid),
        Some(user.userid)
    );

    Ok(())
}

/// Tests that the lowest id wins when several users share a name.
///
/// Expected: Ok(Some) with the first created user
#[tokio::test]
async fn returns_first_match_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::user::create_user_with_name(db, "Sam").await?;
    factory::user::create_user_with_name(db, "sam").await?;

    let repo = UserRepository::new(db);
    let found = repo.find_by_name("SAM").await?;

    assert_eq!(found.map(|u| u.userid), Some(first.userid));

    Ok(())
}

/// Tests looking up a name nobody has.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let found = repo.find_by_name("nobody").await?;

    assert!(found.is_none());

    Ok(())
}
