use super::*;

/// Tests the username existence check used before registration writes.
///
/// Expected: true for a taken username, false otherwise
#[tokio::test]
async fn reports_taken_and_free_usernames() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db).username("taken").build().await?;

    let repo = UserRepository::new(db);

    assert!(repo.username_exists("taken").await?);
    assert!(!repo.username_exists("free").await?);

    Ok(())
}
