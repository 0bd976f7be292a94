use super::*;

/// Tests the email existence check used before registration writes.
///
/// Expected: true for a registered email, false otherwise
#[tokio::test]
async fn reports_registered_and_free_emails() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db).email("taken@example.com").build().await?;

    let repo = UserRepository::new(db);

    assert!(repo.email_exists("taken@example.com").await?);
    assert!(!repo.email_exists("free@example.com").await?);

    Ok(())
}
