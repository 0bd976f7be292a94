use super::*;

use entity::enums::UserRole;

/// Tests creating a new account.
///
/// Expected: Ok with the default USER role and an active account
#[tokio::test]
async fn creates_new_account() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParam {
            username: "hmai".to_string(),
            email: "hmai@example.com".to_string(),
            password_hash: "$argon2id$hash".to_string(),
            full_name: Some("Hoang Mai".to_string()),
        })
        .await?;

    assert_eq!(user.username, "hmai");
    assert_eq!(user.email, "hmai@example.com");
    assert_eq!(user.full_name.as_deref(), Some("Hoang Mai"));
    assert_eq!(user.role, UserRole::User);
    assert!(user.is_active);

    Ok(())
}

/// Tests that the username unique constraint holds at the storage level.
///
/// Expected: Err on the second insert with the same username
#[tokio::test]
async fn rejects_duplicate_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db).username("taken").build().await?;

    let repo = UserRepository::new(db);
    let result = repo
        .create(CreateUserParam {
            username: "taken".to_string(),
            email: "other@example.com".to_string(),
            password_hash: "$argon2id$hash".to_string(),
            full_name: None,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
