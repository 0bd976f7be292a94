use super::*;

/// Tests that an issued token verifies and carries the right claims.
///
/// Expected: Ok with subject and username matching the account
#[tokio::test]
async fn issued_token_round_trips() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserFactory::new(db).username("singer").build().await?;

    let tokens = TokenService::new("test-secret", 24);
    let token = tokens.issue(&user).unwrap();

    let claims = tokens.verify(&token).unwrap();
    assert_eq!(claims.sub, user.id);
    assert_eq!(claims.username, "singer");
    assert!(claims.exp > claims.iat);

    Ok(())
}

/// Tests that an expired token is rejected.
///
/// Expected: Err past the default leeway
#[tokio::test]
async fn expired_token_is_rejected() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserFactory::new(db).build().await?;

    let tokens = TokenService::new("test-secret", -1);
    let token = tokens.issue(&user).unwrap();

    assert!(tokens.verify(&token).is_err());

    Ok(())
}

/// Tests that a token signed with a different secret is rejected.
///
/// Expected: Err on signature mismatch
#[tokio::test]
async fn foreign_signature_is_rejected() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserFactory::new(db).build().await?;

    let token = TokenService::new("other-secret", 24).issue(&user).unwrap();

    assert!(TokenService::new("test-secret", 24).verify(&token).is_err());

    Ok(())
}

/// Tests that garbage input is rejected.
///
/// Expected: Err without panic
#[tokio::test]
async fn garbage_is_rejected() {
    let tokens = TokenService::new("test-secret", 24);

    assert!(tokens.verify("not-a-token").is_err());
    assert!(tokens.verify("").is_err());
}
