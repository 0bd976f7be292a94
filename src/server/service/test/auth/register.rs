use super::*;

/// Tests a successful registration.
///
/// Expected: Ok with a verifiable token and the password stored only as a hash
#[tokio::test]
async fn registers_and_issues_token() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let tokens = TokenService::new("test-secret", 24);
    let service = AuthService::new(db, &tokens);

    let (token, user) = service
        .register(register_request("mnguyen", "mnguyen@example.com"))
        .await
        .unwrap();

    assert_eq!(tokens.verify(&token).unwrap().sub, user.id);
    assert_ne!(user.password_hash, "correct-horse");
    assert!(user.password_hash.starts_with("$argon2id$"));

    Ok(())
}

/// Tests that a taken username is rejected before any write.
///
/// Expected: BadRequest and no second account row
#[tokio::test]
async fn rejects_duplicate_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db).username("mnguyen").build().await?;

    let tokens = TokenService::new("test-secret", 24);
    let result = AuthService::new(db, &tokens)
        .register(register_request("mnguyen", "fresh@example.com"))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests that a registered email is rejected before any write.
///
/// Expected: BadRequest
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db).email("taken@example.com").build().await?;

    let tokens = TokenService::new("test-secret", 24);
    let result = AuthService::new(db, &tokens)
        .register(register_request("fresh", "taken@example.com"))
        .await;

    match result {
        Err(AppError::BadRequest(message)) => assert_eq!(message, "Email is already in use"),
        other => panic!("expected bad request, got {other:?}"),
    }

    Ok(())
}

/// Tests that username bounds count characters, not bytes.
///
/// Expected: a short accented username registers even though its UTF-8
/// byte length exceeds the limit arithmetic
#[tokio::test]
async fn username_bounds_count_characters() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    // 50 characters, 100 bytes in UTF-8.
    let username = "ơ".repeat(50);

    let tokens = TokenService::new("test-secret", 24);
    let (_, user) = AuthService::new(db, &tokens)
        .register(register_request(&username, "diacritic@example.com"))
        .await
        .unwrap();

    assert_eq!(user.username, username);

    Ok(())
}

/// Tests that invalid fields come back as one per-field error map.
///
/// Expected: Validation error naming every failing field at once
#[tokio::test]
async fn collects_field_errors() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let tokens = TokenService::new("test-secret", 24);
    let result = AuthService::new(db, &tokens)
        .register(RegisterRequest {
            username: "ab".to_string(),
            email: "not-an-email".to_string(),
            password: "short".to_string(),
            full_name: None,
        })
        .await;

    match result {
        Err(AppError::Validation(fields)) => {
            assert!(fields.contains_key("username"));
            assert!(fields.contains_key("email"));
            assert!(fields.contains_key("password"));
        }
        other => panic!("expected validation error, got {other:?}"),
    }

    Ok(())
}
