use super::*;

/// Tests logging in with the username and with the email.
///
/// Expected: Ok with a fresh token in both cases
#[tokio::test]
async fn accepts_username_or_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let tokens = TokenService::new("test-secret", 24);
    let service = AuthService::new(db, &tokens);

    service
        .register(register_request("mnguyen", "mnguyen@example.com"))
        .await
        .unwrap();

    let by_username = service
        .login(LoginRequest {
            username: "mnguyen".to_string(),
            password: "correct-horse".to_string(),
        })
        .await;
    assert!(by_username.is_ok());

    let by_email = service
        .login(LoginRequest {
            username: "mnguyen@example.com".to_string(),
            password: "correct-horse".to_string(),
        })
        .await;
    assert!(by_email.is_ok());

    Ok(())
}

/// Tests a wrong password.
///
/// Expected: the same BadCredentials error an unknown identifier gets
#[tokio::test]
async fn rejects_wrong_password() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let tokens = TokenService::new("test-secret", 24);
    let service = AuthService::new(db, &tokens);

    service
        .register(register_request("mnguyen", "mnguyen@example.com"))
        .await
        .unwrap();

    let result = service
        .login(LoginRequest {
            username: "mnguyen".to_string(),
            password: "wrong-horse".to_string(),
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::BadCredentials(_)))
    ));

    Ok(())
}

/// Tests an identifier that matches no account.
///
/// Expected: BadCredentials, indistinguishable from a wrong password
#[tokio::test]
async fn rejects_unknown_identifier() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let tokens = TokenService::new("test-secret", 24);
    let result = AuthService::new(db, &tokens)
        .login(LoginRequest {
            username: "nobody".to_string(),
            password: "whatever".to_string(),
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::BadCredentials(_)))
    ));

    Ok(())
}

/// Tests a deactivated account.
///
/// Expected: AccountDisabled before any password check
#[tokio::test]
async fn rejects_deactivated_account() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db)
        .username("dormant")
        .active(false)
        .build()
        .await?;

    let tokens = TokenService::new("test-secret", 24);
    let result = AuthService::new(db, &tokens)
        .login(LoginRequest {
            username: "dormant".to_string(),
            password: "whatever".to_string(),
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccountDisabled(_)))
    ));

    Ok(())
}
