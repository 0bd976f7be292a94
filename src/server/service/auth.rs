//! Account registration and credential login.
//!
//! Passwords are hashed with Argon2id at registration and never leave the
//! data layer in plain form. Login accepts a username or an email address in
//! the same field and answers wrong identifier and wrong password identically.

use std::collections::HashMap;

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use sea_orm::DatabaseConnection;

use crate::{
    model::auth::{LoginRequest, RegisterRequest},
    server::{
        data::user::{CreateUserParam, UserRepository},
        error::{auth::AuthError, AppError},
        service::token::TokenService,
    },
};

/// Service handling registration and login.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService) -> Self {
        Self { db, tokens }
    }

    /// Registers a new account and returns it with a fresh bearer token.
    ///
    /// Field validation failures return the whole per-field error map at once.
    /// Duplicate username and email are checked before any write so the
    /// unique indexes only act as a storage backstop.
    ///
    /// # Arguments
    /// - `request` - Registration form fields
    ///
    /// # Returns
    /// - `Ok((token, user))` - Persisted account and its bearer token
    /// - `Err(AppError)` - Validation failure, duplicate identifier, or database error
    pub async fn register(
        &self,
        request: RegisterRequest,
    ) -> Result<(String, entity::user::Model), AppError> {
        validate_registration(&request)?;

        let user_repo = UserRepository::new(self.db);

        if user_repo.username_exists(&request.username).await? {
            return Err(AppError::BadRequest("Username is already taken".to_string()));
        }
        if user_repo.email_exists(&request.email).await? {
            return Err(AppError::BadRequest(
                "Email is already in use".to_string(),
            ));
        }

        let password_hash = hash_password(&request.password)?;

        let user = user_repo
            .create(CreateUserParam {
                username: request.username,
                email: request.email,
                password_hash,
                full_name: request.full_name,
            })
            .await?;

        let token = self.tokens.issue(&user)?;

        Ok((token, user))
    }

    /// Authenticates by username or email plus password.
    ///
    /// Unknown identifiers and wrong passwords both map to the same
    /// `BadCredentials` error. Deactivated accounts cannot log in.
    pub async fn login(
        &self,
        request: LoginRequest,
    ) -> Result<(String, entity::user::Model), AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_identifier(&request.username).await? else {
            return Err(AuthError::BadCredentials(request.username).into());
        };

        if !user.is_active {
            return Err(AuthError::AccountDisabled(user.id).into());
        }

        verify_password(&request.password, &user.password_hash)
            .map_err(|_| AuthError::BadCredentials(request.username))?;

        let token = self.tokens.issue(&user)?;

        Ok((token, user))
    }
}

/// Hashes a password with Argon2id and a random salt.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;

    Ok(hash.to_string())
}

/// Verifies a password against a stored Argon2 hash.
pub fn verify_password(password: &str, stored_hash: &str) -> Result<(), AuthError> {
    let parsed = PasswordHash::new(stored_hash)?;

    Ok(Argon2::default().verify_password(password.as_bytes(), &parsed)?)
}

fn validate_registration(request: &RegisterRequest) -> Result<(), AppError> {
    let mut errors = HashMap::new();

    let username = request.username.trim();
    if username.is_empty() {
        errors.insert("username".to_string(), "Username is required".to_string());
    } else if !(3..=50).contains(&username.chars().count()) {
        errors.insert(
            "username".to_string(),
            "Username must be between 3 and 50 characters".to_string(),
        );
    }

    let email = request.email.trim();
    let valid_email = email
        .split_once('@')
        .is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.'));
    if email.is_empty() {
        errors.insert("email".to_string(), "Email is required".to_string());
    } else if !valid_email {
        errors.insert("email".to_string(), "Email is not valid".to_string());
    }

    if request.password.chars().count() < 6 {
        errors.insert(
            "password".to_string(),
            "Password must be at least 6 characters".to_string(),
        );
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(errors))
    }
}
