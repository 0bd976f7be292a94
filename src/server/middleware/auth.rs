//! Bearer token authentication guard.
//!
//! Controllers construct an [`AuthGuard`] from the request headers and call
//! [`AuthGuard::require`] on routes that need an authenticated user. The guard
//! validates the JWT, resolves its subject against the database, and enforces
//! role requirements.

use axum::http::{header, HeaderMap};
use entity::enums::UserRole;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    state::AppState,
};

pub enum Permission {
    /// Satisfied by moderators and admins.
    Moderator,
    Admin,
}

pub struct AuthGuard<'a> {
    state: &'a AppState,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(state: &'a AppState, headers: &'a HeaderMap) -> Self {
        Self { state, headers }
    }

    /// Authenticates the request and checks the required permissions.
    ///
    /// # Arguments
    /// - `permissions` - Role requirements, all of which must hold
    ///
    /// # Returns
    /// - `Ok(Model)` - The authenticated, active user
    /// - `Err(AppError)` - Missing/invalid token, unknown subject, disabled
    ///   account, or insufficient role
    pub async fn require(
        &self,
        permissions: &[Permission],
    ) -> Result<entity::user::Model, AppError> {
        let token = bearer_token(self.headers).ok_or(AuthError::MissingToken)?;
        let claims = self.state.tokens.verify(token)?;

        let user_repo = UserRepository::new(&self.state.db);

        let Some(user) = user_repo.find_by_id(claims.sub).await? else {
            return Err(AuthError::UserNotInDatabase(claims.sub).into());
        };

        if !user.is_active {
            return Err(AuthError::AccountDisabled(user.id).into());
        }

        for permission in permissions {
            match permission {
                Permission::Moderator => {
                    if !matches!(user.role, UserRole::Moderator | UserRole::Admin) {
                        return Err(AuthError::AccessDenied(
                            user.id,
                            "User lacks required moderator role".to_string(),
                        )
                        .into());
                    }
                }
                Permission::Admin => {
                    if user.role != UserRole::Admin {
                        return Err(AuthError::AccessDenied(
                            user.id,
                            "User lacks required admin role".to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }
}

/// Extracts the token from an `Authorization: Bearer <token>` header.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}
