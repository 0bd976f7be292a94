use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::debug;

use crate::model::api::MessageResponse;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No `Authorization: Bearer` header was present on a protected route.
    #[error("Missing bearer token")]
    MissingToken,

    /// The bearer token failed signature or expiry validation.
    #[error("Invalid bearer token: {0}")]
    InvalidToken(#[from] jsonwebtoken::errors::Error),

    /// The token validated but its subject no longer exists in the database.
    #[error("Token subject {0} not found in database")]
    UserNotInDatabase(i32),

    /// The account exists but has been deactivated.
    #[error("User {0} is deactivated")]
    AccountDisabled(i32),

    /// Login attempt with an unknown identifier or a wrong password.
    ///
    /// Both cases map to the same client-facing message so the response does
    /// not reveal whether the account exists.
    #[error("Bad credentials for {0}")]
    BadCredentials(String),

    /// The authenticated user lacks the role required for the operation.
    #[error("User {0} denied: {1}")]
    AccessDenied(i32, String),

    /// Password hashing or verification failed.
    #[error("Password hash error: {0}")]
    PasswordHash(String),
}

impl From<argon2::password_hash::Error> for AuthError {
    fn from(err: argon2::password_hash::Error) -> Self {
        AuthError::PasswordHash(err.to_string())
    }
}

/// Converts authentication errors into HTTP responses.
///
/// Maps authentication errors to appropriate HTTP status codes and client-safe
/// messages:
/// - `MissingToken` / `InvalidToken` / `AccountDisabled` / `BadCredentials` → 401 Unauthorized
/// - `UserNotInDatabase` → 404 Not Found
/// - `AccessDenied` → 403 Forbidden
/// - `PasswordHash` → 500 Internal Server Error with a generic message
///
/// All errors are logged at debug level for diagnostics while keeping
/// client-facing messages generic to avoid information leakage.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        debug!("auth error: {}", self);

        let (status, message) = match self {
            Self::MissingToken | Self::InvalidToken(_) => {
                (StatusCode::UNAUTHORIZED, "Authentication required")
            }
            Self::AccountDisabled(_) => (StatusCode::UNAUTHORIZED, "Account is deactivated"),
            Self::BadCredentials(_) => (StatusCode::UNAUTHORIZED, "Invalid username or password"),
            Self::UserNotInDatabase(_) => (StatusCode::NOT_FOUND, "User not found"),
            Self::AccessDenied(..) => (StatusCode::FORBIDDEN, "Access denied"),
            Self::PasswordHash(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error"),
        };

        (status, Json(MessageResponse::error(message))).into_response()
    }
}
