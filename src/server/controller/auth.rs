//! Registration, login, and current-user endpoints.

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        auth::{AuthResponse, LoginRequest, RegisterRequest},
        user::UserDto,
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, service::auth::AuthService, state::AppState,
    },
};

/// `POST /api/auth/register`
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = AuthService::new(&state.db, &state.tokens);

    let (token, user) = auth_service.register(request).await?;

    Ok((StatusCode::CREATED, Json(AuthResponse::new(token, &user))))
}

/// `POST /api/auth/login`
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = AuthService::new(&state.db, &state.tokens);

    let (token, user) = auth_service.login(request).await?;

    Ok((StatusCode::OK, Json(AuthResponse::new(token, &user))))
}

/// `GET /api/auth/me`
pub async fn me(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state, &headers).require(&[]).await?;

    Ok((StatusCode::OK, Json(UserDto::from(user))))
}
