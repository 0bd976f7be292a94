//! Ethnic group catalogue endpoints. Reads are public, writes require the
//! moderator role and deletion requires an admin.

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::MessageResponse,
        ethnicity::{EthnicityDto, EthnicityRequest},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::ethnicity::EthnicityService,
        state::AppState,
    },
};

/// `GET /api/ethnicities`
pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let ethnicities = EthnicityService::new(&state.db).list().await?;
    let dtos: Vec<EthnicityDto> = ethnicities.into_iter().map(EthnicityDto::from).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// `GET /api/ethnicities/{id}`
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let ethnicity = EthnicityService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(EthnicityDto::from(ethnicity))))
}

/// `POST /api/ethnicities`
pub async fn create(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<EthnicityRequest>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state, &headers)
        .require(&[Permission::Moderator])
        .await?;

    let ethnicity = EthnicityService::new(&state.db).create(request).await?;

    Ok((StatusCode::CREATED, Json(EthnicityDto::from(ethnicity))))
}

/// `PUT /api/ethnicities/{id}`
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    headers: HeaderMap,
    Json(request): Json<EthnicityRequest>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state, &headers)
        .require(&[Permission::Moderator])
        .await?;

    let ethnicity = EthnicityService::new(&state.db).update(id, request).await?;

    Ok((StatusCode::OK, Json(EthnicityDto::from(ethnicity))))
}

/// `DELETE /api/ethnicities/{id}`
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state, &headers)
        .require(&[Permission::Admin])
        .await?;

    EthnicityService::new(&state.db).delete(id).await?;

    Ok((StatusCode::OK, Json(MessageResponse::ok("Ethnicity deleted"))))
}
