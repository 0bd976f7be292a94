//! Performer catalogue endpoints. Reads are public, writes require the
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
        performer::{PerformerDto, PerformerRequest},
    },
    server::{
        data::performer::PerformerWithRelations,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::performer::PerformerService,
        state::AppState,
    },
};

fn to_dto(resolved: PerformerWithRelations) -> PerformerDto {
    PerformerDto::from_parts(resolved.performer, resolved.ethnicity, resolved.instruments)
}

/// `GET /api/performers`
pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let performers = PerformerService::new(&state.db).list().await?;
    let dtos: Vec<PerformerDto> = performers.into_iter().map(to_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// `GET /api/performers/masters`
pub async fn list_masters(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let performers = PerformerService::new(&state.db).list_masters().await?;
    let dtos: Vec<PerformerDto> = performers.into_iter().map(to_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// `GET /api/performers/{id}`
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let performer = PerformerService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(to_dto(performer))))
}

/// `POST /api/performers`
pub async fn create(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<PerformerRequest>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state, &headers)
        .require(&[Permission::Moderator])
        .await?;

    let performer = PerformerService::new(&state.db).create(request).await?;

    Ok((StatusCode::CREATED, Json(to_dto(performer))))
}

/// `PUT /api/performers/{id}`
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    headers: HeaderMap,
    Json(request): Json<PerformerRequest>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state, &headers)
        .require(&[Permission::Moderator])
        .await?;

    let performer = PerformerService::new(&state.db).update(id, request).await?;

    Ok((StatusCode::OK, Json(to_dto(performer))))
}

/// `DELETE /api/performers/{id}`
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state, &headers)
        .require(&[Permission::Admin])
        .await?;

    PerformerService::new(&state.db).delete(id).await?;

    Ok((StatusCode::OK, Json(MessageResponse::ok("Performer deleted"))))
}
