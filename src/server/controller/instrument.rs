//! Instrument catalogue endpoints. Reads are public, writes require the
//! moderator role and deletion requires an admin.

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use entity::enums::InstrumentCategory;

use crate::{
    model::{
        api::MessageResponse,
        instrument::{InstrumentDto, InstrumentRequest},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::instrument::InstrumentService,
        state::AppState,
    },
};

/// `GET /api/instruments`
pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let instruments = InstrumentService::new(&state.db).list().await?;
    let dtos: Vec<InstrumentDto> = instruments.into_iter().map(InstrumentDto::from).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// `GET /api/instruments/category/{category}`
pub async fn list_by_category(
    State(state): State<AppState>,
    Path(category): Path<InstrumentCategory>,
) -> Result<impl IntoResponse, AppError> {
    let instruments = InstrumentService::new(&state.db)
        .list_by_category(category)
        .await?;
    let dtos: Vec<InstrumentDto> = instruments.into_iter().map(InstrumentDto::from).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// `GET /api/instruments/{id}`
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let instrument = InstrumentService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(InstrumentDto::from(instrument))))
}

/// `POST /api/instruments`
pub async fn create(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<InstrumentRequest>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state, &headers)
        .require(&[Permission::Moderator])
        .await?;

    let instrument = InstrumentService::new(&state.db).create(request).await?;

    Ok((StatusCode::CREATED, Json(InstrumentDto::from(instrument))))
}

/// `PUT /api/instruments/{id}`
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    headers: HeaderMap,
    Json(request): Json<InstrumentRequest>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state, &headers)
        .require(&[Permission::Moderator])
        .await?;

    let instrument = InstrumentService::new(&state.db).update(id, request).await?;

    Ok((StatusCode::OK, Json(InstrumentDto::from(instrument))))
}

/// `DELETE /api/instruments/{id}`
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state, &headers)
        .require(&[Permission::Admin])
        .await?;

    InstrumentService::new(&state.db).delete(id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageResponse::ok("Instrument deleted")),
    ))
}
