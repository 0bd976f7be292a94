//! Recording catalogue endpoints.
//!
//! Reads, search, feeds, and counter bumps are public. Creating requires any
//! authenticated user; updating and deleting additionally enforce ownership
//! in the service layer. Liking requires authentication.

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde_json::json;

use crate::{
    model::{
        api::MessageResponse,
        recording::{LimitParams, RecordingDto, RecordingRequest, SearchParams},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::recording::{RecordingFilters, RecordingWithRelations},
        service::recording::RecordingService,
        state::AppState,
    },
};

fn to_dto(resolved: RecordingWithRelations) -> RecordingDto {
    RecordingDto::from_parts(
        resolved.recording,
        resolved.uploader,
        resolved.ethnicity,
        resolved.instruments,
        resolved.performers,
    )
}

/// `GET /api/recordings`
pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let recordings = RecordingService::new(&state.db).list().await?;
    let dtos: Vec<RecordingDto> = recordings.into_iter().map(to_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// `GET /api/recordings/recent`
pub async fn recent(
    State(state): State<AppState>,
    Query(params): Query<LimitParams>,
) -> Result<impl IntoResponse, AppError> {
    let recordings = RecordingService::new(&state.db).recent(params.limit).await?;
    let dtos: Vec<RecordingDto> = recordings.into_iter().map(to_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// `GET /api/recordings/popular`
pub async fn popular(
    State(state): State<AppState>,
    Query(params): Query<LimitParams>,
) -> Result<impl IntoResponse, AppError> {
    let recordings = RecordingService::new(&state.db)
        .popular(params.limit)
        .await?;
    let dtos: Vec<RecordingDto> = recordings.into_iter().map(to_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// `GET /api/recordings/search`
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<impl IntoResponse, AppError> {
    let filters = RecordingFilters {
        keyword: params.keyword,
        ethnicity_id: params.ethnicity_id,
        instrument_id: params.instrument_id,
        recording_type: params.recording_type,
        region: params.region,
    };

    let recordings = RecordingService::new(&state.db).search(&filters).await?;
    let dtos: Vec<RecordingDto> = recordings.into_iter().map(to_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// `GET /api/recordings/{id}`
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let recording = RecordingService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(to_dto(recording))))
}

/// `POST /api/recordings`
pub async fn create(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<RecordingRequest>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state, &headers).require(&[]).await?;

    let recording = RecordingService::new(&state.db).create(&user, request).await?;

    Ok((StatusCode::CREATED, Json(to_dto(recording))))
}

/// `PUT /api/recordings/{id}`
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    headers: HeaderMap,
    Json(request): Json<RecordingRequest>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state, &headers).require(&[]).await?;

    let recording = RecordingService::new(&state.db)
        .update(&user, id, request)
        .await?;

    Ok((StatusCode::OK, Json(to_dto(recording))))
}

/// `DELETE /api/recordings/{id}`
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state, &headers).require(&[]).await?;

    RecordingService::new(&state.db).delete(&user, id).await?;

    Ok((StatusCode::OK, Json(MessageResponse::ok("Recording deleted"))))
}

/// `POST /api/recordings/{id}/play`
pub async fn play(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let play_count = RecordingService::new(&state.db).record_play(id).await?;

    Ok((StatusCode::OK, Json(json!({ "playCount": play_count }))))
}

/// `POST /api/recordings/{id}/download`
pub async fn download(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let download_count = RecordingService::new(&state.db).record_download(id).await?;

    Ok((
        StatusCode::OK,
        Json(json!({ "downloadCount": download_count })),
    ))
}

/// `POST /api/recordings/{id}/like`
pub async fn toggle_like(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state, &headers).require(&[]).await?;

    let response = RecordingService::new(&state.db).toggle_like(&user, id).await?;

    Ok((StatusCode::OK, Json(response)))
}
