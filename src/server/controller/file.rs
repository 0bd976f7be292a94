//! Media upload and deletion endpoints. All of them require authentication.
//!
//! Uploads arrive as multipart form data with the payload in a `file` field.
//! The stored location comes back as a path relative to the upload root, which
//! is what recording requests carry in their `audioUrl` and `coverImageUrl`
//! fields.

use axum::{
    extract::{Multipart, Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::api::{MessageResponse, UploadResponse},
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        service::storage::{FileCategory, StorageService, StoredFile},
        state::AppState,
    },
};

/// `POST /api/files/upload/audio`
pub async fn upload_audio(
    State(state): State<AppState>,
    headers: HeaderMap,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state, &headers).require(&[]).await?;

    let stored = store_upload(&state.storage, FileCategory::Audio, multipart).await?;

    Ok((StatusCode::CREATED, Json(to_response(stored))))
}

/// `POST /api/files/upload/image`
pub async fn upload_image(
    State(state): State<AppState>,
    headers: HeaderMap,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state, &headers).require(&[]).await?;

    let stored = store_upload(&state.storage, FileCategory::Image, multipart).await?;

    Ok((StatusCode::CREATED, Json(to_response(stored))))
}

/// `DELETE /api/files/{*path}`
pub async fn delete(
    State(state): State<AppState>,
    Path(path): Path<String>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state, &headers).require(&[]).await?;

    state.storage.delete(&path).await?;

    Ok((StatusCode::OK, Json(MessageResponse::ok("File deleted"))))
}

/// Pulls the `file` field out of the multipart body and stores it.
async fn store_upload(
    storage: &StorageService,
    category: FileCategory,
    mut multipart: Multipart,
) -> Result<StoredFile, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| AppError::BadRequest(err.to_string()))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let original_name = field.file_name().unwrap_or_default().to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|err| AppError::BadRequest(err.to_string()))?;

        return storage.store(category, &original_name, &bytes).await;
    }

    Err(AppError::BadRequest(
        "Multipart field 'file' is required".to_string(),
    ))
}

fn to_response(stored: StoredFile) -> UploadResponse {
    UploadResponse {
        url: stored.url,
        file_name: stored.file_name,
        size: stored.size,
    }
}
