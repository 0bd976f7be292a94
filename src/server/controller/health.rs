use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::model::api::MessageResponse;

/// Liveness probe, also served at the root path.
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(MessageResponse::ok("ok")))
}
