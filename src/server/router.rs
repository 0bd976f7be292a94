use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::server::{
    controller::{auth, ethnicity, file, health, instrument, performer, recording},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(health::health))
        .route("/health", get(health::health))
        .nest("/api", api_router())
}

fn api_router() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/auth/me", get(auth::me))
        .route("/ethnicities", get(ethnicity::list).post(ethnicity::create))
        .route(
            "/ethnicities/{id}",
            get(ethnicity::get)
                .put(ethnicity::update)
                .delete(ethnicity::delete),
        )
        .route(
            "/instruments",
            get(instrument::list).post(instrument::create),
        )
        .route(
            "/instruments/category/{category}",
            get(instrument::list_by_category),
        )
        .route(
            "/instruments/{id}",
            get(instrument::get)
                .put(instrument::update)
                .delete(instrument::delete),
        )
        .route("/performers", get(performer::list).post(performer::create))
        .route("/performers/masters", get(performer::list_masters))
        .route(
            "/performers/{id}",
            get(performer::get)
                .put(performer::update)
                .delete(performer::delete),
        )
        .route("/recordings", get(recording::list).post(recording::create))
        .route("/recordings/recent", get(recording::recent))
        .route("/recordings/popular", get(recording::popular))
        .route("/recordings/search", get(recording::search))
        .route(
            "/recordings/{id}",
            get(recording::get)
                .put(recording::update)
                .delete(recording::delete),
        )
        .route("/recordings/{id}/play", post(recording::play))
        .route("/recordings/{id}/download", post(recording::download))
        .route("/recordings/{id}/like", post(recording::toggle_like))
        .route("/files/upload/audio", post(file::upload_audio))
        .route("/files/upload/image", post(file::upload_image))
        .route("/files/{*path}", delete(file::delete))
}
