//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.

use sea_orm::DatabaseConnection;

use super::service::{storage::StorageService, token::TokenService};

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `TokenService` and `StorageService` hold `Arc`-backed configuration
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Signs and verifies JWT bearer tokens.
    pub tokens: TokenService,

    /// Writes and deletes uploaded media files on the local filesystem.
    pub storage: StorageService,
}

impl AppState {
    pub fn new(db: DatabaseConnection, tokens: TokenService, storage: StorageService) -> Self {
        Self { db, tokens, storage }
    }
}
