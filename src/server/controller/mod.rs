//! HTTP request handlers.
//!
//! Controllers authenticate where required, convert between DTOs and service
//! parameters, and map service results onto HTTP responses. Business rules
//! live one layer down in `service/`.

pub mod auth;
pub mod ethnicity;
pub mod file;
pub mod health;
pub mod instrument;
pub mod performer;
pub mod recording;
