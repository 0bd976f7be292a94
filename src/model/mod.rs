//! Wire types shared between the HTTP surface and the service layer.

pub mod api;
pub mod auth;
pub mod ethnicity;
pub mod instrument;
pub mod performer;
pub mod recording;
pub mod user;
