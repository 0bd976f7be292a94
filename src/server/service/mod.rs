//! Business logic layer orchestrating repositories and infrastructure.

pub mod auth;
pub mod ethnicity;
pub mod instrument;
pub mod performer;
pub mod recording;
pub mod storage;
pub mod token;
