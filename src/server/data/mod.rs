//! Data access layer providing repository implementations for database operations.
//!
//! This module contains repository structs that wrap a database connection and
//! expose the queries the service layer needs. Repositories are generic over
//! [`sea_orm::ConnectionTrait`] so the same code runs against the pooled
//! connection or inside an open transaction.

pub mod ethnicity;
pub mod instrument;
pub mod performer;
pub mod recording;
pub mod recording_like;
pub mod user;

#[cfg(test)]
mod test;
