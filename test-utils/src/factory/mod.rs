//! Factories that insert test entities with sensible defaults.
//!
//! Each factory uses a builder pattern: construct with a database
//! connection, override the fields the test cares about, then `build()`
//! to insert and get the persisted model back.

pub mod ethnicity;
mod helpers;
pub mod instrument;
pub mod performer;
pub mod recording;
pub mod user;
