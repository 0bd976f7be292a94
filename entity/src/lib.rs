//! SeaORM entity models for the archive database.
//!
//! One module per table. Join tables (`recording_instrument`,
//! `recording_performer`, `performer_instrument`) carry composite primary
//! keys and exist only to back the many-to-many relations.

pub mod enums;
pub mod ethnicity;
pub mod instrument;
pub mod performer;
pub mod performer_instrument;
pub mod prelude;
pub mod recording;
pub mod recording_instrument;
pub mod recording_like;
pub mod recording_performer;
pub mod user;
