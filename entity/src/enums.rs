//! Closed string-valued enums stored in the database.
//!
//! Values are persisted and serialized as SCREAMING_SNAKE_CASE strings so
//! the wire format matches the archive's public API.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    #[sea_orm(string_value = "USER")]
    User,
    #[sea_orm(string_value = "MODERATOR")]
    Moderator,
    #[sea_orm(string_value = "ADMIN")]
    Admin,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(30))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InstrumentCategory {
    #[sea_orm(string_value = "STRING")]
    String,
    #[sea_orm(string_value = "WIND")]
    Wind,
    #[sea_orm(string_value = "PERCUSSION")]
    Percussion,
    #[sea_orm(string_value = "IDIOPHONE")]
    Idiophone,
    #[sea_orm(string_value = "VOICE")]
    Voice,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(30))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecordingType {
    #[sea_orm(string_value = "INSTRUMENTAL")]
    Instrumental,
    #[sea_orm(string_value = "VOCAL")]
    Vocal,
    #[sea_orm(string_value = "CEREMONIAL")]
    Ceremonial,
    #[sea_orm(string_value = "FOLK_SONG")]
    FolkSong,
    #[sea_orm(string_value = "EPIC")]
    Epic,
    #[sea_orm(string_value = "LULLABY")]
    Lullaby,
    #[sea_orm(string_value = "WORK_SONG")]
    WorkSong,
    #[sea_orm(string_value = "OTHER")]
    Other,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(30))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Region {
    #[sea_orm(string_value = "NORTHERN_MOUNTAINS")]
    NorthernMountains,
    #[sea_orm(string_value = "RED_RIVER_DELTA")]
    RedRiverDelta,
    #[sea_orm(string_value = "NORTH_CENTRAL")]
    NorthCentral,
    #[sea_orm(string_value = "SOUTH_CENTRAL_COAST")]
    SouthCentralCoast,
    #[sea_orm(string_value = "CENTRAL_HIGHLANDS")]
    CentralHighlands,
    #[sea_orm(string_value = "SOUTHEAST")]
    Southeast,
    #[sea_orm(string_value = "MEKONG_DELTA")]
    MekongDelta,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VerificationStatus {
    #[sea_orm(string_value = "PENDING")]
    Pending,
    #[sea_orm(string_value = "VERIFIED")]
    Verified,
    #[sea_orm(string_value = "REJECTED")]
    Rejected,
    #[sea_orm(string_value = "UNDER_REVIEW")]
    UnderReview,
}
