use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::enums::{RecordingType, Region, VerificationStatus};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "recording")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub audio_url: String,
    pub cover_image_url: Option<String>,
    pub duration_seconds: Option<i32>,
    pub recording_type: Option<RecordingType>,
    pub region: Option<Region>,
    pub recording_date: Option<Date>,
    pub recording_location: Option<String>,
    pub ceremonial_context: Option<String>,
    pub verification_status: VerificationStatus,
    pub play_count: i64,
    pub like_count: i64,
    pub download_count: i64,
    pub uploader_id: i32,
    pub ethnicity_id: Option<i32>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UploaderId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    Uploader,
    #[sea_orm(
        belongs_to = "super::ethnicity::Entity",
        from = "Column::EthnicityId",
        to = "super::ethnicity::Column::Id",
        on_delete = "SetNull"
    )]
    Ethnicity,
    #[sea_orm(has_many = "super::recording_like::Entity")]
    RecordingLike,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Uploader.def()
    }
}

impl Related<super::ethnicity::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Ethnicity.def()
    }
}

impl Related<super::recording_like::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RecordingLike.def()
    }
}

impl Related<super::instrument::Entity> for Entity {
    fn to() -> RelationDef {
        super::recording_instrument::Relation::Instrument.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::recording_instrument::Relation::Recording.def().rev())
    }
}

impl Related<super::performer::Entity> for Entity {
    fn to() -> RelationDef {
        super::recording_performer::Relation::Performer.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::recording_performer::Relation::Recording.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
