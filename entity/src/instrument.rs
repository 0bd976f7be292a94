use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::enums::InstrumentCategory;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "instrument")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub category: InstrumentCategory,
    pub origin_ethnicity: Option<String>,
    pub image_url: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl Related<super::recording::Entity> for Entity {
    fn to() -> RelationDef {
        super::recording_instrument::Relation::Recording.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::recording_instrument::Relation::Instrument.def().rev())
    }
}

impl Related<super::performer::Entity> for Entity {
    fn to() -> RelationDef {
        super::performer_instrument::Relation::Performer.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::performer_instrument::Relation::Instrument.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
