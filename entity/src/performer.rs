use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "performer")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub bio: Option<String>,
    pub birth_date: Option<Date>,
    pub death_date: Option<Date>,
    pub is_master: bool,
    pub image_url: Option<String>,
    pub ethnicity_id: Option<i32>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::ethnicity::Entity",
        from = "Column::EthnicityId",
        to = "super::ethnicity::Column::Id",
        on_delete = "SetNull"
    )]
    Ethnicity,
}

impl Related<super::ethnicity::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Ethnicity.def()
    }
}

impl Related<super::instrument::Entity> for Entity {
    fn to() -> RelationDef {
        super::performer_instrument::Relation::Instrument.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::performer_instrument::Relation::Performer.def().rev())
    }
}

impl Related<super::recording::Entity> for Entity {
    fn to() -> RelationDef {
        super::recording_performer::Relation::Recording.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::recording_performer::Relation::Performer.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
