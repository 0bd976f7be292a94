use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "recording_instrument")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub recording_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub instrument_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::recording::Entity",
        from = "Column::RecordingId",
        to = "super::recording::Column::Id",
        on_delete = "Cascade"
    )]
    Recording,
    #[sea_orm(
        belongs_to = "super::instrument::Entity",
        from = "Column::InstrumentId",
        to = "super::instrument::Column::Id",
        on_delete = "Cascade"
    )]
    Instrument,
}

impl ActiveModelBehavior for ActiveModel {}
