use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{ethnicity::EthnicityDto, instrument::InstrumentDto};

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformerDto {
    pub id: i32,
    pub name: String,
    pub bio: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub death_date: Option<NaiveDate>,
    pub is_master: bool,
    pub image_url: Option<String>,
    pub ethnicity: Option<EthnicityDto>,
    pub instruments: Vec<InstrumentDto>,
}

impl PerformerDto {
    pub fn from_parts(
        performer: entity::performer::Model,
        ethnicity: Option<entity::ethnicity::Model>,
        instruments: Vec<entity::instrument::Model>,
    ) -> Self {
        Self {
            id: performer.id,
            name: performer.name,
            bio: performer.bio,
            birth_date: performer.birth_date,
            death_date: performer.death_date,
            is_master: performer.is_master,
            image_url: performer.image_url,
            ethnicity: ethnicity.map(EthnicityDto::from),
            instruments: instruments.into_iter().map(InstrumentDto::from).collect(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformerRequest {
    pub name: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
    #[serde(default)]
    pub death_date: Option<NaiveDate>,
    #[serde(default)]
    pub is_master: bool,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub ethnicity_id: Option<i32>,
    /// Instrument ids this performer plays.
    #[serde(default)]
    pub instrument_ids: Vec<i32>,
}
