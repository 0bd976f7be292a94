use chrono::{DateTime, NaiveDate, Utc};
use entity::enums::{RecordingType, Region, VerificationStatus};
use serde::{Deserialize, Serialize};

use super::{ethnicity::EthnicityDto, instrument::InstrumentDto, user::UserDto};

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordingDto {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub audio_url: String,
    pub cover_image_url: Option<String>,
    pub duration_seconds: Option<i32>,
    #[serde(rename = "type")]
    pub recording_type: Option<RecordingType>,
    pub region: Option<Region>,
    pub recording_date: Option<NaiveDate>,
    pub recording_location: Option<String>,
    pub ceremonial_context: Option<String>,
    pub verification_status: VerificationStatus,
    pub play_count: i64,
    pub like_count: i64,
    pub download_count: i64,
    pub uploader: UserDto,
    pub ethnicity: Option<EthnicityDto>,
    pub instruments: Vec<InstrumentDto>,
    pub performers: Vec<PerformerSummary>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Slim performer view embedded in a recording, without the performer's
/// own relations.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformerSummary {
    pub id: i32,
    pub name: String,
    pub is_master: bool,
    pub image_url: Option<String>,
}

impl From<entity::performer::Model> for PerformerSummary {
    fn from(model: entity::performer::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            is_master: model.is_master,
            image_url: model.image_url,
        }
    }
}

impl RecordingDto {
    pub fn from_parts(
        recording: entity::recording::Model,
        uploader: entity::user::Model,
        ethnicity: Option<entity::ethnicity::Model>,
        instruments: Vec<entity::instrument::Model>,
        performers: Vec<entity::performer::Model>,
    ) -> Self {
        Self {
            id: recording.id,
            title: recording.title,
            description: recording.description,
            audio_url: recording.audio_url,
            cover_image_url: recording.cover_image_url,
            duration_seconds: recording.duration_seconds,
            recording_type: recording.recording_type,
            region: recording.region,
            recording_date: recording.recording_date,
            recording_location: recording.recording_location,
            ceremonial_context: recording.ceremonial_context,
            verification_status: recording.verification_status,
            play_count: recording.play_count,
            like_count: recording.like_count,
            download_count: recording.download_count,
            uploader: UserDto::from(uploader),
            ethnicity: ethnicity.map(EthnicityDto::from),
            instruments: instruments.into_iter().map(InstrumentDto::from).collect(),
            performers: performers.into_iter().map(PerformerSummary::from).collect(),
            created_at: recording.created_at,
            updated_at: recording.updated_at,
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordingRequest {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub audio_url: String,
    #[serde(default)]
    pub cover_image_url: Option<String>,
    #[serde(default)]
    pub duration_seconds: Option<i32>,
    #[serde(default, rename = "type")]
    pub recording_type: Option<RecordingType>,
    #[serde(default)]
    pub region: Option<Region>,
    #[serde(default)]
    pub recording_date: Option<NaiveDate>,
    #[serde(default)]
    pub recording_location: Option<String>,
    #[serde(default)]
    pub ceremonial_context: Option<String>,
    #[serde(default)]
    pub ethnicity_id: Option<i32>,
    #[serde(default)]
    pub instrument_ids: Vec<i32>,
    #[serde(default)]
    pub performer_ids: Vec<i32>,
}

/// Query parameters accepted by recording search.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    #[serde(default)]
    pub keyword: Option<String>,
    #[serde(default)]
    pub ethnicity_id: Option<i32>,
    #[serde(default)]
    pub instrument_id: Option<i32>,
    #[serde(default, rename = "type")]
    pub recording_type: Option<RecordingType>,
    #[serde(default)]
    pub region: Option<Region>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct LimitParams {
    #[serde(default)]
    pub limit: Option<u64>,
}

/// Returned by the like toggle with the state after the flip.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeResponse {
    pub liked: bool,
    pub like_count: i64,
}
