use chrono::{DateTime, Utc};
use entity::enums::{RecordingType, Region, VerificationStatus};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for inserting test recordings.
///
/// Requires an uploader id; everything else defaults to a minimal pending
/// recording with zeroed counters.
pub struct RecordingFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    description: Option<String>,
    uploader_id: i32,
    ethnicity_id: Option<i32>,
    recording_type: Option<RecordingType>,
    region: Option<Region>,
    play_count: i64,
    like_count: i64,
    created_at: Option<DateTime<Utc>>,
}

impl<'a> RecordingFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, uploader_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("Recording {id}"),
            description: None,
            uploader_id,
            ethnicity_id: None,
            recording_type: None,
            region: None,
            play_count: 0,
            like_count: 0,
            created_at: None,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn ethnicity_id(mut self, ethnicity_id: i32) -> Self {
        self.ethnicity_id = Some(ethnicity_id);
        self
    }

    pub fn recording_type(mut self, recording_type: RecordingType) -> Self {
        self.recording_type = Some(recording_type);
        self
    }

    pub fn region(mut self, region: Region) -> Self {
        self.region = Some(region);
        self
    }

    pub fn play_count(mut self, play_count: i64) -> Self {
        self.play_count = play_count;
        self
    }

    pub fn like_count(mut self, like_count: i64) -> Self {
        self.like_count = like_count;
        self
    }

    /// Overrides the creation timestamp, useful for recency ordering tests.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    pub async fn build(self) -> Result<entity::recording::Model, DbErr> {
        let now = Utc::now();
        let created_at = self.created_at.unwrap_or(now);
        entity::recording::ActiveModel {
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(self.description),
            audio_url: ActiveValue::Set("audio/test.mp3".to_string()),
            cover_image_url: ActiveValue::Set(None),
            duration_seconds: ActiveValue::Set(None),
            recording_type: ActiveValue::Set(self.recording_type),
            region: ActiveValue::Set(self.region),
            recording_date: ActiveValue::Set(None),
            recording_location: ActiveValue::Set(None),
            ceremonial_context: ActiveValue::Set(None),
            verification_status: ActiveValue::Set(VerificationStatus::Pending),
            play_count: ActiveValue::Set(self.play_count),
            like_count: ActiveValue::Set(self.like_count),
            download_count: ActiveValue::Set(0),
            uploader_id: ActiveValue::Set(self.uploader_id),
            ethnicity_id: ActiveValue::Set(self.ethnicity_id),
            created_at: ActiveValue::Set(created_at),
            updated_at: ActiveValue::Set(created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}
