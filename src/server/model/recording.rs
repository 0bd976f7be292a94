use entity::enums::{RecordingType, Region};

/// Filters applied when searching the catalogue.
///
/// A keyword takes precedence over the structured filters: when `keyword` is
/// set the remaining fields are ignored and a title/description substring
/// match is performed instead. Without a keyword, every `Some` field is ANDed
/// together and `None` fields match everything.
#[derive(Clone, Debug, Default)]
pub struct RecordingFilters {
    pub keyword: Option<String>,
    pub ethnicity_id: Option<i32>,
    pub instrument_id: Option<i32>,
    pub recording_type: Option<RecordingType>,
    pub region: Option<Region>,
}

/// Fully resolved relations of a single recording, fetched eagerly so DTO
/// assembly never goes back to the database.
#[derive(Clone, Debug)]
pub struct RecordingWithRelations {
    pub recording: entity::recording::Model,
    pub uploader: entity::user::Model,
    pub ethnicity: Option<entity::ethnicity::Model>,
    pub instruments: Vec<entity::instrument::Model>,
    pub performers: Vec<entity::performer::Model>,
}

/// Parameters for creating or replacing a recording.
#[derive(Clone, Debug, Default)]
pub struct UpsertRecordingParam {
    pub title: String,
    pub description: Option<String>,
    pub audio_url: String,
    pub cover_image_url: Option<String>,
    pub duration_seconds: Option<i32>,
    pub recording_type: Option<RecordingType>,
    pub region: Option<Region>,
    pub recording_date: Option<chrono::NaiveDate>,
    pub recording_location: Option<String>,
    pub ceremonial_context: Option<String>,
    pub ethnicity_id: Option<i32>,
    pub instrument_ids: Vec<i32>,
    pub performer_ids: Vec<i32>,
}
