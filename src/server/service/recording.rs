//! Recording catalogue, counters, and like toggling.
//!
//! The like toggle runs inside a database transaction and recounts the live
//! like rows before writing the denormalized counter, so the counter can
//! never drift from the rows even under concurrent toggles.

use std::collections::HashMap;

use entity::enums::UserRole;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::recording::{LikeResponse, RecordingRequest},
    server::{
        data::{
            ethnicity::EthnicityRepository, instrument::InstrumentRepository,
            performer::PerformerRepository, recording::RecordingRepository,
            recording_like::RecordingLikeRepository,
        },
        error::{auth::AuthError, AppError},
        model::recording::{RecordingFilters, RecordingWithRelations, UpsertRecordingParam},
    },
};

/// Default number of rows returned by the recent and popular feeds.
const DEFAULT_FEED_LIMIT: usize = 10;

pub struct RecordingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RecordingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<RecordingWithRelations>, AppError> {
        Ok(RecordingRepository::new(self.db).find_all().await?)
    }

    pub async fn get(&self, id: i32) -> Result<RecordingWithRelations, AppError> {
        RecordingRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Recording not found".to_string()))
    }

    /// Newest recordings, at most `limit` (default 10).
    pub async fn recent(&self, limit: Option<u64>) -> Result<Vec<RecordingWithRelations>, AppError> {
        let mut recordings = RecordingRepository::new(self.db).find_all().await?;
        recordings.truncate(feed_limit(limit));

        Ok(recordings)
    }

    /// Most played recordings, ties broken by like count, at most `limit`
    /// (default 10).
    pub async fn popular(
        &self,
        limit: Option<u64>,
    ) -> Result<Vec<RecordingWithRelations>, AppError> {
        let mut recordings = RecordingRepository::new(self.db).find_popular().await?;
        recordings.truncate(feed_limit(limit));

        Ok(recordings)
    }

    pub async fn search(
        &self,
        filters: &RecordingFilters,
    ) -> Result<Vec<RecordingWithRelations>, AppError> {
        Ok(RecordingRepository::new(self.db).search(filters).await?)
    }

    /// Creates a recording owned by `uploader`.
    ///
    /// References to ethnicities, instruments, and performers are checked
    /// before the write so a broken id fails with 404 instead of a foreign
    /// key error.
    pub async fn create(
        &self,
        uploader: &entity::user::Model,
        request: RecordingRequest,
    ) -> Result<RecordingWithRelations, AppError> {
        let param = self.validate(request).await?;

        let repo = RecordingRepository::new(self.db);
        let recording = repo.create(uploader.id, param).await?;

        repo.find_by_id(recording.id)
            .await?
            .ok_or_else(|| AppError::InternalError("Recording vanished after insert".to_string()))
    }

    /// Replaces a recording's fields and links.
    ///
    /// Only the uploader, moderators, and admins may modify a recording.
    pub async fn update(
        &self,
        user: &entity::user::Model,
        id: i32,
        request: RecordingRequest,
    ) -> Result<RecordingWithRelations, AppError> {
        let repo = RecordingRepository::new(self.db);

        let existing = repo
            .find_model(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Recording not found".to_string()))?;

        require_ownership(user, &existing)?;

        let param = self.validate(request).await?;
        repo.update(existing, param).await?;

        repo.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::InternalError("Recording vanished after update".to_string()))
    }

    /// Deletes a recording. Same ownership rule as `update`.
    pub async fn delete(&self, user: &entity::user::Model, id: i32) -> Result<(), AppError> {
        let repo = RecordingRepository::new(self.db);

        let existing = repo
            .find_model(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Recording not found".to_string()))?;

        require_ownership(user, &existing)?;

        repo.delete(id).await?;

        Ok(())
    }

    /// Records a playback and returns the new play count.
    pub async fn record_play(&self, id: i32) -> Result<i64, AppError> {
        let repo = RecordingRepository::new(self.db);

        let recording = repo
            .find_model(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Recording not found".to_string()))?;

        Ok(repo.increment_play_count(recording).await?)
    }

    /// Records a download and returns the new download count.
    pub async fn record_download(&self, id: i32) -> Result<i64, AppError> {
        let repo = RecordingRepository::new(self.db);

        let recording = repo
            .find_model(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Recording not found".to_string()))?;

        Ok(repo.increment_download_count(recording).await?)
    }

    /// Flips the user's like on a recording.
    ///
    /// The whole toggle runs in one transaction: flip the row, recount the
    /// live rows, write the counter. Toggling twice always lands back on the
    /// starting state.
    pub async fn toggle_like(
        &self,
        user: &entity::user::Model,
        recording_id: i32,
    ) -> Result<LikeResponse, AppError> {
        let txn = self.db.begin().await?;

        let recordings = RecordingRepository::new(&txn);
        let likes = RecordingLikeRepository::new(&txn);

        recordings
            .find_model(recording_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Recording not found".to_string()))?;

        let liked = match likes.find(user.id, recording_id).await? {
            Some(_) => {
                likes.delete(user.id, recording_id).await?;
                false
            }
            None => {
                likes.insert(user.id, recording_id).await?;
                true
            }
        };

        let like_count = likes.count_for_recording(recording_id).await? as i64;
        recordings.set_like_count(recording_id, like_count).await?;

        txn.commit().await?;

        Ok(LikeResponse { liked, like_count })
    }

    /// Validates a request and resolves it into an insert/update parameter.
    async fn validate(&self, request: RecordingRequest) -> Result<UpsertRecordingParam, AppError> {
        let mut errors = HashMap::new();

        let title = request.title.trim();
        if title.is_empty() {
            errors.insert("title".to_string(), "Title is required".to_string());
        } else if title.chars().count() > 200 {
            errors.insert(
                "title".to_string(),
                "Title must be at most 200 characters".to_string(),
            );
        }

        if request.audio_url.trim().is_empty() {
            errors.insert("audioUrl".to_string(), "Audio URL is required".to_string());
        }

        if !errors.is_empty() {
            return Err(AppError::Validation(errors));
        }

        if let Some(ethnicity_id) = request.ethnicity_id {
            EthnicityRepository::new(self.db)
                .find_by_id(ethnicity_id)
                .await?
                .ok_or_else(|| AppError::NotFound("Ethnicity not found".to_string()))?;
        }

        if !request.instrument_ids.is_empty() {
            let found = InstrumentRepository::new(self.db)
                .find_by_ids(&request.instrument_ids)
                .await?;

            if found.len() != request.instrument_ids.len() {
                return Err(AppError::NotFound(
                    "One or more instruments not found".to_string(),
                ));
            }
        }

        if !request.performer_ids.is_empty() {
            let found = PerformerRepository::new(self.db)
                .find_by_ids(&request.performer_ids)
                .await?;

            if found.len() != request.performer_ids.len() {
                return Err(AppError::NotFound(
                    "One or more performers not found".to_string(),
                ));
            }
        }

        Ok(UpsertRecordingParam {
            title: request.title,
            description: request.description,
            audio_url: request.audio_url,
            cover_image_url: request.cover_image_url,
            duration_seconds: request.duration_seconds,
            recording_type: request.recording_type,
            region: request.region,
            recording_date: request.recording_date,
            recording_location: request.recording_location,
            ceremonial_context: request.ceremonial_context,
            ethnicity_id: request.ethnicity_id,
            instrument_ids: request.instrument_ids,
            performer_ids: request.performer_ids,
        })
    }
}

fn feed_limit(limit: Option<u64>) -> usize {
    limit.map_or(DEFAULT_FEED_LIMIT, |n| n as usize)
}

/// The uploader, moderators, and admins may modify a recording.
fn require_ownership(
    user: &entity::user::Model,
    recording: &entity::recording::Model,
) -> Result<(), AppError> {
    let privileged = matches!(user.role, UserRole::Moderator | UserRole::Admin);

    if recording.uploader_id != user.id && !privileged {
        return Err(AuthError::AccessDenied(
            user.id,
            format!(
                "User attempted to modify recording {} owned by user {}",
                recording.id, recording.uploader_id
            ),
        )
        .into());
    }

    Ok(())
}
