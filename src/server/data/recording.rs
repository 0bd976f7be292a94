//! Recording repository.
//!
//! The catalogue's central table. List queries resolve the uploader, ethnicity,
//! instrument, and performer relations eagerly with SeaORM's loader so handlers
//! never issue follow-up queries per row.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    LoaderTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::model::recording::{
    RecordingFilters, RecordingWithRelations, UpsertRecordingParam,
};

pub struct RecordingRepository<'a, C: ConnectionTrait + TransactionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait + TransactionTrait> RecordingRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn find_model(&self, id: i32) -> Result<Option<entity::recording::Model>, DbErr> {
        entity::prelude::Recording::find_by_id(id).one(self.db).await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<RecordingWithRelations>, DbErr> {
        let Some(recording) = entity::prelude::Recording::find_by_id(id).one(self.db).await?
        else {
            return Ok(None);
        };

        let mut resolved = self.resolve_relations(vec![recording]).await?;

        Ok(resolved.pop())
    }

    /// Lists the whole catalogue, newest first.
    pub async fn find_all(&self) -> Result<Vec<RecordingWithRelations>, DbErr> {
        let recordings = entity::prelude::Recording::find()
            .order_by_desc(entity::recording::Column::CreatedAt)
            .all(self.db)
            .await?;

        self.resolve_relations(recordings).await
    }

    /// Lists the catalogue ordered by play count, ties broken by like count.
    pub async fn find_popular(&self) -> Result<Vec<RecordingWithRelations>, DbErr> {
        let recordings = entity::prelude::Recording::find()
            .order_by_desc(entity::recording::Column::PlayCount)
            .order_by_desc(entity::recording::Column::LikeCount)
            .all(self.db)
            .await?;

        self.resolve_relations(recordings).await
    }

    /// Searches the catalogue, newest first.
    ///
    /// A keyword wins over the structured filters: when present, only a
    /// substring match against title and description is applied. Otherwise
    /// every set filter is ANDed and unset filters match everything.
    pub async fn search(
        &self,
        filters: &RecordingFilters,
    ) -> Result<Vec<RecordingWithRelations>, DbErr> {
        let mut query = entity::prelude::Recording::find();

        let keyword = filters
            .keyword
            .as_deref()
            .map(str::trim)
            .filter(|kw| !kw.is_empty());

        if let Some(keyword) = keyword {
            query = query.filter(
                entity::recording::Column::Title
                    .contains(keyword)
                    .or(entity::recording::Column::Description.contains(keyword)),
            );
        } else {
            let mut condition = Condition::all();

            if let Some(ethnicity_id) = filters.ethnicity_id {
                condition =
                    condition.add(entity::recording::Column::EthnicityId.eq(ethnicity_id));
            }
            if let Some(recording_type) = filters.recording_type {
                condition =
                    condition.add(entity::recording::Column::RecordingType.eq(recording_type));
            }
            if let Some(region) = filters.region {
                condition = condition.add(entity::recording::Column::Region.eq(region));
            }
            if let Some(instrument_id) = filters.instrument_id {
                let recording_ids: Vec<i32> = entity::prelude::RecordingInstrument::find()
                    .filter(
                        entity::recording_instrument::Column::InstrumentId.eq(instrument_id),
                    )
                    .all(self.db)
                    .await?
                    .into_iter()
                    .map(|link| link.recording_id)
                    .collect();

                condition = condition.add(entity::recording::Column::Id.is_in(recording_ids));
            }

            query = query.filter(condition);
        }

        let recordings = query
            .order_by_desc(entity::recording::Column::CreatedAt)
            .all(self.db)
            .await?;

        self.resolve_relations(recordings).await
    }

    /// Inserts a recording and links its instruments and performers.
    ///
    /// New recordings start with `PENDING` verification and zeroed counters.
    /// The row and its link rows are written in one transaction, so a failed
    /// link insert leaves no orphan recording behind.
    pub async fn create(
        &self,
        uploader_id: i32,
        param: UpsertRecordingParam,
    ) -> Result<entity::recording::Model, DbErr> {
        let txn = self.db.begin().await?;
        let now = chrono::Utc::now();

        let recording = entity::recording::ActiveModel {
            title: ActiveValue::Set(param.title),
            description: ActiveValue::Set(param.description),
            audio_url: ActiveValue::Set(param.audio_url),
            cover_image_url: ActiveValue::Set(param.cover_image_url),
            duration_seconds: ActiveValue::Set(param.duration_seconds),
            recording_type: ActiveValue::Set(param.recording_type),
            region: ActiveValue::Set(param.region),
            recording_date: ActiveValue::Set(param.recording_date),
            recording_location: ActiveValue::Set(param.recording_location),
            ceremonial_context: ActiveValue::Set(param.ceremonial_context),
            ethnicity_id: ActiveValue::Set(param.ethnicity_id),
            uploader_id: ActiveValue::Set(uploader_id),
            verification_status: ActiveValue::Set(entity::enums::VerificationStatus::Pending),
            play_count: ActiveValue::Set(0),
            like_count: ActiveValue::Set(0),
            download_count: ActiveValue::Set(0),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        set_links(&txn, recording.id, &param.instrument_ids, &param.performer_ids).await?;

        txn.commit().await?;

        Ok(recording)
    }

    /// Rewrites a recording's fields and links in one transaction.
    pub async fn update(
        &self,
        existing: entity::recording::Model,
        param: UpsertRecordingParam,
    ) -> Result<entity::recording::Model, DbErr> {
        let txn = self.db.begin().await?;
        let id = existing.id;

        let mut active: entity::recording::ActiveModel = existing.into();
        active.title = ActiveValue::Set(param.title);
        active.description = ActiveValue::Set(param.description);
        active.audio_url = ActiveValue::Set(param.audio_url);
        active.cover_image_url = ActiveValue::Set(param.cover_image_url);
        active.duration_seconds = ActiveValue::Set(param.duration_seconds);
        active.recording_type = ActiveValue::Set(param.recording_type);
        active.region = ActiveValue::Set(param.region);
        active.recording_date = ActiveValue::Set(param.recording_date);
        active.recording_location = ActiveValue::Set(param.recording_location);
        active.ceremonial_context = ActiveValue::Set(param.ceremonial_context);
        active.ethnicity_id = ActiveValue::Set(param.ethnicity_id);
        active.updated_at = ActiveValue::Set(chrono::Utc::now());

        let recording = active.update(&txn).await?;

        set_links(&txn, id, &param.instrument_ids, &param.performer_ids).await?;

        txn.commit().await?;

        Ok(recording)
    }

    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Recording::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Adds one to the play counter and returns the new value.
    pub async fn increment_play_count(
        &self,
        recording: entity::recording::Model,
    ) -> Result<i64, DbErr> {
        let count = recording.play_count + 1;

        let mut active: entity::recording::ActiveModel = recording.into();
        active.play_count = ActiveValue::Set(count);
        active.update(self.db).await?;

        Ok(count)
    }

    /// Adds one to the download counter and returns the new value.
    pub async fn increment_download_count(
        &self,
        recording: entity::recording::Model,
    ) -> Result<i64, DbErr> {
        let count = recording.download_count + 1;

        let mut active: entity::recording::ActiveModel = recording.into();
        active.download_count = ActiveValue::Set(count);
        active.update(self.db).await?;

        Ok(count)
    }

    /// Overwrites the denormalized like counter.
    ///
    /// Called after recounting the like rows inside the toggle transaction so
    /// the counter always reflects the live row count.
    pub async fn set_like_count(&self, recording_id: i32, count: i64) -> Result<(), DbErr> {
        entity::recording::ActiveModel {
            id: ActiveValue::Unchanged(recording_id),
            like_count: ActiveValue::Set(count),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(())
    }

    async fn resolve_relations(
        &self,
        recordings: Vec<entity::recording::Model>,
    ) -> Result<Vec<RecordingWithRelations>, DbErr> {
        let uploaders = recordings.load_one(entity::prelude::User, self.db).await?;
        let ethnicities = recordings
            .load_one(entity::prelude::Ethnicity, self.db)
            .await?;
        let instruments = recordings
            .load_many_to_many(
                entity::prelude::Instrument,
                entity::prelude::RecordingInstrument,
                self.db,
            )
            .await?;
        let performers = recordings
            .load_many_to_many(
                entity::prelude::Performer,
                entity::prelude::RecordingPerformer,
                self.db,
            )
            .await?;

        recordings
            .into_iter()
            .zip(uploaders)
            .zip(ethnicities)
            .zip(instruments)
            .zip(performers)
            .map(
                |((((recording, uploader), ethnicity), instruments), performers)| {
                    let uploader = uploader.ok_or_else(|| {
                        DbErr::RecordNotFound(format!(
                            "uploader missing for recording {}",
                            recording.id
                        ))
                    })?;

                    Ok(RecordingWithRelations {
                        recording,
                        uploader,
                        ethnicity,
                        instruments,
                        performers,
                    })
                },
            )
            .collect()
    }
}

/// Replaces the recording's instrument and performer links.
///
/// Runs over the caller's transaction so link failures roll back with the
/// recording write.
async fn set_links<C: ConnectionTrait>(
    conn: &C,
    recording_id: i32,
    instrument_ids: &[i32],
    performer_ids: &[i32],
) -> Result<(), DbErr> {
    entity::prelude::RecordingInstrument::delete_many()
        .filter(entity::recording_instrument::Column::RecordingId.eq(recording_id))
        .exec(conn)
        .await?;

    for instrument_id in instrument_ids {
        entity::recording_instrument::ActiveModel {
            recording_id: ActiveValue::Set(recording_id),
            instrument_id: ActiveValue::Set(*instrument_id),
        }
        .insert(conn)
        .await?;
    }

    entity::prelude::RecordingPerformer::delete_many()
        .filter(entity::recording_performer::Column::RecordingId.eq(recording_id))
        .exec(conn)
        .await?;

    for performer_id in performer_ids {
        entity::recording_performer::ActiveModel {
            recording_id: ActiveValue::Set(recording_id),
            performer_id: ActiveValue::Set(*performer_id),
        }
        .insert(conn)
        .await?;
    }

    Ok(())
}
