//! Recording like repository.
//!
//! A like is one row per (user, recording) pair, backed by a unique index.
//! The toggle in the service layer runs these operations inside a transaction
//! together with a like counter recount.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

pub struct RecordingLikeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RecordingLikeRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn find(
        &self,
        user_id: i32,
        recording_id: i32,
    ) -> Result<Option<entity::recording_like::Model>, DbErr> {
        entity::prelude::RecordingLike::find()
            .filter(entity::recording_like::Column::UserId.eq(user_id))
            .filter(entity::recording_like::Column::RecordingId.eq(recording_id))
            .one(self.db)
            .await
    }

    pub async fn insert(
        &self,
        user_id: i32,
        recording_id: i32,
    ) -> Result<entity::recording_like::Model, DbErr> {
        entity::recording_like::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            recording_id: ActiveValue::Set(recording_id),
            created_at: ActiveValue::Set(chrono::Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn delete(&self, user_id: i32, recording_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::RecordingLike::delete_many()
            .filter(entity::recording_like::Column::UserId.eq(user_id))
            .filter(entity::recording_like::Column::RecordingId.eq(recording_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Counts the live like rows for a recording.
    pub async fn count_for_recording(&self, recording_id: i32) -> Result<u64, DbErr> {
        entity::prelude::RecordingLike::find()
            .filter(entity::recording_like::Column::RecordingId.eq(recording_id))
            .count(self.db)
            .await
    }
}
