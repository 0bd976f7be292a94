//! Instrument repository.

use entity::enums::InstrumentCategory;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::instrument::InstrumentRequest;

pub struct InstrumentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> InstrumentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn find_all(&self) -> Result<Vec<entity::instrument::Model>, DbErr> {
        entity::prelude::Instrument::find()
            .order_by_asc(entity::instrument::Column::Name)
            .all(self.db)
            .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::instrument::Model>, DbErr> {
        entity::prelude::Instrument::find_by_id(id).one(self.db).await
    }

    /// Lists all instruments in one category, ordered by name.
    pub async fn find_by_category(
        &self,
        category: InstrumentCategory,
    ) -> Result<Vec<entity::instrument::Model>, DbErr> {
        entity::prelude::Instrument::find()
            .filter(entity::instrument::Column::Category.eq(category))
            .order_by_asc(entity::instrument::Column::Name)
            .all(self.db)
            .await
    }

    /// Finds the subset of `ids` that exist, for referential checks before
    /// linking.
    pub async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<entity::instrument::Model>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Instrument::find()
            .filter(entity::instrument::Column::Id.is_in(ids.iter().copied()))
            .all(self.db)
            .await
    }

    pub async fn name_exists(&self, name: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Instrument::find()
            .filter(entity::instrument::Column::Name.eq(name))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn create(
        &self,
        param: InstrumentRequest,
    ) -> Result<entity::instrument::Model, DbErr> {
        let now = chrono::Utc::now();

        entity::instrument::ActiveModel {
            name: ActiveValue::Set(param.name),
            description: ActiveValue::Set(param.description),
            category: ActiveValue::Set(param.category),
            origin_ethnicity: ActiveValue::Set(param.origin_ethnicity),
            image_url: ActiveValue::Set(param.image_url),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn update(
        &self,
        existing: entity::instrument::Model,
        param: InstrumentRequest,
    ) -> Result<entity::instrument::Model, DbErr> {
        let mut active: entity::instrument::ActiveModel = existing.into();
        active.name = ActiveValue::Set(param.name);
        active.description = ActiveValue::Set(param.description);
        active.category = ActiveValue::Set(param.category);
        active.origin_ethnicity = ActiveValue::Set(param.origin_ethnicity);
        active.image_url = ActiveValue::Set(param.image_url);
        active.updated_at = ActiveValue::Set(chrono::Utc::now());

        active.update(self.db).await
    }

    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Instrument::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
