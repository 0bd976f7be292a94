//! Ethnicity repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::ethnicity::EthnicityRequest;

pub struct EthnicityRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EthnicityRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Lists all ethnic groups ordered by name.
    pub async fn find_all(&self) -> Result<Vec<entity::ethnicity::Model>, DbErr> {
        entity::prelude::Ethnicity::find()
            .order_by_asc(entity::ethnicity::Column::Name)
            .all(self.db)
            .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::ethnicity::Model>, DbErr> {
        entity::prelude::Ethnicity::find_by_id(id).one(self.db).await
    }

    pub async fn name_exists(&self, name: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Ethnicity::find()
            .filter(entity::ethnicity::Column::Name.eq(name))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn create(&self, param: EthnicityRequest) -> Result<entity::ethnicity::Model, DbErr> {
        let now = chrono::Utc::now();

        entity::ethnicity::ActiveModel {
            name: ActiveValue::Set(param.name),
            description: ActiveValue::Set(param.description),
            population: ActiveValue::Set(param.population),
            location: ActiveValue::Set(param.location),
            image_url: ActiveValue::Set(param.image_url),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Replaces the mutable fields of an existing ethnic group.
    pub async fn update(
        &self,
        existing: entity::ethnicity::Model,
        param: EthnicityRequest,
    ) -> Result<entity::ethnicity::Model, DbErr> {
        let mut active: entity::ethnicity::ActiveModel = existing.into();
        active.name = ActiveValue::Set(param.name);
        active.description = ActiveValue::Set(param.description);
        active.population = ActiveValue::Set(param.population);
        active.location = ActiveValue::Set(param.location);
        active.image_url = ActiveValue::Set(param.image_url);
        active.updated_at = ActiveValue::Set(chrono::Utc::now());

        active.update(self.db).await
    }

    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Ethnicity::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
