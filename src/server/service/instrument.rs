//! Instrument catalogue management.

use entity::enums::InstrumentCategory;
use sea_orm::DatabaseConnection;

use crate::{
    model::instrument::InstrumentRequest,
    server::{data::instrument::InstrumentRepository, error::AppError},
};

pub struct InstrumentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> InstrumentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<entity::instrument::Model>, AppError> {
        Ok(InstrumentRepository::new(self.db).find_all().await?)
    }

    pub async fn list_by_category(
        &self,
        category: InstrumentCategory,
    ) -> Result<Vec<entity::instrument::Model>, AppError> {
        Ok(InstrumentRepository::new(self.db)
            .find_by_category(category)
            .await?)
    }

    pub async fn get(&self, id: i32) -> Result<entity::instrument::Model, AppError> {
        InstrumentRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Instrument not found".to_string()))
    }

    /// Creates an instrument, rejecting duplicate names before the write.
    pub async fn create(
        &self,
        request: InstrumentRequest,
    ) -> Result<entity::instrument::Model, AppError> {
        validate_name(&request.name)?;

        let repo = InstrumentRepository::new(self.db);

        if repo.name_exists(&request.name).await? {
            return Err(AppError::BadRequest(
                "An instrument with this name already exists".to_string(),
            ));
        }

        Ok(repo.create(request).await?)
    }

    pub async fn update(
        &self,
        id: i32,
        request: InstrumentRequest,
    ) -> Result<entity::instrument::Model, AppError> {
        validate_name(&request.name)?;

        let repo = InstrumentRepository::new(self.db);

        let existing = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Instrument not found".to_string()))?;

        if existing.name != request.name && repo.name_exists(&request.name).await? {
            return Err(AppError::BadRequest(
                "An instrument with this name already exists".to_string(),
            ));
        }

        Ok(repo.update(existing, request).await?)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let deleted = InstrumentRepository::new(self.db).delete(id).await?;

        if deleted == 0 {
            return Err(AppError::NotFound("Instrument not found".to_string()));
        }

        Ok(())
    }
}

fn validate_name(name: &str) -> Result<(), AppError> {
    if name.trim().is_empty() {
        return Err(AppError::BadRequest("Name is required".to_string()));
    }

    Ok(())
}
