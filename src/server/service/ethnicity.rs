//! Ethnic group catalogue management.

use sea_orm::DatabaseConnection;

use crate::{
    model::ethnicity::EthnicityRequest,
    server::{data::ethnicity::EthnicityRepository, error::AppError},
};

pub struct EthnicityService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EthnicityService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<entity::ethnicity::Model>, AppError> {
        Ok(EthnicityRepository::new(self.db).find_all().await?)
    }

    pub async fn get(&self, id: i32) -> Result<entity::ethnicity::Model, AppError> {
        EthnicityRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Ethnicity not found".to_string()))
    }

    /// Creates an ethnic group, rejecting duplicate names before the write.
    pub async fn create(
        &self,
        request: EthnicityRequest,
    ) -> Result<entity::ethnicity::Model, AppError> {
        validate_name(&request.name)?;

        let repo = EthnicityRepository::new(self.db);

        if repo.name_exists(&request.name).await? {
            return Err(AppError::BadRequest(
                "An ethnicity with this name already exists".to_string(),
            ));
        }

        Ok(repo.create(request).await?)
    }

    pub async fn update(
        &self,
        id: i32,
        request: EthnicityRequest,
    ) -> Result<entity::ethnicity::Model, AppError> {
        validate_name(&request.name)?;

        let repo = EthnicityRepository::new(self.db);

        let existing = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Ethnicity not found".to_string()))?;

        if existing.name != request.name && repo.name_exists(&request.name).await? {
            return Err(AppError::BadRequest(
                "An ethnicity with this name already exists".to_string(),
            ));
        }

        Ok(repo.update(existing, request).await?)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let deleted = EthnicityRepository::new(self.db).delete(id).await?;

        if deleted == 0 {
            return Err(AppError::NotFound("Ethnicity not found".to_string()));
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
