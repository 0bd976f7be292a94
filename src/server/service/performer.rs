//! Performer catalogue management.

use sea_orm::DatabaseConnection;

use crate::{
    model::performer::PerformerRequest,
    server::{
        data::{
            ethnicity::EthnicityRepository,
            instrument::InstrumentRepository,
            performer::{PerformerRepository, PerformerWithRelations},
        },
        error::AppError,
    },
};

pub struct PerformerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PerformerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<PerformerWithRelations>, AppError> {
        Ok(PerformerRepository::new(self.db).find_all().await?)
    }

    /// Lists performers recognised as masters of their tradition.
    pub async fn list_masters(&self) -> Result<Vec<PerformerWithRelations>, AppError> {
        Ok(PerformerRepository::new(self.db).find_masters().await?)
    }

    pub async fn get(&self, id: i32) -> Result<PerformerWithRelations, AppError> {
        PerformerRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Performer not found".to_string()))
    }

    /// Creates a performer after checking its referenced ethnicity and
    /// instruments exist.
    pub async fn create(&self, request: PerformerRequest) -> Result<PerformerWithRelations, AppError> {
        self.validate(&request).await?;

        let repo = PerformerRepository::new(self.db);
        let performer = repo.create(request).await?;

        repo.find_by_id(performer.id)
            .await?
            .ok_or_else(|| AppError::InternalError("Performer vanished after insert".to_string()))
    }

    pub async fn update(
        &self,
        id: i32,
        request: PerformerRequest,
    ) -> Result<PerformerWithRelations, AppError> {
        let repo = PerformerRepository::new(self.db);

        let existing = repo
            .find_model(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Performer not found".to_string()))?;

        self.validate(&request).await?;

        repo.update(existing, request).await?;

        repo.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::InternalError("Performer vanished after update".to_string()))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let deleted = PerformerRepository::new(self.db).delete(id).await?;

        if deleted == 0 {
            return Err(AppError::NotFound("Performer not found".to_string()));
        }

        Ok(())
    }

    async fn validate(&self, request: &PerformerRequest) -> Result<(), AppError> {
        if request.name.trim().is_empty() {
            return Err(AppError::BadRequest("Name is required".to_string()));
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

        Ok(())
    }
}
