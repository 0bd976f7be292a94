use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for inserting test ethnicities with a unique default name.
pub struct EthnicityFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    description: Option<String>,
    location: Option<String>,
}

impl<'a> EthnicityFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Ethnicity {id}"),
            description: None,
            location: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub async fn build(self) -> Result<entity::ethnicity::Model, DbErr> {
        let now = Utc::now();
        entity::ethnicity::ActiveModel {
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            population: ActiveValue::Set(None),
            location: ActiveValue::Set(self.location),
            image_url: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}
