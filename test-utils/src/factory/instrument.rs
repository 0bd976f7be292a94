use chrono::Utc;
use entity::enums::InstrumentCategory;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for inserting test instruments.
///
/// Defaults: unique `Instrument {n}` name, `STRING` category.
pub struct InstrumentFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    category: InstrumentCategory,
    origin_ethnicity: Option<String>,
}

impl<'a> InstrumentFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Instrument {id}"),
            category: InstrumentCategory::String,
            origin_ethnicity: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn category(mut self, category: InstrumentCategory) -> Self {
        self.category = category;
        self
    }

    pub fn origin_ethnicity(mut self, origin: impl Into<String>) -> Self {
        self.origin_ethnicity = Some(origin.into());
        self
    }

    pub async fn build(self) -> Result<entity::instrument::Model, DbErr> {
        let now = Utc::now();
        entity::instrument::ActiveModel {
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(None),
            category: ActiveValue::Set(self.category),
            origin_ethnicity: ActiveValue::Set(self.origin_ethnicity),
            image_url: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}
