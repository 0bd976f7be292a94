use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for inserting test performers.
///
/// Defaults: unique `Performer {n}` name, not a master, no ethnicity.
pub struct PerformerFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    is_master: bool,
    ethnicity_id: Option<i32>,
}

impl<'a> PerformerFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Performer {id}"),
            is_master: false,
            ethnicity_id: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn master(mut self, is_master: bool) -> Self {
        self.is_master = is_master;
        self
    }

    pub fn ethnicity_id(mut self, ethnicity_id: i32) -> Self {
        self.ethnicity_id = Some(ethnicity_id);
        self
    }

    pub async fn build(self) -> Result<entity::performer::Model, DbErr> {
        let now = Utc::now();
        entity::performer::ActiveModel {
            name: ActiveValue::Set(self.name),
            bio: ActiveValue::Set(None),
            birth_date: ActiveValue::Set(None),
            death_date: ActiveValue::Set(None),
            is_master: ActiveValue::Set(self.is_master),
            image_url: ActiveValue::Set(None),
            ethnicity_id: ActiveValue::Set(self.ethnicity_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}
