use entity::enums::InstrumentCategory;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstrumentDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub category: InstrumentCategory,
    pub origin_ethnicity: Option<String>,
    pub image_url: Option<String>,
}

impl From<entity::instrument::Model> for InstrumentDto {
    fn from(model: entity::instrument::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            category: model.category,
            origin_ethnicity: model.origin_ethnicity,
            image_url: model.image_url,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstrumentRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub category: InstrumentCategory,
    #[serde(default)]
    pub origin_ethnicity: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}
