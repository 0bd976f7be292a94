use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EthnicityDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub population: Option<String>,
    pub location: Option<String>,
    pub image_url: Option<String>,
}

impl From<entity::ethnicity::Model> for EthnicityDto {
    fn from(model: entity::ethnicity::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            population: model.population,
            location: model.location,
            image_url: model.image_url,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EthnicityRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub population: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}
