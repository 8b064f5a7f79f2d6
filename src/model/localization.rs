use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct LocalizationDto {
    pub id: i32,
    pub accommodation_id: String,
    pub language: String,
    pub description: String,
    #[schema(value_type = Object)]
    pub policy: Value,
    /// Human readable label, e.g. `Localized Luxury Penthouse in fr`
    pub label: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(default)]
pub struct LocalizationFormDto {
    /// One of `en`, `es`, `fr`, `de`, `it`, `pt`, `ru` or `zh`
    pub language: String,
    pub description: String,
    #[schema(value_type = Option<Object>)]
    pub policy: Option<Value>,
}
