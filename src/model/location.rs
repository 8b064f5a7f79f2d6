use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct LocationDto {
    pub id: String,
    pub title: String,
    pub latitude: f64,
    pub longitude: f64,
    pub parent_id: Option<String>,
    /// One of `continent`, `country`, `state` or `city`
    pub location_type: String,
    pub country_code: Option<String>,
    pub state_abbr: Option<String>,
    pub city: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Editable location fields
#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(default)]
pub struct LocationFormDto {
    pub title: String,
    pub latitude: f64,
    pub longitude: f64,
    pub parent_id: Option<String>,
    /// Defaults to `city` when omitted
    pub location_type: Option<String>,
    pub country_code: Option<String>,
    pub state_abbr: Option<String>,
    pub city: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateLocationDto {
    #[serde(default)]
    pub id: String,
    #[serde(flatten)]
    pub form: LocationFormDto,
}

/// Search and filter parameters of the location listing
#[derive(Clone, Debug, Default, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LocationQuery {
    /// Matches title, country code, state abbreviation or city
    pub search: Option<String>,
    pub location_type: Option<String>,
    pub country_code: Option<String>,
}
