use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct AccommodationDto {
    pub id: String,
    pub feed: i16,
    pub title: String,
    pub country_code: String,
    pub bedroom_count: Option<i16>,
    #[schema(value_type = String, example = "4.5")]
    pub review_score: Decimal,
    #[schema(value_type = String, example = "150.00")]
    pub usd_rate: Decimal,
    pub latitude: f64,
    pub longitude: f64,
    pub images: Vec<String>,
    pub amenities: Vec<String>,
    pub published: bool,
    pub location_id: String,
    /// Owning user, if any
    pub user_id: Option<i32>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Editable accommodation fields
#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(default)]
pub struct AccommodationFormDto {
    pub feed: Option<i16>,
    pub title: String,
    pub country_code: String,
    pub bedroom_count: Option<i16>,
    #[schema(value_type = Option<String>, example = "4.5")]
    pub review_score: Option<Decimal>,
    #[schema(value_type = Option<String>, example = "150.00")]
    pub usd_rate: Option<Decimal>,
    pub latitude: f64,
    pub longitude: f64,
    pub images: Vec<String>,
    pub amenities: Vec<String>,
    pub published: bool,
    pub location_id: String,
    /// Only administrators may assign an owner other than themselves
    pub user_id: Option<i32>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateAccommodationDto {
    #[serde(default)]
    pub id: String,
    #[serde(flatten)]
    pub form: AccommodationFormDto,
}

/// Search and filter parameters of the accommodation listing
#[derive(Clone, Debug, Default, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AccommodationQuery {
    /// Matches title or id
    pub search: Option<String>,
    pub country_code: Option<String>,
    pub published: Option<bool>,
}
