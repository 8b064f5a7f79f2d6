use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// The response when submitted input fails validation
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ValidationErrorDto {
    /// Summary of the failure
    pub error: String,
    /// Messages keyed by the name of the offending field
    pub fields: BTreeMap<String, Vec<String>>,
}

/// A user-facing notification, e.g. after a successful signup
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct MessageDto {
    pub message: String,
}

/// Landing document served at `/`
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct IndexDto {
    pub name: String,
    pub version: String,
    pub signup_url: String,
    pub login_url: String,
    pub docs_url: String,
}
