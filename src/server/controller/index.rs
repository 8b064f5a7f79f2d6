use axum::{response::IntoResponse, Json};

use crate::model::api::IndexDto;

pub static INDEX_TAG: &str = "index";

/// Landing document with the service version and where to sign up or log in
#[utoipa::path(
    get,
    path = "/",
    tag = INDEX_TAG,
    responses(
        (status = 200, description = "Service information", body = IndexDto),
    ),
)]
pub async fn index() -> impl IntoResponse {
    Json(IndexDto {
        name: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        signup_url: "/api/auth/signup".to_string(),
        login_url: "/api/auth/login".to_string(),
        docs_url: "/api/docs".to_string(),
    })
}
