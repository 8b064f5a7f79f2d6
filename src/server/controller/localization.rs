use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        localization::{LocalizationDto, LocalizationFormDto},
    },
    server::{
        controller::util::get_user::get_actor_from_session, error::Error,
        model::app::AppState, service::localization::LocalizationService,
    },
};

pub static LOCALIZATION_TAG: &str = "localization";

/// List the localizations of an accommodation
#[utoipa::path(
    get,
    path = "/api/admin/accommodations/{id}/localizations",
    tag = LOCALIZATION_TAG,
    params(("id" = String, Path, description = "Accommodation ID")),
    responses(
        (status = 200, description = "Localizations of the accommodation", body = Vec<LocalizationDto>),
        (status = 404, description = "Accommodation not found or not visible", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_localizations(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let actor = get_actor_from_session(&state, &session).await?;

    let localizations = LocalizationService::new(&state.db)
        .list(&actor, &id)
        .await?;

    Ok((StatusCode::OK, Json(localizations)))
}

/// Add a localization to an accommodation the user may edit
#[utoipa::path(
    post,
    path = "/api/admin/accommodations/{id}/localizations",
    tag = LOCALIZATION_TAG,
    params(("id" = String, Path, description = "Accommodation ID")),
    request_body = LocalizationFormDto,
    responses(
        (status = 201, description = "Localization created", body = LocalizationDto),
        (status = 400, description = "Form contains invalid fields", body = ValidationErrorDto),
        (status = 403, description = "User does not own the accommodation", body = ErrorDto),
        (status = 404, description = "Accommodation not found or not visible", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_localization(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
    Json(payload): Json<LocalizationFormDto>,
) -> Result<impl IntoResponse, Error> {
    let actor = get_actor_from_session(&state, &session).await?;

    let localization = LocalizationService::new(&state.db)
        .create(&actor, &id, payload)
        .await?;

    Ok((StatusCode::CREATED, Json(localization)))
}

#[utoipa::path(
    put,
    path = "/api/admin/localizations/{id}",
    tag = LOCALIZATION_TAG,
    params(("id" = i32, Path, description = "Localization ID")),
    request_body = LocalizationFormDto,
    responses(
        (status = 200, description = "Localization updated", body = LocalizationDto),
        (status = 400, description = "Form contains invalid fields", body = ValidationErrorDto),
        (status = 403, description = "User does not own the accommodation", body = ErrorDto),
        (status = 404, description = "Localization not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_localization(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<LocalizationFormDto>,
) -> Result<impl IntoResponse, Error> {
    let actor = get_actor_from_session(&state, &session).await?;

    let localization = LocalizationService::new(&state.db)
        .update(&actor, id, payload)
        .await?;

    Ok((StatusCode::OK, Json(localization)))
}

#[utoipa::path(
    delete,
    path = "/api/admin/localizations/{id}",
    tag = LOCALIZATION_TAG,
    params(("id" = i32, Path, description = "Localization ID")),
    responses(
        (status = 204, description = "Localization deleted"),
        (status = 403, description = "User does not own the accommodation", body = ErrorDto),
        (status = 404, description = "Localization not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_localization(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let actor = get_actor_from_session(&state, &session).await?;

    LocalizationService::new(&state.db)
        .delete(&actor, id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
