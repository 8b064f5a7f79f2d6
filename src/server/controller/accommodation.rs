use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        accommodation::{
            AccommodationDto, AccommodationFormDto, AccommodationQuery, CreateAccommodationDto,
        },
        api::{ErrorDto, ValidationErrorDto},
    },
    server::{
        controller::util::get_user::get_actor_from_session, error::Error,
        model::app::AppState, service::accommodation::AccommodationService,
    },
};

pub static ACCOMMODATION_TAG: &str = "accommodation";

/// List the accommodations visible to the logged in user
///
/// Property owners only see the accommodations they own.
#[utoipa::path(
    get,
    path = "/api/admin/accommodations",
    tag = ACCOMMODATION_TAG,
    params(AccommodationQuery),
    responses(
        (status = 200, description = "Visible accommodations", body = Vec<AccommodationDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "No access to the administration API", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_accommodations(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<AccommodationQuery>,
) -> Result<impl IntoResponse, Error> {
    let actor = get_actor_from_session(&state, &session).await?;

    let accommodations = AccommodationService::new(&state.db)
        .list(&actor, query)
        .await?;

    Ok((StatusCode::OK, Json(accommodations)))
}

/// Create an accommodation, owned by the logged in user unless another owner is given
#[utoipa::path(
    post,
    path = "/api/admin/accommodations",
    tag = ACCOMMODATION_TAG,
    request_body = CreateAccommodationDto,
    responses(
        (status = 201, description = "Accommodation created", body = AccommodationDto),
        (status = 400, description = "Form contains invalid fields", body = ValidationErrorDto),
        (status = 409, description = "Accommodation ID already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_accommodation(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateAccommodationDto>,
) -> Result<impl IntoResponse, Error> {
    let actor = get_actor_from_session(&state, &session).await?;

    let accommodation = AccommodationService::new(&state.db)
        .create(&actor, payload)
        .await?;

    Ok((StatusCode::CREATED, Json(accommodation)))
}

#[utoipa::path(
    get,
    path = "/api/admin/accommodations/{id}",
    tag = ACCOMMODATION_TAG,
    params(("id" = String, Path, description = "Accommodation ID")),
    responses(
        (status = 200, description = "Accommodation found", body = AccommodationDto),
        (status = 404, description = "Accommodation not found or not visible", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_accommodation(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let actor = get_actor_from_session(&state, &session).await?;

    let accommodation = AccommodationService::new(&state.db)
        .get(&actor, &id)
        .await?;

    Ok((StatusCode::OK, Json(accommodation)))
}

/// Update an accommodation, owner or superuser only
#[utoipa::path(
    put,
    path = "/api/admin/accommodations/{id}",
    tag = ACCOMMODATION_TAG,
    params(("id" = String, Path, description = "Accommodation ID")),
    request_body = AccommodationFormDto,
    responses(
        (status = 200, description = "Accommodation updated", body = AccommodationDto),
        (status = 400, description = "Form contains invalid fields", body = ValidationErrorDto),
        (status = 403, description = "User does not own the accommodation", body = ErrorDto),
        (status = 404, description = "Accommodation not found or not visible", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_accommodation(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
    Json(payload): Json<AccommodationFormDto>,
) -> Result<impl IntoResponse, Error> {
    let actor = get_actor_from_session(&state, &session).await?;

    let accommodation = AccommodationService::new(&state.db)
        .update(&actor, &id, payload)
        .await?;

    Ok((StatusCode::OK, Json(accommodation)))
}

/// Delete an accommodation and its localizations, owner or superuser only
#[utoipa::path(
    delete,
    path = "/api/admin/accommodations/{id}",
    tag = ACCOMMODATION_TAG,
    params(("id" = String, Path, description = "Accommodation ID")),
    responses(
        (status = 204, description = "Accommodation deleted"),
        (status = 403, description = "User does not own the accommodation", body = ErrorDto),
        (status = 404, description = "Accommodation not found or not visible", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_accommodation(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let actor = get_actor_from_session(&state, &session).await?;

    AccommodationService::new(&state.db)
        .delete(&actor, &id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
