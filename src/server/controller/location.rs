use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        location::{CreateLocationDto, LocationDto, LocationFormDto, LocationQuery},
    },
    server::{
        controller::util::get_user::get_actor_from_session, error::Error,
        model::app::AppState, service::location::LocationService,
    },
};

pub static LOCATION_TAG: &str = "location";

/// List locations ordered by title
#[utoipa::path(
    get,
    path = "/api/admin/locations",
    tag = LOCATION_TAG,
    params(LocationQuery),
    responses(
        (status = 200, description = "Matching locations", body = Vec<LocationDto>),
        (status = 400, description = "Unknown location type filter", body = ValidationErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "No access to the administration API", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_locations(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<LocationQuery>,
) -> Result<impl IntoResponse, Error> {
    get_actor_from_session(&state, &session).await?;

    let locations = LocationService::new(&state.db).list(query).await?;

    Ok((StatusCode::OK, Json(locations)))
}

/// Create a location, staff and superusers only
#[utoipa::path(
    post,
    path = "/api/admin/locations",
    tag = LOCATION_TAG,
    request_body = CreateLocationDto,
    responses(
        (status = 201, description = "Location created", body = LocationDto),
        (status = 400, description = "Form contains invalid fields", body = ValidationErrorDto),
        (status = 403, description = "Locations are read only for the user", body = ErrorDto),
        (status = 409, description = "Location ID already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_location(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateLocationDto>,
) -> Result<impl IntoResponse, Error> {
    let actor = get_actor_from_session(&state, &session).await?;

    let location = LocationService::new(&state.db)
        .create(&actor, payload)
        .await?;

    Ok((StatusCode::CREATED, Json(location)))
}

#[utoipa::path(
    get,
    path = "/api/admin/locations/{id}",
    tag = LOCATION_TAG,
    params(("id" = String, Path, description = "Location ID")),
    responses(
        (status = 200, description = "Location found", body = LocationDto),
        (status = 404, description = "Location not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_location(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    get_actor_from_session(&state, &session).await?;

    let location = LocationService::new(&state.db).get(&id).await?;

    Ok((StatusCode::OK, Json(location)))
}

/// Update a location, staff and superusers only
#[utoipa::path(
    put,
    path = "/api/admin/locations/{id}",
    tag = LOCATION_TAG,
    params(("id" = String, Path, description = "Location ID")),
    request_body = LocationFormDto,
    responses(
        (status = 200, description = "Location updated", body = LocationDto),
        (status = 400, description = "Form contains invalid fields", body = ValidationErrorDto),
        (status = 403, description = "Locations are read only for the user", body = ErrorDto),
        (status = 404, description = "Location not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_location(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
    Json(payload): Json<LocationFormDto>,
) -> Result<impl IntoResponse, Error> {
    let actor = get_actor_from_session(&state, &session).await?;

    let location = LocationService::new(&state.db)
        .update(&actor, &id, payload)
        .await?;

    Ok((StatusCode::OK, Json(location)))
}

/// Delete a location
///
/// Children are kept with their parent cleared, accommodations in the location are deleted.
#[utoipa::path(
    delete,
    path = "/api/admin/locations/{id}",
    tag = LOCATION_TAG,
    params(("id" = String, Path, description = "Location ID")),
    responses(
        (status = 204, description = "Location deleted"),
        (status = 403, description = "Locations are read only for the user", body = ErrorDto),
        (status = 404, description = "Location not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_location(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let actor = get_actor_from_session(&state, &session).await?;

    LocationService::new(&state.db).delete(&actor, &id).await?;

    Ok(StatusCode::NO_CONTENT)
}
