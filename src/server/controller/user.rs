use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, user::UserDto},
    server::{
        controller::util::get_user::get_actor_from_session, error::Error,
        model::app::AppState, service::user::UserService,
    },
};

pub static USER_TAG: &str = "user";

/// List accounts awaiting activation, superusers only
#[utoipa::path(
    get,
    path = "/api/admin/users/pending",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Pending accounts, oldest first", body = Vec<UserDto>),
        (status = 403, description = "Superuser rights required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_pending_users(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let actor = get_actor_from_session(&state, &session).await?;

    let users = UserService::new(&state.db)
        .get_pending_users(&actor)
        .await?;

    Ok((StatusCode::OK, Json(users)))
}

/// Activate a pending account, superusers only
#[utoipa::path(
    post,
    path = "/api/admin/users/{id}/activate",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "Account activated", body = UserDto),
        (status = 403, description = "Superuser rights required", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn activate_user(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let actor = get_actor_from_session(&state, &session).await?;

    let user = UserService::new(&state.db)
        .activate_user(&actor, id)
        .await?;

    Ok((StatusCode::OK, Json(user)))
}
