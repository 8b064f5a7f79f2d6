use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, MessageDto, ValidationErrorDto},
        user::{LoginDto, SignupDto, UserDto},
    },
    server::{
        controller::util::get_user::get_user_from_session,
        error::{error_response, Error},
        model::{app::AppState, session::user::SessionUserId},
        service::{
            auth::{
                login::{
                    login_service, LoginOutcome, INACTIVE_ACCOUNT_MESSAGE,
                    INVALID_CREDENTIALS_MESSAGE,
                },
                signup::{
                    signup_service, SignupOutcome, MISSING_OWNER_GROUP_MESSAGE,
                    SIGNUP_SUCCESS_MESSAGE,
                },
            },
            user::to_dto,
        },
    },
};

pub static AUTH_TAG: &str = "auth";

/// Register a new property owner account
///
/// The account is created inactive and has to be activated by an administrator before the
/// user can log in.
#[utoipa::path(
    post,
    path = "/api/auth/signup",
    tag = AUTH_TAG,
    request_body = SignupDto,
    responses(
        (status = 201, description = "Account created, awaiting activation", body = MessageDto),
        (status = 400, description = "Form contains invalid fields", body = ValidationErrorDto),
        (status = 500, description = "Owner group missing or internal server error", body = ErrorDto)
    ),
)]
pub async fn signup(
    State(state): State<AppState>,
    Json(payload): Json<SignupDto>,
) -> Result<impl IntoResponse, Error> {
    match signup_service(&state.db, payload).await? {
        SignupOutcome::Created(_) => Ok((
            StatusCode::CREATED,
            Json(MessageDto {
                message: SIGNUP_SUCCESS_MESSAGE.to_string(),
            }),
        )
            .into_response()),
        SignupOutcome::Invalid(errors) => Err(errors.into()),
        SignupOutcome::MissingOwnerGroup => Ok(error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            MISSING_OWNER_GROUP_MESSAGE,
        )),
    }
}

/// Log in with username and password
///
/// Pending accounts are refused with a message distinct from invalid credentials and no
/// session is established for them.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = UserDto),
        (status = 400, description = "Username or password missing", body = ValidationErrorDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 403, description = "Account not activated yet", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, Error> {
    match login_service(&state.db, payload).await? {
        LoginOutcome::Authenticated(user) => {
            SessionUserId::insert(&session, user.id).await?;

            Ok((StatusCode::OK, Json(to_dto(user))).into_response())
        }
        LoginOutcome::InvalidCredentials => Ok(error_response(
            StatusCode::UNAUTHORIZED,
            INVALID_CREDENTIALS_MESSAGE,
        )),
        LoginOutcome::Inactive => Ok(error_response(
            StatusCode::FORBIDDEN,
            INACTIVE_ACCOUNT_MESSAGE,
        )),
        LoginOutcome::Invalid(errors) => Err(errors.into()),
    }
}

/// Logs the user out by clearing their session
#[utoipa::path(
    get,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Logged out", body = MessageDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, Error> {
    let maybe_user_id = SessionUserId::get(&session).await?;

    // Clearing a session without data fails in the store, only clear when logged in
    if maybe_user_id.is_some() {
        session.clear().await;
    }

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "You have been logged out.".to_string(),
        }),
    ))
}

/// Get the currently logged in user
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current user", body = UserDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    Ok((StatusCode::OK, Json(user)))
}
