use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("User ID is not present in session")]
    UserNotInSession,
    #[error("User ID {0:?} not found in database despite having an active session")]
    UserNotInDatabase(i32),
    #[error("User ID {0:?} has an active session but the account is not active")]
    UserInactive(i32),
    #[error("User ID {0:?} attempted to access the administration API without staff, superuser or owner rights")]
    AdminAccessRequired(i32),
    #[error("User ID {0:?} attempted an action restricted to superusers")]
    SuperuserRequired(i32),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => {
                error_response(StatusCode::UNAUTHORIZED, "Authentication required")
            }
            Self::UserInactive(_) => error_response(
                StatusCode::FORBIDDEN,
                "Your account is not activated yet. Please wait for admin approval.",
            ),
            Self::AdminAccessRequired(_) | Self::SuperuserRequired(_) => error_response(
                StatusCode::FORBIDDEN,
                "You do not have permission to access this page.",
            ),
        }
    }
}
