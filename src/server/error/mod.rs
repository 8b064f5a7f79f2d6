//! Error types for the inventory server.
//!
//! Domain-specific error enums (authentication, ownership, configuration, resource lookup and
//! input validation) are aggregated into [`Error`]. Every error implements `IntoResponse` so
//! controllers can return `Result<_, Error>` and let `?` pick the HTTP status.

pub mod access;
pub mod auth;
pub mod config;
pub mod resource;
pub mod validation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        access::AccessError, auth::AuthError, config::ConfigError, resource::ResourceError,
        validation::ValidationError,
    },
};

/// Main error type for the inventory server.
///
/// Wraps the domain errors and the external library errors that can surface while handling a
/// request or running a batch job. `#[from]` conversions let the `?` operator lift any of them.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (environment variables, missing owner group).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication error (session, inactive account, admin access).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// The actor may not perform the action on a record.
    #[error(transparent)]
    AccessError(#[from] AccessError),
    /// Record lookup or uniqueness failure.
    #[error(transparent)]
    ResourceError(#[from] ResourceError),
    /// Submitted input failed validation.
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
    /// Password could not be hashed or a stored hash is malformed.
    #[error("Password hashing failed: {0}")]
    PasswordHashError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// Redis session store error (connection, command execution).
    #[error(transparent)]
    SessionRedisError(#[from] tower_sessions_redis_store::fred::prelude::Error),
    /// Filesystem error, e.g. while writing the sitemap.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
    /// JSON serialization error.
    #[error(transparent)]
    SerdeJsonError(#[from] serde_json::Error),
}

/// Maps errors to HTTP responses.
///
/// Domain errors carry their own mapping; library errors become a logged 500.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::AccessError(err) => err.into_response(),
            Self::ResourceError(err) => err.into_response(),
            Self::ValidationError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper converting any displayable error into a 500 Internal Server Error response.
///
/// The full message is logged while the client only receives a generic body.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}

/// Builds a JSON error response with the provided status and message.
pub(crate) fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorDto {
            error: message.into(),
        }),
    )
        .into_response()
}
