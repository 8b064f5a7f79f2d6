use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::{error_response, InternalServerError};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid value for environment variable {var}: {reason}")]
    InvalidEnvValue { var: String, reason: String },
    #[error("{0} group does not exist. Please contact the administrator.")]
    MissingGroup(String),
}

impl IntoResponse for ConfigError {
    fn into_response(self) -> Response {
        match self {
            // Deployment precondition, shown to the user so they can report it
            Self::MissingGroup(_) => {
                tracing::error!("{}", self);

                error_response(StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
            err => InternalServerError(err).into_response(),
        }
    }
}
