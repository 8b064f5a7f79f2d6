use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum AccessError {
    #[error("User ID {user_id:?} is not the owner of accommodation {accommodation_id:?}")]
    NotAccommodationOwner {
        user_id: i32,
        accommodation_id: String,
    },
    #[error("User ID {0:?} may not modify locations")]
    LocationsReadOnly(i32),
}

impl IntoResponse for AccessError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let message = match self {
            Self::NotAccommodationOwner { .. } => {
                "You do not have permission to modify this accommodation."
            }
            Self::LocationsReadOnly(_) => "You do not have permission to modify locations.",
        };

        error_response(StatusCode::FORBIDDEN, message)
    }
}
