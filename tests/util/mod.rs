//! Helpers shared by the integration tests.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use http_body_util::BodyExt;
use inventory::server::error::Error;
use inventory_test_utils::TestContext;
use tower_sessions::Session;

/// Turns a controller result into a response, errors included
pub fn into_response<T: IntoResponse>(result: Result<T, Error>) -> Response {
    match result {
        Ok(resp) => resp.into_response(),
        Err(err) => err.into_response(),
    }
}

/// Status code and JSON body of a response
pub async fn read_json(resp: Response) -> (StatusCode, serde_json::Value) {
    let status = resp.status();
    let bytes = resp
        .into_body()
        .collect()
        .await
        .expect("Failed to read response body")
        .to_bytes();

    let body = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("Response body is not JSON")
    };

    (status, body)
}

/// Session of the test context with the provided user logged in
pub async fn logged_in(test: &TestContext, user_id: i32) -> Session {
    inventory::server::model::session::user::SessionUserId::insert(&test.session, user_id)
        .await
        .expect("Failed to insert user into session");

    test.session.clone()
}
