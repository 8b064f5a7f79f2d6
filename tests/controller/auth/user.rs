use axum::{extract::State, http::StatusCode};
use inventory::server::controller::auth::get_user;
use inventory_test_utils::prelude::*;

use crate::util::{into_response, logged_in, read_json};

#[tokio::test]
/// Expect 200 with the logged in user
async fn returns_logged_in_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;
    let owner = test.user().insert_owner("owner", true).await?;
    let session = logged_in(&test, owner.id).await;

    let result = get_user(State(test.to_app_state()), session).await;

    let (status, body) = read_json(into_response(result)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], owner.id);
    assert_eq!(body["email"], "owner@example.com");

    Ok(())
}

#[tokio::test]
/// Expect 401 when nobody is logged in
async fn returns_unauthorized_without_session() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;

    let result = get_user(State(test.to_app_state()), test.session.clone()).await;

    let (status, _) = read_json(into_response(result)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    Ok(())
}

#[tokio::test]
/// Expect 401 and a cleared session when the session user was deleted
async fn returns_unauthorized_for_deleted_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;
    let session = logged_in(&test, 42).await;

    let result = get_user(State(test.to_app_state()), session).await;

    let (status, _) = read_json(into_response(result)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    Ok(())
}
