use axum::{extract::State, http::StatusCode, Json};
use inventory::{
    model::user::LoginDto,
    server::{controller::auth::login, model::session::user::SessionUserId},
};
use inventory_test_utils::{constant::TEST_PASSWORD, prelude::*};

use crate::util::{into_response, read_json};

fn form(username: &str, password: &str) -> LoginDto {
    LoginDto {
        username: username.to_string(),
        password: password.to_string(),
    }
}

#[tokio::test]
/// Expect 200 and the user ID stored in session for an active account
async fn returns_success_for_active_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;
    let owner = test.user().insert_owner("owner", true).await?;

    let result = login(
        State(test.to_app_state()),
        test.session.clone(),
        Json(form("owner", TEST_PASSWORD)),
    )
    .await;

    let (status, body) = read_json(into_response(result)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["username"], "owner");

    let user_id = SessionUserId::get(&test.session).await.unwrap();
    assert_eq!(user_id, Some(owner.id));

    Ok(())
}

#[tokio::test]
/// Expect 403 with the activation message and no session for a pending account
async fn returns_forbidden_for_inactive_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;
    test.user().insert_owner("pending", false).await?;

    let result = login(
        State(test.to_app_state()),
        test.session.clone(),
        Json(form("pending", TEST_PASSWORD)),
    )
    .await;

    let (status, body) = read_json(into_response(result)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(
        body["error"],
        "Your account is not activated yet. Please wait for admin approval."
    );

    let user_id = SessionUserId::get(&test.session).await.unwrap();
    assert!(user_id.is_none());

    Ok(())
}

#[tokio::test]
/// Expect 401 for a wrong password
async fn returns_unauthorized_for_invalid_credentials() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;
    test.user().insert_owner("owner", true).await?;

    let result = login(
        State(test.to_app_state()),
        test.session.clone(),
        Json(form("owner", "NotThePassword9!")),
    )
    .await;

    let (status, body) = read_json(into_response(result)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Invalid login credentials. Please try again.");

    Ok(())
}

#[tokio::test]
/// Expect 400 when the form is empty
async fn returns_bad_request_for_empty_form() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;

    let result = login(
        State(test.to_app_state()),
        test.session.clone(),
        Json(LoginDto::default()),
    )
    .await;

    let (status, body) = read_json(into_response(result)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["fields"]["username"].is_array());
    assert!(body["fields"]["password"].is_array());

    Ok(())
}
