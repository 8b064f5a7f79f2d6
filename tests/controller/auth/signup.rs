use axum::{extract::State, http::StatusCode, Json};
use inventory::{
    model::user::SignupDto,
    server::{controller::auth::signup, data::user::UserRepository},
};
use inventory_test_utils::prelude::*;

use crate::util::{into_response, read_json};

fn form(username: &str, password1: &str, password2: &str) -> SignupDto {
    SignupDto {
        username: username.to_string(),
        email: format!("{}@example.com", username),
        password1: password1.to_string(),
        password2: password2.to_string(),
    }
}

#[tokio::test]
/// Expect 201 with the activation notice and an inactive account
async fn returns_created_for_valid_form() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_owner_group()
        .build()
        .await?;

    let result = signup(
        State(test.to_app_state()),
        Json(form("owner", "ComplexPassword123!", "ComplexPassword123!")),
    )
    .await;

    let (status, body) = read_json(into_response(result)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        body["message"],
        "Your account has been created successfully. Wait for admin activation."
    );

    let user = UserRepository::new(&test.db)
        .get_by_username("owner")
        .await?
        .expect("user should exist");
    assert!(!user.is_active);

    Ok(())
}

#[tokio::test]
/// Expect 400 with a password2 error and no user for mismatched passwords
async fn returns_bad_request_for_password_mismatch() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_owner_group()
        .build()
        .await?;

    let result = signup(
        State(test.to_app_state()),
        Json(form("owner", "ComplexPassword123!", "SomethingElse456?")),
    )
    .await;

    let (status, body) = read_json(into_response(result)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["fields"]["password2"][0],
        "The two password fields didn’t match."
    );
    assert!(body.get("message").is_none());

    let user = UserRepository::new(&test.db).get_by_username("owner").await?;
    assert!(user.is_none());

    Ok(())
}

#[tokio::test]
/// Expect 500 with the configuration message and no user without the owner group
async fn returns_configuration_error_without_owner_group() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;

    let result = signup(
        State(test.to_app_state()),
        Json(form("owner", "ComplexPassword123!", "ComplexPassword123!")),
    )
    .await;

    let (status, body) = read_json(into_response(result)).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("Property Owners group does not exist"));
    assert!(body.get("message").is_none());

    let user = UserRepository::new(&test.db).get_by_username("owner").await?;
    assert!(user.is_none());

    Ok(())
}
