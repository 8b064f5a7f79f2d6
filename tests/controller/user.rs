use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use inventory::server::controller::user::{activate_user, get_pending_users};
use inventory_test_utils::prelude::*;

use crate::util::{into_response, logged_in, read_json};

#[tokio::test]
/// Expect a superuser to see and activate a pending account
async fn activates_pending_account() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;
    let pending = test.user().insert_owner("pending", false).await?;
    let admin = test.user().insert_superuser("admin").await?;
    let session = logged_in(&test, admin.id).await;

    let listed = get_pending_users(State(test.to_app_state()), session.clone()).await;
    let (status, body) = read_json(into_response(listed)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["username"], "pending");

    let activated = activate_user(State(test.to_app_state()), session, Path(pending.id)).await;
    let (status, body) = read_json(into_response(activated)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["is_active"], true);

    Ok(())
}

#[tokio::test]
/// Expect owners to be refused account approval
async fn forbids_owner() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;
    let pending = test.user().insert_owner("pending", false).await?;
    let owner = test.user().insert_owner("owner", true).await?;
    let session = logged_in(&test, owner.id).await;

    let result = activate_user(State(test.to_app_state()), session, Path(pending.id)).await;

    assert_eq!(into_response(result).status(), StatusCode::FORBIDDEN);

    Ok(())
}

#[tokio::test]
/// Expect a deactivated session user to be logged out with 403
async fn rejects_deactivated_session_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;
    let pending = test.user().insert_owner("pending", false).await?;
    let session = logged_in(&test, pending.id).await;

    let result = get_pending_users(State(test.to_app_state()), session).await;

    assert_eq!(into_response(result).status(), StatusCode::FORBIDDEN);
    let user_id = inventory::server::model::session::user::SessionUserId::get(&test.session)
        .await
        .unwrap();
    assert!(user_id.is_none());

    Ok(())
}
