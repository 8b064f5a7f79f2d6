use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use entity::location::LocationType;
use inventory::{
    model::accommodation::{AccommodationFormDto, AccommodationQuery, CreateAccommodationDto},
    server::controller::accommodation::{
        create_accommodation, delete_accommodation, list_accommodations, update_accommodation,
    },
};
use inventory_test_utils::prelude::*;
use rust_decimal::Decimal;

use crate::util::{into_response, logged_in, read_json};

async fn setup() -> Result<TestContext, TestError> {
    TestBuilder::new()
        .with_inventory_tables()
        .with_location("jp", "Japan", LocationType::Country, None)
        .with_location("tokyo", "Tokyo", LocationType::City, Some("jp"))
        .build()
        .await
}

fn form(title: &str) -> AccommodationFormDto {
    AccommodationFormDto {
        title: title.to_string(),
        country_code: "JP".to_string(),
        usd_rate: Some(Decimal::new(12000, 2)),
        location_id: "tokyo".to_string(),
        ..Default::default()
    }
}

#[tokio::test]
/// Expect owners to list only their own accommodations
async fn lists_only_owned_records_for_owner() -> Result<(), TestError> {
    let test = setup().await?;
    let owner = test.user().insert_owner("owner", true).await?;
    let other = test.user().insert_owner("other", true).await?;
    test.accommodation()
        .insert_accommodation("acc-1", "tokyo", Some(owner.id))
        .await?;
    test.accommodation()
        .insert_accommodation("acc-2", "tokyo", Some(other.id))
        .await?;
    let session = logged_in(&test, owner.id).await;

    let result = list_accommodations(
        State(test.to_app_state()),
        session,
        Query(AccommodationQuery::default()),
    )
    .await;

    let (status, body) = read_json(into_response(result)).await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["acc-1"]);

    Ok(())
}

#[tokio::test]
/// Expect the creator to become owner and a later superuser edit to keep that owner
async fn assigns_creator_as_owner_once() -> Result<(), TestError> {
    let test = setup().await?;
    let owner = test.user().insert_owner("owner", true).await?;
    let admin = test.user().insert_superuser("admin").await?;

    let session = logged_in(&test, owner.id).await;
    let result = create_accommodation(
        State(test.to_app_state()),
        session,
        Json(CreateAccommodationDto {
            id: "acc-1".to_string(),
            form: form("Shibuya Loft"),
        }),
    )
    .await;

    let (status, body) = read_json(into_response(result)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["user_id"], owner.id);

    let session = logged_in(&test, admin.id).await;
    let result = update_accommodation(
        State(test.to_app_state()),
        session,
        Path("acc-1".to_string()),
        Json(form("Shibuya Loft, renovated")),
    )
    .await;

    let (status, body) = read_json(into_response(result)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Shibuya Loft, renovated");
    assert_eq!(body["user_id"], owner.id);

    Ok(())
}

#[tokio::test]
/// Expect 403 when staff without superuser rights edit or delete a record they don't own
async fn forbids_non_owner_changes() -> Result<(), TestError> {
    let test = setup().await?;
    let owner = test.user().insert_owner("owner", true).await?;
    let staff = test.user().insert_user("staff", true, true, false).await?;
    test.accommodation()
        .insert_accommodation("acc-1", "tokyo", Some(owner.id))
        .await?;
    let session = logged_in(&test, staff.id).await;

    let update = update_accommodation(
        State(test.to_app_state()),
        session.clone(),
        Path("acc-1".to_string()),
        Json(form("Taken over")),
    )
    .await;
    let delete = delete_accommodation(
        State(test.to_app_state()),
        session,
        Path("acc-1".to_string()),
    )
    .await;

    assert_eq!(into_response(update).status(), StatusCode::FORBIDDEN);
    assert_eq!(into_response(delete).status(), StatusCode::FORBIDDEN);

    Ok(())
}

#[tokio::test]
/// Expect a superuser to delete any accommodation
async fn allows_superuser_delete() -> Result<(), TestError> {
    let test = setup().await?;
    let owner = test.user().insert_owner("owner", true).await?;
    let admin = test.user().insert_superuser("admin").await?;
    test.accommodation()
        .insert_accommodation("acc-1", "tokyo", Some(owner.id))
        .await?;
    let session = logged_in(&test, admin.id).await;

    let result = delete_accommodation(
        State(test.to_app_state()),
        session,
        Path("acc-1".to_string()),
    )
    .await;

    assert_eq!(into_response(result).status(), StatusCode::NO_CONTENT);

    Ok(())
}

#[tokio::test]
/// Expect 404 when an owner addresses someone else's accommodation
async fn hides_foreign_records_from_owner() -> Result<(), TestError> {
    let test = setup().await?;
    let owner = test.user().insert_owner("owner", true).await?;
    let other = test.user().insert_owner("other", true).await?;
    test.accommodation()
        .insert_accommodation("acc-2", "tokyo", Some(other.id))
        .await?;
    let session = logged_in(&test, owner.id).await;

    let result = delete_accommodation(
        State(test.to_app_state()),
        session,
        Path("acc-2".to_string()),
    )
    .await;

    assert_eq!(into_response(result).status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
/// Expect 403 for active users outside staff and the owner group
async fn forbids_plain_members() -> Result<(), TestError> {
    let test = setup().await?;
    let member = test.user().insert_user("member", true, false, false).await?;
    let session = logged_in(&test, member.id).await;

    let result = list_accommodations(
        State(test.to_app_state()),
        session,
        Query(AccommodationQuery::default()),
    )
    .await;

    assert_eq!(into_response(result).status(), StatusCode::FORBIDDEN);

    Ok(())
}

#[tokio::test]
/// Expect 401 without a logged in user
async fn requires_login() -> Result<(), TestError> {
    let test = setup().await?;

    let result = list_accommodations(
        State(test.to_app_state()),
        test.session.clone(),
        Query(AccommodationQuery::default()),
    )
    .await;

    assert_eq!(into_response(result).status(), StatusCode::UNAUTHORIZED);

    Ok(())
}
