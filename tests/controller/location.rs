use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use entity::location::LocationType;
use inventory::{
    model::location::{CreateLocationDto, LocationFormDto, LocationQuery},
    server::controller::location::{
        create_location, delete_location, list_locations, update_location,
    },
};
use inventory_test_utils::prelude::*;

use crate::util::{into_response, logged_in, read_json};

fn city(title: &str, parent_id: Option<&str>) -> LocationFormDto {
    LocationFormDto {
        title: title.to_string(),
        latitude: 35.6762,
        longitude: 139.6503,
        parent_id: parent_id.map(str::to_string),
        location_type: Some("city".to_string()),
        ..Default::default()
    }
}

#[tokio::test]
/// Expect staff to create a location and 409 when the ID is reused
async fn creates_location_once() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_inventory_tables()
        .with_location("jp", "Japan", LocationType::Country, None)
        .build()
        .await?;
    let admin = test.user().insert_superuser("admin").await?;
    let session = logged_in(&test, admin.id).await;

    let payload = CreateLocationDto {
        id: "tokyo".to_string(),
        form: city("Tokyo", Some("jp")),
    };

    let created = create_location(
        State(test.to_app_state()),
        session.clone(),
        Json(payload.clone()),
    )
    .await;
    let (status, body) = read_json(into_response(created)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["parent_id"], "jp");
    assert_eq!(body["location_type"], "city");

    let duplicate = create_location(State(test.to_app_state()), session, Json(payload)).await;
    assert_eq!(into_response(duplicate).status(), StatusCode::CONFLICT);

    Ok(())
}

#[tokio::test]
/// Expect 403 when a property owner tries to change locations
async fn forbids_owner_writes() -> Result<(), TestError> {
    let test = TestBuilder::new().with_inventory_tables().build().await?;
    let owner = test.user().insert_owner("owner", true).await?;
    let session = logged_in(&test, owner.id).await;

    let result = create_location(
        State(test.to_app_state()),
        session,
        Json(CreateLocationDto {
            id: "tokyo".to_string(),
            form: city("Tokyo", None),
        }),
    )
    .await;

    assert_eq!(into_response(result).status(), StatusCode::FORBIDDEN);

    Ok(())
}

#[tokio::test]
/// Expect a parent that is a descendant of the location to be rejected
async fn rejects_parent_cycle() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_inventory_tables()
        .with_location("jp", "Japan", LocationType::Country, None)
        .with_location("tokyo", "Tokyo", LocationType::City, Some("jp"))
        .build()
        .await?;
    let admin = test.user().insert_superuser("admin").await?;
    let session = logged_in(&test, admin.id).await;

    let mut form = city("Japan", Some("tokyo"));
    form.location_type = Some("country".to_string());

    let result = update_location(
        State(test.to_app_state()),
        session,
        Path("jp".to_string()),
        Json(form),
    )
    .await;

    let (status, body) = read_json(into_response(result)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["fields"]["parent_id"].is_array());

    Ok(())
}

#[tokio::test]
/// Expect search to match the city column and deletion to detach children
async fn searches_and_deletes() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_inventory_tables()
        .with_location("jp", "Japan", LocationType::Country, None)
        .with_location("tokyo", "Tokyo", LocationType::City, Some("jp"))
        .with_location("osaka", "Osaka", LocationType::City, Some("jp"))
        .build()
        .await?;
    let admin = test.user().insert_superuser("admin").await?;
    let session = logged_in(&test, admin.id).await;

    let deleted = delete_location(
        State(test.to_app_state()),
        session.clone(),
        Path("jp".to_string()),
    )
    .await;
    assert_eq!(into_response(deleted).status(), StatusCode::NO_CONTENT);

    let listed = list_locations(
        State(test.to_app_state()),
        session,
        Query(LocationQuery {
            location_type: Some("city".to_string()),
            ..Default::default()
        }),
    )
    .await;
    let (status, body) = read_json(into_response(listed)).await;
    assert_eq!(status, StatusCode::OK);

    let cities = body.as_array().unwrap();
    let titles: Vec<&str> = cities.iter().map(|c| c["title"].as_str().unwrap()).collect();
    assert_eq!(titles, vec!["Osaka", "Tokyo"]);
    assert!(cities.iter().all(|c| c["parent_id"].is_null()));

    Ok(())
}
