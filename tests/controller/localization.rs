use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use entity::{localize_accommodation::Language, location::LocationType};
use inventory::{
    model::localization::LocalizationFormDto,
    server::controller::{
        accommodation::delete_accommodation,
        localization::{create_localization, list_localizations, update_localization},
    },
};
use inventory_test_utils::prelude::*;
use sea_orm::EntityTrait;
use serde_json::json;

use crate::util::{into_response, logged_in, read_json};

async fn setup() -> Result<TestContext, TestError> {
    TestBuilder::new()
        .with_inventory_tables()
        .with_location("tokyo", "Tokyo", LocationType::City, None)
        .build()
        .await
}

#[tokio::test]
/// Expect the owner to add a localization labelled with the accommodation title
async fn creates_localization_for_owner() -> Result<(), TestError> {
    let test = setup().await?;
    let owner = test.user().insert_owner("owner", true).await?;
    test.accommodation()
        .insert_accommodation("acc-1", "tokyo", Some(owner.id))
        .await?;
    let session = logged_in(&test, owner.id).await;

    let result = create_localization(
        State(test.to_app_state()),
        session,
        Path("acc-1".to_string()),
        Json(LocalizationFormDto {
            language: "fr".to_string(),
            description: "Appartement lumineux".to_string(),
            policy: Some(json!({"check_in": "15:00", "check_out": "11:00"})),
        }),
    )
    .await;

    let (status, body) = read_json(into_response(result)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["label"], "Localized Accommodation acc-1 in fr");
    assert_eq!(body["policy"]["check_out"], "11:00");

    Ok(())
}

#[tokio::test]
/// Expect field errors for an unknown language and a missing policy
async fn rejects_invalid_language_and_policy() -> Result<(), TestError> {
    let test = setup().await?;
    let owner = test.user().insert_owner("owner", true).await?;
    test.accommodation()
        .insert_accommodation("acc-1", "tokyo", Some(owner.id))
        .await?;
    let session = logged_in(&test, owner.id).await;

    let result = create_localization(
        State(test.to_app_state()),
        session,
        Path("acc-1".to_string()),
        Json(LocalizationFormDto {
            language: "xx".to_string(),
            description: "Description".to_string(),
            policy: None,
        }),
    )
    .await;

    let (status, body) = read_json(into_response(result)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["fields"]["language"].is_array());
    assert!(body["fields"]["policy"].is_array());

    Ok(())
}

#[tokio::test]
/// Expect 403 when staff edit the localization of an accommodation they don't own
async fn forbids_non_owner_update() -> Result<(), TestError> {
    let test = setup().await?;
    let owner = test.user().insert_owner("owner", true).await?;
    let staff = test.user().insert_user("staff", true, true, false).await?;
    test.accommodation()
        .insert_accommodation("acc-1", "tokyo", Some(owner.id))
        .await?;
    let localization = test
        .accommodation()
        .insert_localization("acc-1", Language::En)
        .await?;
    let session = logged_in(&test, staff.id).await;

    let result = update_localization(
        State(test.to_app_state()),
        session,
        Path(localization.id),
        Json(LocalizationFormDto {
            language: "en".to_string(),
            description: "Rewritten".to_string(),
            policy: Some(json!({"check_in": "14:00"})),
        }),
    )
    .await;

    assert_eq!(into_response(result).status(), StatusCode::FORBIDDEN);

    Ok(())
}

#[tokio::test]
/// Expect localizations to disappear with their accommodation
async fn cascades_with_accommodation() -> Result<(), TestError> {
    let test = setup().await?;
    let admin = test.user().insert_superuser("admin").await?;
    test.accommodation()
        .insert_accommodation("acc-1", "tokyo", None)
        .await?;
    test.accommodation()
        .insert_localization("acc-1", Language::En)
        .await?;
    test.accommodation()
        .insert_localization("acc-1", Language::Fr)
        .await?;
    let session = logged_in(&test, admin.id).await;

    let listed = list_localizations(
        State(test.to_app_state()),
        session.clone(),
        Path("acc-1".to_string()),
    )
    .await;
    let (status, body) = read_json(into_response(listed)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);

    let deleted = delete_accommodation(
        State(test.to_app_state()),
        session,
        Path("acc-1".to_string()),
    )
    .await;
    assert_eq!(into_response(deleted).status(), StatusCode::NO_CONTENT);

    let remaining = entity::prelude::LocalizeAccommodation::find()
        .all(&test.db)
        .await?;
    assert!(remaining.is_empty());

    Ok(())
}
