//! Tests for the sitemap job writing to disk.

use entity::location::LocationType;
use inventory::server::service::sitemap::SitemapService;
use inventory_test_utils::prelude::*;

async fn setup() -> Result<TestContext, TestError> {
    TestBuilder::new()
        .with_inventory_tables()
        .with_location("asia", "Asia", LocationType::Country, None)
        .with_location("tokyo", "Tokyo", LocationType::City, Some("asia"))
        .with_location("us", "United States", LocationType::Country, None)
        .with_location("ny", "New York", LocationType::State, Some("us"))
        .with_location("nyc", "New York City", LocationType::City, Some("ny"))
        .with_location("buffalo", "Buffalo", LocationType::City, Some("ny"))
        .with_location("vt", "Vermont", LocationType::State, Some("us"))
        .with_location("dc", "Washington D.C.", LocationType::City, Some("us"))
        .build()
        .await
}

#[tokio::test]
/// Expect the nested hierarchy written with states and direct cities mixed by slug
async fn writes_nested_sitemap() -> Result<(), TestError> {
    let test = setup().await?;
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sitemap.json");

    let written = SitemapService::new(&test.db).generate(&path).await.unwrap();

    assert_eq!(written, 2);

    let contents = std::fs::read_to_string(&path).unwrap();
    let sitemap: serde_json::Value = serde_json::from_str(&contents).unwrap();

    assert_eq!(
        sitemap[0],
        serde_json::json!({"Asia": "asia", "locations": [{"tokyo": "asia/tokyo"}]})
    );

    let us = &sitemap[1];
    assert_eq!(us["United States"], "united-states");

    let locations = us["locations"].as_array().unwrap();
    assert_eq!(locations.len(), 3);
    assert_eq!(locations[0]["new-york"], "united-states/new-york");
    assert_eq!(
        locations[0]["locations"],
        serde_json::json!([
            {"buffalo": "united-states/new-york/buffalo"},
            {"new-york-city": "united-states/new-york/new-york-city"}
        ])
    );
    assert_eq!(locations[1]["vermont"], "united-states/vermont");
    assert!(locations[1].get("locations").is_none());
    assert_eq!(locations[2]["washington-dc"], "united-states/washington-dc");

    Ok(())
}

#[tokio::test]
/// Expect a second run over unchanged data to overwrite with identical bytes
async fn rerun_is_byte_identical() -> Result<(), TestError> {
    let test = setup().await?;
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sitemap.json");
    std::fs::write(&path, "stale contents").unwrap();

    let sitemap_service = SitemapService::new(&test.db);
    sitemap_service.generate(&path).await.unwrap();
    let first = std::fs::read(&path).unwrap();
    sitemap_service.generate(&path).await.unwrap();
    let second = std::fs::read(&path).unwrap();

    assert_eq!(first, second);
    assert!(first.starts_with(b"[\n    {\n        \"Asia\": \"asia\""));

    Ok(())
}

#[tokio::test]
/// Expect the job to abort when the output directory does not exist
async fn fails_for_unwritable_path() -> Result<(), TestError> {
    let test = setup().await?;
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("sitemap.json");

    let result = SitemapService::new(&test.db).generate(&path).await;

    assert!(matches!(
        result,
        Err(inventory::server::error::Error::IoError(_))
    ));

    Ok(())
}
