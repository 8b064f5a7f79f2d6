//! Factory functions for generating mock accommodation models.
//!
//! Pure functions returning in-memory model instances that don't require database
//! interaction, suitable for unit tests of the ownership policy.

use chrono::Utc;
use rust_decimal::Decimal;
use serde_json::json;

/// Create a mock accommodation model for testing.
///
/// # Arguments
/// - `id` - Primary key of the accommodation
/// - `location_id` - ID of the location it belongs to
/// - `user_id` - Owning user, if any
pub fn mock_accommodation_model(
    id: &str,
    location_id: &str,
    user_id: Option<i32>,
) -> entity::accommodation::Model {
    let now = Utc::now().naive_utc();
    entity::accommodation::Model {
        id: id.to_string(),
        feed: 0,
        title: format!("Accommodation {}", id),
        country_code: "JP".to_string(),
        bedroom_count: Some(2),
        review_score: Decimal::new(45, 1),
        usd_rate: Decimal::new(12000, 2),
        latitude: 35.6762,
        longitude: 139.6503,
        images: json!([]),
        amenities: json!([]),
        published: false,
        location_id: location_id.to_string(),
        user_id,
        created_at: now,
        updated_at: now,
    }
}
