//! Factory functions for generating mock location models.

use chrono::Utc;
use entity::location::LocationType;

/// Create a mock location model for testing.
///
/// Returns an in-memory model with zeroed coordinates and no address codes.
pub fn mock_location_model(
    id: &str,
    title: &str,
    location_type: LocationType,
    parent_id: Option<&str>,
) -> entity::location::Model {
    let now = Utc::now().naive_utc();
    entity::location::Model {
        id: id.to_string(),
        title: title.to_string(),
        latitude: 0.0,
        longitude: 0.0,
        parent_id: parent_id.map(str::to_string),
        location_type,
        country_code: None,
        state_abbr: None,
        city: None,
        created_at: now,
        updated_at: now,
    }
}
