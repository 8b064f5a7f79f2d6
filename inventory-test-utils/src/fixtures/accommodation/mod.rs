//! Accommodation and localization fixture utilities.

pub mod factory;

use chrono::Utc;
use entity::localize_accommodation::Language;
use rust_decimal::Decimal;
use sea_orm::{ActiveEnum, ActiveValue, EntityTrait};
use serde_json::json;

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn accommodation<'a>(&'a self) -> AccommodationFixtures<'a> {
        AccommodationFixtures { context: self }
    }
}

pub struct AccommodationFixtures<'a> {
    context: &'a TestContext,
}

impl<'a> AccommodationFixtures<'a> {
    /// Insert an unpublished accommodation titled `Accommodation {id}`
    ///
    /// The location must already exist.
    pub async fn insert_accommodation(
        &self,
        id: &str,
        location_id: &str,
        user_id: Option<i32>,
    ) -> Result<entity::accommodation::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::Accommodation::insert(entity::accommodation::ActiveModel {
                id: ActiveValue::Set(id.to_string()),
                feed: ActiveValue::Set(0),
                title: ActiveValue::Set(format!("Accommodation {}", id)),
                country_code: ActiveValue::Set("JP".to_string()),
                bedroom_count: ActiveValue::Set(Some(2)),
                review_score: ActiveValue::Set(Decimal::new(45, 1)),
                usd_rate: ActiveValue::Set(Decimal::new(12000, 2)),
                latitude: ActiveValue::Set(35.6762),
                longitude: ActiveValue::Set(139.6503),
                images: ActiveValue::Set(json!(["https://example.com/1.jpg"])),
                amenities: ActiveValue::Set(json!(["wifi"])),
                published: ActiveValue::Set(false),
                location_id: ActiveValue::Set(location_id.to_string()),
                user_id: ActiveValue::Set(user_id),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
            })
            .exec_with_returning(&self.context.db)
            .await?,
        )
    }

    /// Insert a localization with a check-in policy
    pub async fn insert_localization(
        &self,
        accommodation_id: &str,
        language: Language,
    ) -> Result<entity::localize_accommodation::Model, TestError> {
        Ok(entity::prelude::LocalizeAccommodation::insert(
            entity::localize_accommodation::ActiveModel {
                accommodation_id: ActiveValue::Set(accommodation_id.to_string()),
                language: ActiveValue::Set(language),
                description: ActiveValue::Set(format!("Description in {}", language.to_value())),
                policy: ActiveValue::Set(json!({ "check_in": "15:00" })),
                ..Default::default()
            },
        )
        .exec_with_returning(&self.context.db)
        .await?)
    }
}
