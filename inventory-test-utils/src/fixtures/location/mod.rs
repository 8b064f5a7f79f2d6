//! Location fixture utilities.

pub mod factory;

use chrono::Utc;
use entity::location::LocationType;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn location<'a>(&'a self) -> LocationFixtures<'a> {
        LocationFixtures { context: self }
    }
}

pub struct LocationFixtures<'a> {
    context: &'a TestContext,
}

impl<'a> LocationFixtures<'a> {
    /// Insert a location with zeroed coordinates and no address codes
    pub async fn insert_location(
        &self,
        id: &str,
        title: &str,
        location_type: LocationType,
        parent_id: Option<&str>,
    ) -> Result<entity::location::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::Location::insert(entity::location::ActiveModel {
                id: ActiveValue::Set(id.to_string()),
                title: ActiveValue::Set(title.to_string()),
                latitude: ActiveValue::Set(0.0),
                longitude: ActiveValue::Set(0.0),
                parent_id: ActiveValue::Set(parent_id.map(str::to_string)),
                location_type: ActiveValue::Set(location_type),
                country_code: ActiveValue::Set(None),
                state_abbr: ActiveValue::Set(None),
                city: ActiveValue::Set(None),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
            })
            .exec_with_returning(&self.context.db)
            .await?,
        )
    }
}
