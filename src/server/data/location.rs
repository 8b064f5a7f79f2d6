use std::collections::HashSet;

use chrono::Utc;
use entity::location::LocationType;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::model::db::LocationModel;

/// Validated values of a location's editable fields
#[derive(Clone, Debug, PartialEq)]
pub struct LocationParams {
    pub title: String,
    pub latitude: f64,
    pub longitude: f64,
    pub parent_id: Option<String>,
    pub location_type: LocationType,
    pub country_code: Option<String>,
    pub state_abbr: Option<String>,
    pub city: Option<String>,
}

/// Search and filters of the location listing
#[derive(Clone, Debug, Default)]
pub struct LocationFilter {
    /// Matched against title, country code, state abbreviation and city
    pub search: Option<String>,
    pub location_type: Option<LocationType>,
    pub country_code: Option<String>,
}

pub struct LocationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> LocationRepository<'a, C> {
    /// Creates a new instance of [`LocationRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, id: &str, params: LocationParams) -> Result<LocationModel, DbErr> {
        let now = Utc::now().naive_utc();

        let location = entity::location::ActiveModel {
            id: ActiveValue::Set(id.to_string()),
            title: ActiveValue::Set(params.title),
            latitude: ActiveValue::Set(params.latitude),
            longitude: ActiveValue::Set(params.longitude),
            parent_id: ActiveValue::Set(params.parent_id),
            location_type: ActiveValue::Set(params.location_type),
            country_code: ActiveValue::Set(params.country_code),
            state_abbr: ActiveValue::Set(params.state_abbr),
            city: ActiveValue::Set(params.city),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        };

        location.insert(self.db).await
    }

    pub async fn get(&self, id: &str) -> Result<Option<LocationModel>, DbErr> {
        entity::prelude::Location::find_by_id(id.to_string())
            .one(self.db)
            .await
    }

    /// Lists locations matching the filter, ordered by title
    pub async fn list(&self, filter: &LocationFilter) -> Result<Vec<LocationModel>, DbErr> {
        let mut query = entity::prelude::Location::find();

        if let Some(search) = filter.search.as_deref().filter(|s| !s.is_empty()) {
            query = query.filter(
                Condition::any()
                    .add(entity::location::Column::Title.contains(search))
                    .add(entity::location::Column::CountryCode.contains(search))
                    .add(entity::location::Column::StateAbbr.contains(search))
                    .add(entity::location::Column::City.contains(search)),
            );
        }

        if let Some(location_type) = filter.location_type {
            query = query.filter(entity::location::Column::LocationType.eq(location_type));
        }

        if let Some(country_code) = filter.country_code.as_deref() {
            query = query.filter(entity::location::Column::CountryCode.eq(country_code));
        }

        query
            .order_by_asc(entity::location::Column::Title)
            .order_by_asc(entity::location::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets every location of the provided types in a single query
    pub async fn get_by_types(
        &self,
        location_types: &[LocationType],
    ) -> Result<Vec<LocationModel>, DbErr> {
        entity::prelude::Location::find()
            .filter(entity::location::Column::LocationType.is_in(location_types.iter().copied()))
            .order_by_asc(entity::location::Column::Title)
            .all(self.db)
            .await
    }

    /// Collects the IDs of every ancestor of a location, nearest parent first
    ///
    /// Stops at the first repeated ID so a corrupted cyclic chain can't loop forever.
    pub async fn get_ancestor_ids(&self, id: &str) -> Result<Vec<String>, DbErr> {
        let mut ancestors = Vec::new();
        let mut seen = HashSet::from([id.to_string()]);
        let mut current = self.get(id).await?.and_then(|location| location.parent_id);

        while let Some(parent_id) = current {
            if !seen.insert(parent_id.clone()) {
                ancestors.push(parent_id);
                break;
            }

            current = self
                .get(&parent_id)
                .await?
                .and_then(|location| location.parent_id);
            ancestors.push(parent_id);
        }

        Ok(ancestors)
    }

    pub async fn update(
        &self,
        id: &str,
        params: LocationParams,
    ) -> Result<Option<LocationModel>, DbErr> {
        let location = match self.get(id).await? {
            Some(location) => location,
            None => return Ok(None),
        };

        let mut location_am = location.into_active_model();
        location_am.title = ActiveValue::Set(params.title);
        location_am.latitude = ActiveValue::Set(params.latitude);
        location_am.longitude = ActiveValue::Set(params.longitude);
        location_am.parent_id = ActiveValue::Set(params.parent_id);
        location_am.location_type = ActiveValue::Set(params.location_type);
        location_am.country_code = ActiveValue::Set(params.country_code);
        location_am.state_abbr = ActiveValue::Set(params.state_abbr);
        location_am.city = ActiveValue::Set(params.city);
        location_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let location = location_am.update(self.db).await?;

        Ok(Some(location))
    }

    /// Deletes a location
    ///
    /// Children keep existing with their parent cleared, accommodations at the location are
    /// deleted along with it. Returns OK regardless of the location existing, to confirm the
    /// deletion result check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, id: &str) -> Result<DeleteResult, DbErr> {
        entity::prelude::Location::delete_by_id(id.to_string())
            .exec(self.db)
            .await
    }
}
