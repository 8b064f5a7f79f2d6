//! Location management for the administration API.
//!
//! Anyone with admin access may read locations; writes are limited to staff and superusers.
//! Submitted forms are validated here, including the parent chain check that keeps the
//! hierarchy free of cycles.

use entity::location::LocationType;
use sea_orm::{ActiveEnum, DatabaseConnection};

use crate::{
    model::location::{CreateLocationDto, LocationDto, LocationFormDto, LocationQuery},
    server::{
        data::location::{LocationFilter, LocationParams, LocationRepository},
        error::{
            access::AccessError, resource::ResourceError, validation::ValidationError, Error,
        },
        model::{actor::Actor, db::LocationModel},
        policy,
        util::form,
    },
};

static MAX_ID_LENGTH: usize = 20;
static MAX_TITLE_LENGTH: usize = 100;

pub struct LocationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LocationService<'a> {
    /// Creates a new instance of [`LocationService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists locations matching the query, ordered by title
    ///
    /// # Returns
    /// - `Ok(Vec<LocationDto>)` - Matching locations
    /// - `Err(Error::ValidationError)` - Unknown `location_type` filter
    /// - `Err(Error::DbErr)` - Database query failed
    pub async fn list(&self, query: LocationQuery) -> Result<Vec<LocationDto>, Error> {
        let location_type = match form::non_blank(query.location_type) {
            None => None,
            Some(code) => match LocationType::try_from_value(&code) {
                Ok(location_type) => Some(location_type),
                Err(_) => {
                    let mut errors = ValidationError::new();
                    errors.add("location_type", form::invalid_choice(&code));
                    return Err(errors.into());
                }
            },
        };

        let filter = LocationFilter {
            search: form::non_blank(query.search),
            location_type,
            country_code: form::non_blank(query.country_code),
        };

        let location_repo = LocationRepository::new(self.db);
        let locations = location_repo.list(&filter).await?;

        Ok(locations.into_iter().map(to_dto).collect())
    }

    pub async fn get(&self, id: &str) -> Result<LocationDto, Error> {
        let location_repo = LocationRepository::new(self.db);

        match location_repo.get(id).await? {
            Some(location) => Ok(to_dto(location)),
            None => Err(ResourceError::not_found("Location", id).into()),
        }
    }

    /// Creates a location with an externally assigned ID
    ///
    /// # Returns
    /// - `Ok(LocationDto)` - The created location
    /// - `Err(Error::AccessError)` - Actor may not manage locations
    /// - `Err(Error::ValidationError)` - Submitted fields are invalid
    /// - `Err(Error::ResourceError)` - A location with the ID already exists
    pub async fn create(
        &self,
        actor: &Actor,
        payload: CreateLocationDto,
    ) -> Result<LocationDto, Error> {
        ensure_can_manage(actor)?;

        let location_repo = LocationRepository::new(self.db);

        let id = payload.id.trim().to_string();
        let mut errors = ValidationError::new();
        if let Err(message) = form::required_text(&id, MAX_ID_LENGTH) {
            errors.add("id", message);
        }
        let params = self.validate(payload.form, None, errors).await?;

        if location_repo.get(&id).await?.is_some() {
            return Err(ResourceError::already_exists("Location", &id).into());
        }

        let location = location_repo.create(&id, params).await?;

        tracing::info!("User ID {} created location {:?}", actor.user_id, location.id);

        Ok(to_dto(location))
    }

    pub async fn update(
        &self,
        actor: &Actor,
        id: &str,
        payload: LocationFormDto,
    ) -> Result<LocationDto, Error> {
        ensure_can_manage(actor)?;

        let location_repo = LocationRepository::new(self.db);
        if location_repo.get(id).await?.is_none() {
            return Err(ResourceError::not_found("Location", id).into());
        }

        let params = self
            .validate(payload, Some(id), ValidationError::new())
            .await?;

        match location_repo.update(id, params).await? {
            Some(location) => Ok(to_dto(location)),
            None => Err(ResourceError::not_found("Location", id).into()),
        }
    }

    /// Deletes a location, detaching its children and deleting its accommodations
    pub async fn delete(&self, actor: &Actor, id: &str) -> Result<(), Error> {
        ensure_can_manage(actor)?;

        let location_repo = LocationRepository::new(self.db);
        let result = location_repo.delete(id).await?;

        if result.rows_affected == 0 {
            return Err(ResourceError::not_found("Location", id).into());
        }

        tracing::info!("User ID {} deleted location {:?}", actor.user_id, id);

        Ok(())
    }

    /// Validates the editable fields, appending to any errors already collected
    ///
    /// `location_id` is the record being edited, used to reject parents that would close a cycle.
    async fn validate(
        &self,
        payload: LocationFormDto,
        location_id: Option<&str>,
        mut errors: ValidationError,
    ) -> Result<LocationParams, Error> {
        let title = form::required_text(&payload.title, MAX_TITLE_LENGTH)
            .map_err(|message| errors.add("title", message))
            .unwrap_or_default();

        let location_type = match form::non_blank(payload.location_type) {
            None => LocationType::default(),
            Some(code) => LocationType::try_from_value(&code).unwrap_or_else(|_| {
                errors.add("location_type", form::invalid_choice(&code));
                LocationType::default()
            }),
        };

        let country_code = form::optional_text(payload.country_code, 2)
            .map_err(|message| errors.add("country_code", message))
            .unwrap_or_default();
        let state_abbr = form::optional_text(payload.state_abbr, 3)
            .map_err(|message| errors.add("state_abbr", message))
            .unwrap_or_default();
        let city = form::optional_text(payload.city, 30)
            .map_err(|message| errors.add("city", message))
            .unwrap_or_default();

        let parent_id = form::non_blank(payload.parent_id);
        if let Some(parent_id) = parent_id.as_deref() {
            if let Some(message) = self.check_parent(parent_id, location_id).await? {
                errors.add("parent_id", message);
            }
        }

        errors.into_result()?;

        Ok(LocationParams {
            title,
            latitude: payload.latitude,
            longitude: payload.longitude,
            parent_id,
            location_type,
            country_code,
            state_abbr,
            city,
        })
    }

    /// Returns a message when `parent_id` is missing or would make the hierarchy cyclic
    async fn check_parent(
        &self,
        parent_id: &str,
        location_id: Option<&str>,
    ) -> Result<Option<String>, Error> {
        if location_id == Some(parent_id) {
            return Ok(Some("A location cannot be its own parent.".to_string()));
        }

        let location_repo = LocationRepository::new(self.db);
        if location_repo.get(parent_id).await?.is_none() {
            return Ok(Some(form::invalid_choice(parent_id)));
        }

        if let Some(location_id) = location_id {
            let ancestors = location_repo.get_ancestor_ids(parent_id).await?;
            if ancestors.iter().any(|ancestor| ancestor == location_id) {
                return Ok(Some(
                    "A location cannot be placed under one of its own descendants.".to_string(),
                ));
            }
        }

        Ok(None)
    }
}

fn ensure_can_manage(actor: &Actor) -> Result<(), AccessError> {
    if policy::can_manage_locations(actor) {
        Ok(())
    } else {
        Err(AccessError::LocationsReadOnly(actor.user_id))
    }
}

pub(crate) fn to_dto(location: LocationModel) -> LocationDto {
    LocationDto {
        id: location.id,
        title: location.title,
        latitude: location.latitude,
        longitude: location.longitude,
        parent_id: location.parent_id,
        location_type: location.location_type.to_value(),
        country_code: location.country_code,
        state_abbr: location.state_abbr,
        city: location.city,
        created_at: location.created_at,
        updated_at: location.updated_at,
    }
}
