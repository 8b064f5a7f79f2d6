//! Accommodation management under the ownership policy.
//!
//! Owner-group members only see and change the accommodations they own; superusers bypass the
//! owner check. New records without an owner are assigned to the acting user.

use rust_decimal::Decimal;
use sea_orm::{ActiveValue, DatabaseConnection, IntoActiveModel};

use crate::{
    model::accommodation::{
        AccommodationDto, AccommodationFormDto, AccommodationQuery, CreateAccommodationDto,
    },
    server::{
        data::{
            accommodation::{AccommodationFilter, AccommodationRepository},
            location::LocationRepository,
            user::UserRepository,
        },
        error::{
            access::AccessError, resource::ResourceError, validation::ValidationError, Error,
        },
        model::{actor::Actor, db::AccommodationModel},
        policy,
        util::form,
    },
};

static MAX_ID_LENGTH: usize = 20;
static MAX_TITLE_LENGTH: usize = 100;
static MAX_REVIEW_SCORE: Decimal = Decimal::from_parts(5, 0, 0, false, 0);

/// Validated accommodation fields, excluding the owner
struct AccommodationParams {
    feed: i16,
    title: String,
    country_code: String,
    bedroom_count: Option<i16>,
    review_score: Decimal,
    usd_rate: Decimal,
    latitude: f64,
    longitude: f64,
    images: Vec<String>,
    amenities: Vec<String>,
    published: bool,
    location_id: String,
}

impl AccommodationParams {
    fn apply(self, accommodation: &mut entity::accommodation::ActiveModel) {
        accommodation.feed = ActiveValue::Set(self.feed);
        accommodation.title = ActiveValue::Set(self.title);
        accommodation.country_code = ActiveValue::Set(self.country_code);
        accommodation.bedroom_count = ActiveValue::Set(self.bedroom_count);
        accommodation.review_score = ActiveValue::Set(self.review_score);
        accommodation.usd_rate = ActiveValue::Set(self.usd_rate);
        accommodation.latitude = ActiveValue::Set(self.latitude);
        accommodation.longitude = ActiveValue::Set(self.longitude);
        accommodation.images = ActiveValue::Set(self.images.into());
        accommodation.amenities = ActiveValue::Set(self.amenities.into());
        accommodation.published = ActiveValue::Set(self.published);
        accommodation.location_id = ActiveValue::Set(self.location_id);
    }
}

pub struct AccommodationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AccommodationService<'a> {
    /// Creates a new instance of [`AccommodationService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists the accommodations visible to the actor, ordered by title
    pub async fn list(
        &self,
        actor: &Actor,
        query: AccommodationQuery,
    ) -> Result<Vec<AccommodationDto>, Error> {
        let filter = AccommodationFilter {
            search: form::non_blank(query.search),
            country_code: form::non_blank(query.country_code),
            published: query.published,
        };

        let accommodation_repo = AccommodationRepository::new(self.db);
        let accommodations = accommodation_repo
            .list(policy::visibility(actor), &filter)
            .await?;

        Ok(accommodations.into_iter().map(to_dto).collect())
    }

    /// Gets an accommodation the actor may view
    ///
    /// Records outside the actor's visibility are reported as not found.
    pub async fn get(&self, actor: &Actor, id: &str) -> Result<AccommodationDto, Error> {
        let accommodation = self.get_visible(actor, id).await?;

        Ok(to_dto(accommodation))
    }

    /// Creates an accommodation, assigning the actor as owner when none is provided
    ///
    /// # Returns
    /// - `Ok(AccommodationDto)` - The created accommodation
    /// - `Err(Error::ValidationError)` - Submitted fields are invalid
    /// - `Err(Error::ResourceError)` - An accommodation with the ID already exists
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create(
        &self,
        actor: &Actor,
        payload: CreateAccommodationDto,
    ) -> Result<AccommodationDto, Error> {
        let accommodation_repo = AccommodationRepository::new(self.db);

        let id = payload.id.trim().to_string();
        let mut errors = ValidationError::new();
        if let Err(message) = form::required_text(&id, MAX_ID_LENGTH) {
            errors.add("id", message);
        }

        let requested_owner = payload.form.user_id;
        let params = self.validate(actor, payload.form, None, errors).await?;

        if accommodation_repo.get(&id).await?.is_some() {
            return Err(ResourceError::already_exists("Accommodation", &id).into());
        }

        let mut accommodation = entity::accommodation::ActiveModel {
            id: ActiveValue::Set(id),
            user_id: ActiveValue::Set(requested_owner),
            ..Default::default()
        };
        params.apply(&mut accommodation);
        policy::assign_owner(actor, &mut accommodation.user_id);

        let accommodation = accommodation_repo.create(accommodation).await?;

        tracing::info!(
            "User ID {} created accommodation {:?} owned by {:?}",
            actor.user_id,
            accommodation.id,
            accommodation.user_id
        );

        Ok(to_dto(accommodation))
    }

    /// Updates an accommodation the actor may edit
    ///
    /// The existing owner is kept unless a new one is explicitly submitted.
    pub async fn update(
        &self,
        actor: &Actor,
        id: &str,
        payload: AccommodationFormDto,
    ) -> Result<AccommodationDto, Error> {
        let existing = self.get_visible(actor, id).await?;
        if !policy::can_edit(actor, &existing) {
            return Err(AccessError::NotAccommodationOwner {
                user_id: actor.user_id,
                accommodation_id: existing.id,
            }
            .into());
        }

        let requested_owner = payload.user_id;
        let params = self
            .validate(actor, payload, existing.user_id, ValidationError::new())
            .await?;

        let mut accommodation = existing.into_active_model();
        params.apply(&mut accommodation);
        if let Some(owner_id) = requested_owner {
            accommodation.user_id = ActiveValue::Set(Some(owner_id));
        }
        policy::assign_owner(actor, &mut accommodation.user_id);

        let accommodation_repo = AccommodationRepository::new(self.db);
        let accommodation = accommodation_repo.update(accommodation).await?;

        Ok(to_dto(accommodation))
    }

    /// Deletes an accommodation the actor may delete, along with its localizations
    pub async fn delete(&self, actor: &Actor, id: &str) -> Result<(), Error> {
        let existing = self.get_visible(actor, id).await?;
        if !policy::can_delete(actor, &existing) {
            return Err(AccessError::NotAccommodationOwner {
                user_id: actor.user_id,
                accommodation_id: existing.id,
            }
            .into());
        }

        let accommodation_repo = AccommodationRepository::new(self.db);
        accommodation_repo.delete(id).await?;

        tracing::info!("User ID {} deleted accommodation {:?}", actor.user_id, id);

        Ok(())
    }

    /// Gets an accommodation, treating records outside the actor's visibility as missing
    pub(crate) async fn get_visible(
        &self,
        actor: &Actor,
        id: &str,
    ) -> Result<AccommodationModel, Error> {
        let accommodation_repo = AccommodationRepository::new(self.db);

        match accommodation_repo.get(id).await? {
            Some(accommodation) if policy::can_view(actor, &accommodation) => Ok(accommodation),
            _ => Err(ResourceError::not_found("Accommodation", id).into()),
        }
    }

    /// Validates the editable fields, appending to any errors already collected
    ///
    /// `current_owner` is the owner of the record being edited; resubmitting it is always allowed.
    async fn validate(
        &self,
        actor: &Actor,
        payload: AccommodationFormDto,
        current_owner: Option<i32>,
        mut errors: ValidationError,
    ) -> Result<AccommodationParams, Error> {
        let title = form::required_text(&payload.title, MAX_TITLE_LENGTH)
            .map_err(|message| errors.add("title", message))
            .unwrap_or_default();

        let country_code = payload.country_code.trim().to_string();
        let country_code_len = country_code.chars().count();
        if country_code.is_empty() {
            errors.add("country_code", form::REQUIRED);
        } else if country_code_len != 2 {
            errors.add(
                "country_code",
                format!(
                    "Ensure this value has exactly 2 characters (it has {}).",
                    country_code_len
                ),
            );
        }

        let feed = payload.feed.unwrap_or(0);
        if feed < 0 {
            errors.add("feed", "Ensure this value is greater than or equal to 0.");
        }

        if payload.bedroom_count.is_some_and(|count| count < 0) {
            errors.add(
                "bedroom_count",
                "Ensure this value is greater than or equal to 0.",
            );
        }

        let review_score = payload.review_score.unwrap_or(Decimal::ZERO);
        if review_score < Decimal::ZERO || review_score > MAX_REVIEW_SCORE {
            errors.add("review_score", "Ensure this value is between 0 and 5.");
        } else if let Some(message) = form::decimal_precision(review_score, 3, 1) {
            errors.add("review_score", message);
        }

        let usd_rate = match payload.usd_rate {
            None => {
                errors.add("usd_rate", form::REQUIRED);
                Decimal::ZERO
            }
            Some(rate) => {
                if rate < Decimal::ZERO {
                    errors.add("usd_rate", "Ensure this value is greater than or equal to 0.");
                } else if let Some(message) = form::decimal_precision(rate, 10, 2) {
                    errors.add("usd_rate", message);
                }
                rate
            }
        };

        let location_id = payload.location_id.trim().to_string();
        if location_id.is_empty() {
            errors.add("location_id", form::REQUIRED);
        } else {
            let location_repo = LocationRepository::new(self.db);
            if location_repo.get(&location_id).await?.is_none() {
                errors.add("location_id", form::invalid_choice(&location_id));
            }
        }

        if let Some(owner_id) = payload.user_id {
            if current_owner != Some(owner_id) && !policy::can_assign_owner(actor, owner_id) {
                errors.add("user_id", "You may only assign accommodations to yourself.");
            } else {
                let user_repo = UserRepository::new(self.db);
                if user_repo.get(owner_id).await?.is_none() {
                    errors.add("user_id", form::invalid_choice(&owner_id.to_string()));
                }
            }
        }

        errors.into_result()?;

        Ok(AccommodationParams {
            feed,
            title,
            country_code,
            bedroom_count: payload.bedroom_count,
            review_score,
            usd_rate,
            latitude: payload.latitude,
            longitude: payload.longitude,
            images: payload.images,
            amenities: payload.amenities,
            published: payload.published,
            location_id,
        })
    }
}

fn json_strings(value: serde_json::Value) -> Vec<String> {
    match value {
        serde_json::Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                serde_json::Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    }
}

pub(crate) fn to_dto(accommodation: AccommodationModel) -> AccommodationDto {
    AccommodationDto {
        id: accommodation.id,
        feed: accommodation.feed,
        title: accommodation.title,
        country_code: accommodation.country_code,
        bedroom_count: accommodation.bedroom_count,
        review_score: accommodation.review_score,
        usd_rate: accommodation.usd_rate,
        latitude: accommodation.latitude,
        longitude: accommodation.longitude,
        images: json_strings(accommodation.images),
        amenities: json_strings(accommodation.amenities),
        published: accommodation.published,
        location_id: accommodation.location_id,
        user_id: accommodation.user_id,
        created_at: accommodation.created_at,
        updated_at: accommodation.updated_at,
    }
}
